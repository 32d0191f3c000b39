use std::env;

use tcia_client::http_handler::common::{Endpoint, HTTPError};
use tcia_client::http_handler::http_client::HTTPClient;
use tcia_client::http_handler::http_request::{
    body_part_values_get::BodyPartValuesRequest, collection_values_get::CollectionValuesRequest,
    image_get::ImageRequest, manufacturer_values_get::ManufacturerValuesRequest,
    modality_values_get::ModalityValuesRequest,
    new_patients_in_collection_get::NewPatientsInCollectionRequest,
    new_studies_in_patient_collection_get::NewStudiesInPatientCollectionRequest,
    patient_get::PatientRequest, patient_study_get::PatientStudyRequest,
    patients_by_modality_get::PatientsByModalityRequest, request_common::NoBodyHTTPRequestType,
    series_get::SeriesRequest, series_size_get::SeriesSizeRequest,
    shared_list_get::SharedListRequest, single_image_get::SingleImageRequest,
    sop_instance_uids_get::SOPInstanceUIDsRequest,
};
use tcia_client::http_handler::http_response::image_archive::ImageArchive;
use tcia_client::http_handler::http_response::response_common::ResponseError;
use tcia_client::{error, fatal, info, log, warn};

const IMAGE_ARCHIVE_PATH: &str = "images.zip";

// Example identifiers from the archive's public TCGA-GBM collection.
const EXAMPLE_COLLECTION: &str = "TCGA-GBM";
const EXAMPLE_PATIENT_ID: &str = "TCGA-08-0244";
const EXAMPLE_STUDY_UID: &str =
    "1.3.6.1.4.1.14519.5.2.1.7695.4001.130563880911723253267280582465";
const EXAMPLE_SERIES_UID: &str =
    "1.3.6.1.4.1.14519.5.2.1.7695.4001.306204232344341694648035234440";
const EXAMPLE_SOP_UID: &str =
    "1.3.6.1.4.1.14519.5.2.1.7695.4001.254637948180506182312529390348";
const EXAMPLE_DATE: &str = "1998-12-08";
const EXAMPLE_SHARED_LIST: &str = "test";

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let mut args = env::args().skip(1);
    let Some(base_url) = args.next() else {
        fatal!("usage: tcia-client <base_url> <credentials>");
    };
    let Some(credentials) = args.next() else {
        fatal!("usage: tcia-client <base_url> <credentials>");
    };
    let client = HTTPClient::new(&base_url, &credentials);
    run_metadata_queries(&client).await;
    run_image_downloads(&client).await;
}

/// Walks through every metadata endpoint with the example identifiers,
/// printing each payload as the server serialized it.
async fn run_metadata_queries(client: &HTTPClient) {
    report(
        Endpoint::GetSharedList,
        SharedListRequest::new(EXAMPLE_SHARED_LIST).send_request(client).await,
    );
    report(
        Endpoint::NewPatientsInCollection,
        NewPatientsInCollectionRequest::new(EXAMPLE_COLLECTION, EXAMPLE_DATE)
            .send_request(client)
            .await,
    );
    report(
        Endpoint::GetSeriesSize,
        SeriesSizeRequest::new(EXAMPLE_SERIES_UID).send_request(client).await,
    );
    report(
        Endpoint::PatientsByModality,
        PatientsByModalityRequest::new(EXAMPLE_COLLECTION, "MR").send_request(client).await,
    );
    report(
        Endpoint::GetSOPInstanceUIDs,
        SOPInstanceUIDsRequest::new(EXAMPLE_SERIES_UID).send_request(client).await,
    );
    let new_studies = {
        let mut request =
            NewStudiesInPatientCollectionRequest::new(EXAMPLE_COLLECTION, EXAMPLE_DATE);
        request.patient_id = Some(String::from(EXAMPLE_PATIENT_ID));
        request
    };
    report(
        Endpoint::NewStudiesInPatientCollection,
        new_studies.send_request(client).await,
    );
    report(
        Endpoint::GetManufacturerValues,
        ManufacturerValuesRequest {
            collection: Some(String::from(EXAMPLE_COLLECTION)),
            body_part_examined: Some(String::from("BRAIN")),
            modality: Some(String::from("MR")),
            ..ManufacturerValuesRequest::default()
        }
        .send_request(client)
        .await,
    );
    report(
        Endpoint::GetModalityValues,
        ModalityValuesRequest {
            collection: Some(String::from(EXAMPLE_COLLECTION)),
            body_part_examined: Some(String::from("BRAIN")),
            ..ModalityValuesRequest::default()
        }
        .send_request(client)
        .await,
    );
    report(
        Endpoint::GetPatientStudy,
        PatientStudyRequest {
            collection: Some(String::from(EXAMPLE_COLLECTION)),
            patient_id: Some(String::from(EXAMPLE_PATIENT_ID)),
            study_instance_uid: Some(String::from(EXAMPLE_STUDY_UID)),
            ..PatientStudyRequest::default()
        }
        .send_request(client)
        .await,
    );
    report(
        Endpoint::GetBodyPartValues,
        BodyPartValuesRequest {
            collection: Some(String::from(EXAMPLE_COLLECTION)),
            modality: Some(String::from("MR")),
            ..BodyPartValuesRequest::default()
        }
        .send_request(client)
        .await,
    );
    report(
        Endpoint::GetPatient,
        PatientRequest {
            collection: Some(String::from(EXAMPLE_COLLECTION)),
            ..PatientRequest::default()
        }
        .send_request(client)
        .await,
    );
    report(
        Endpoint::GetSeries,
        SeriesRequest {
            collection: Some(String::from(EXAMPLE_COLLECTION)),
            modality: Some(String::from("MR")),
            manufacturer: Some(String::from("GE MEDICAL SYSTEMS")),
            manufacturer_model_name: Some(String::from("GENESIS_SIGNA")),
            ..SeriesRequest::default()
        }
        .send_request(client)
        .await,
    );
    report(
        Endpoint::GetCollectionValues,
        CollectionValuesRequest::default().send_request(client).await,
    );
}

/// Downloads the series archive and the single-instance archive, saving each
/// verbatim as `images.zip` in the working directory.
async fn run_image_downloads(client: &HTTPClient) {
    log!("downloading the image archive of series {EXAMPLE_SERIES_UID}");
    match ImageRequest::new(EXAMPLE_SERIES_UID).send_request(client).await {
        Ok(archive) => save_archive(Endpoint::GetImage, archive).await,
        Err(err) => report_error(Endpoint::GetImage, &err),
    }
    log!("downloading the single-instance archive of {EXAMPLE_SOP_UID}");
    match SingleImageRequest::new(EXAMPLE_SOP_UID, EXAMPLE_SERIES_UID).send_request(client).await {
        Ok(archive) => save_archive(Endpoint::GetSingleImage, archive).await,
        Err(err) => report_error(Endpoint::GetSingleImage, &err),
    }
}

async fn save_archive(endpoint: Endpoint, archive: ImageArchive) {
    let declared = archive.content_length();
    let image_count = archive.image_count();
    match archive.save_to(IMAGE_ARCHIVE_PATH).await {
        Ok(written) => {
            if let Some(expected) = declared {
                if expected != written {
                    warn!("{endpoint}: wrote {written} bytes, server declared {expected}");
                }
            }
            let images = image_count.map_or_else(|| String::from("?"), |c| c.to_string());
            info!("{endpoint}: saved {IMAGE_ARCHIVE_PATH} ({written} bytes, {images} images)");
        }
        Err(err) => report_error(endpoint, &err),
    }
}

fn report(endpoint: Endpoint, result: Result<String, HTTPError>) {
    match result {
        Ok(payload) => info!("{endpoint}: the server returned:\n{payload}"),
        Err(err) => report_error(endpoint, &err),
    }
}

fn report_error(endpoint: Endpoint, err: &HTTPError) {
    match err {
        HTTPError::HTTPResponseError(ResponseError::HttpStatus { code, body }) => {
            error!("{endpoint} failed with code {code}: {body}");
        }
        other => error!("{endpoint} failed: {other}"),
    }
}
