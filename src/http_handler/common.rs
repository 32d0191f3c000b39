use super::http_response::response_common::ResponseError;
use strum_macros::{Display, EnumIter};

/// Query attribute names defined by the archive's data model. The casing is
/// the service's, not ours.
pub const COLLECTION: &str = "Collection";
pub const PATIENT_ID: &str = "PatientID";
pub const STUDY_INSTANCE_UID: &str = "StudyInstanceUID";
pub const SERIES_INSTANCE_UID: &str = "SeriesInstanceUID";
pub const SOP_INSTANCE_UID: &str = "SOPInstanceUID";
pub const MODALITY: &str = "Modality";
pub const BODY_PART_EXAMINED: &str = "BodyPartExamined";
pub const MANUFACTURER: &str = "Manufacturer";
pub const MANUFACTURER_MODEL_NAME: &str = "ManufacturerModelName";
pub const DATE: &str = "Date";
pub const NAME: &str = "name";
pub const FORMAT: &str = "format";

/// The named operations the data API offers.
///
/// The `Display` form of each variant is the exact path segment appended to
/// the base URL, mixed casing included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Endpoint {
    #[strum(to_string = "getCollectionValues")]
    GetCollectionValues,
    #[strum(to_string = "getModalityValues")]
    GetModalityValues,
    #[strum(to_string = "getManufacturerValues")]
    GetManufacturerValues,
    #[strum(to_string = "getBodyPartValues")]
    GetBodyPartValues,
    #[strum(to_string = "getPatient")]
    GetPatient,
    #[strum(to_string = "getPatientStudy")]
    GetPatientStudy,
    #[strum(to_string = "getSeries")]
    GetSeries,
    #[strum(to_string = "getSeriesSize")]
    GetSeriesSize,
    #[strum(to_string = "getImage")]
    GetImage,
    #[strum(to_string = "getSingleImage")]
    GetSingleImage,
    #[strum(to_string = "getSOPInstanceUIDs")]
    GetSOPInstanceUIDs,
    #[strum(to_string = "NewStudiesInPatientCollection")]
    NewStudiesInPatientCollection,
    #[strum(to_string = "PatientsByModality")]
    PatientsByModality,
    #[strum(to_string = "NewPatientsInCollection")]
    NewPatientsInCollection,
    #[strum(to_string = "getSharedList")]
    GetSharedList,
}

/// Serialization the service is asked to use for metadata payloads, sent as
/// the trailing `format` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Html,
    Xml,
}

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPResponseError(ResponseError),
    HTTPTransferError(std::io::Error),
}

impl std::error::Error for HTTPError {}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

impl From<std::io::Error> for HTTPError {
    fn from(value: std::io::Error) -> Self { HTTPError::HTTPTransferError(value) }
}
