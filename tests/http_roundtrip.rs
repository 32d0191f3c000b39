//! Round-trip tests against a mocked archive service.
//!
//! wiremock stands in for the data API so that header, query and error-path
//! behavior can be observed on real requests.

use tcia_client::http_handler::common::HTTPError;
use tcia_client::http_handler::http_client::HTTPClient;
use tcia_client::http_handler::http_request::{
    collection_values_get::CollectionValuesRequest, image_get::ImageRequest,
    patient_get::PatientRequest, request_common::NoBodyHTTPRequestType, series_get::SeriesRequest,
    shared_list_get::SharedListRequest, single_image_get::SingleImageRequest,
};
use tcia_client::http_handler::http_response::response_common::ResponseError;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREDENTIALS: &str = "dGVzdDp0ZXN0";

async fn mock_client() -> (MockServer, HTTPClient) {
    let server = MockServer::start().await;
    let client = HTTPClient::new(&server.uri(), CREDENTIALS);
    (server, client)
}

#[tokio::test]
async fn authorization_header_is_sent_verbatim() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/getCollectionValues"))
        .and(header("Authorization", "ldap dGVzdDp0ZXN0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"Collection": "TCGA-GBM"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let payload = CollectionValuesRequest::default().send_request(&client).await.unwrap();
    assert!(payload.contains("TCGA-GBM"));
}

#[tokio::test]
async fn series_filters_and_format_reach_the_wire() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/getSeries"))
        .and(query_param("Collection", "TCGA-GBM"))
        .and(query_param("Modality", "MR"))
        .and(query_param("format", "json"))
        .and(query_param_is_missing("SeriesInstanceUID"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let request = SeriesRequest {
        collection: Some(String::from("TCGA-GBM")),
        modality: Some(String::from("MR")),
        ..SeriesRequest::default()
    };
    request.send_request(&client).await.unwrap();
}

#[tokio::test]
async fn absent_filters_never_reach_the_wire() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/getPatient"))
        .and(query_param_is_missing("Collection"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    PatientRequest::default().send_request(&client).await.unwrap();
}

#[tokio::test]
async fn http_error_carries_code_and_body() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/getSharedList"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such list"))
        .mount(&server)
        .await;

    let err = SharedListRequest::new("missing").send_request(&client).await.unwrap_err();
    match err {
        HTTPError::HTTPResponseError(ResponseError::HttpStatus { code, body }) => {
            assert_eq!(code, 404);
            assert_eq!(body, "no such list");
        }
        other => panic!("expected an HTTP status error, got {other:?}"),
    }
}

#[tokio::test]
async fn image_archive_saves_verbatim() {
    let (server, client) = mock_client().await;
    let archive_bytes: Vec<u8> = (0u16..2048).map(|i| (i % 251) as u8).collect();
    Mock::given(method("GET"))
        .and(path("/getImage"))
        .and(query_param("SeriesInstanceUID", "1.2.3"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("imageCount", "2")
                .set_body_bytes(archive_bytes.clone()),
        )
        .mount(&server)
        .await;

    let archive = ImageRequest::new("1.2.3").send_request(&client).await.unwrap();
    assert_eq!(archive.image_count(), Some(2));
    let declared = archive.content_length();

    let target = std::env::temp_dir().join("tcia_roundtrip_images.zip");
    let written = archive.save_to(&target).await.unwrap();
    assert_eq!(written, archive_bytes.len() as u64);
    if let Some(expected) = declared {
        assert_eq!(expected, written);
    }
    let on_disk = std::fs::read(&target).unwrap();
    assert_eq!(on_disk, archive_bytes);
    std::fs::remove_file(&target).ok();
}

#[tokio::test]
async fn image_archive_collects_in_memory() {
    let (server, client) = mock_client().await;
    let archive_bytes = b"PK\x03\x04not-really-a-zip".to_vec();
    Mock::given(method("GET"))
        .and(path("/getSingleImage"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive_bytes.clone()))
        .mount(&server)
        .await;

    let archive = SingleImageRequest::new("9.8.7", "1.2.3").send_request(&client).await.unwrap();
    assert_eq!(archive.collect().await.unwrap(), archive_bytes);
}

#[tokio::test]
async fn image_error_status_is_not_a_stream() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/getImage"))
        .respond_with(ResponseTemplate::new(500).set_body_string("archive backend down"))
        .mount(&server)
        .await;

    let err = ImageRequest::new("1.2.3").send_request(&client).await.unwrap_err();
    match err {
        HTTPError::HTTPResponseError(ResponseError::HttpStatus { code, body }) => {
            assert_eq!(code, 500);
            assert_eq!(body, "archive backend down");
        }
        other => panic!("expected an HTTP status error, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_maps_to_no_connection() {
    // nothing listens on the discard port
    let client = HTTPClient::new("http://127.0.0.1:9", CREDENTIALS);
    let err = CollectionValuesRequest::default().send_request(&client).await.unwrap_err();
    assert!(matches!(err, HTTPError::HTTPResponseError(ResponseError::NoConnection)));
}
