use super::super::common::{Endpoint, OutputFormat};
use super::collection_values_get::CollectionValuesRequest;
use super::image_get::ImageRequest;
use super::request_common::{HTTPRequestType, QueryParams};
use super::series_get::SeriesRequest;
use super::shared_list_get::SharedListRequest;
use super::single_image_get::SingleImageRequest;
use strum::IntoEnumIterator;
use url::form_urlencoded;

fn full_url(base: &str, request: &impl HTTPRequestType) -> String {
    format!("{}/{}{}", base, request.endpoint(), request.query_params().query_string())
}

#[test]
fn absent_and_empty_filters_are_dropped() {
    let mut params = QueryParams::new();
    params.push("Collection", None);
    params.push("Modality", Some(""));
    params.push("PatientID", Some("TCGA-08-0244"));
    assert_eq!(params.query_string(), "?PatientID=TCGA-08-0244");
}

#[test]
fn insertion_order_is_preserved() {
    let mut params = QueryParams::new();
    params.push("b", Some("1"));
    params.push("a", Some("2"));
    params.push("c", Some("3"));
    assert_eq!(params.query_string(), "?b=1&a=2&c=3");
}

#[test]
fn filterless_query_keeps_the_bare_question_mark() {
    assert_eq!(QueryParams::new().query_string(), "?");
}

#[test]
fn values_are_form_urlencoded() {
    let mut params = QueryParams::new();
    params.push("Manufacturer", Some("GE MEDICAL SYSTEMS"));
    params.push("name", Some("a&b=c"));
    assert_eq!(params.query_string(), "?Manufacturer=GE+MEDICAL+SYSTEMS&name=a%26b%3Dc");
}

#[test]
fn uids_pass_through_unescaped() {
    let mut params = QueryParams::new();
    params.push("SeriesInstanceUID", Some("1.3.6.1.4.1.14519.5.2.1.7695"));
    assert_eq!(params.query_string(), "?SeriesInstanceUID=1.3.6.1.4.1.14519.5.2.1.7695");
}

#[test]
fn collection_values_url_carries_only_the_format() {
    let request = CollectionValuesRequest::default();
    assert_eq!(
        full_url("https://services.invalid/query", &request),
        "https://services.invalid/query/getCollectionValues?format=json"
    );
}

#[test]
fn series_url_lists_present_filters_in_documented_order() {
    let request = SeriesRequest {
        collection: Some(String::from("TCGA-GBM")),
        modality: Some(String::from("MR")),
        ..SeriesRequest::default()
    };
    assert_eq!(
        full_url("https://services.invalid/query", &request),
        "https://services.invalid/query/getSeries?Collection=TCGA-GBM&Modality=MR&format=json"
    );
}

#[test]
fn required_parameter_omission_is_not_checked_locally() {
    // a Default-constructed getImage request simply lacks the key
    let request = ImageRequest::default();
    assert_eq!(request.query_params().query_string(), "?");
}

#[test]
fn image_request_has_no_format_parameter() {
    let request = ImageRequest::new("1.2.3");
    assert_eq!(request.query_params().query_string(), "?SeriesInstanceUID=1.2.3");
}

#[test]
fn single_image_sends_sop_before_series() {
    let request = SingleImageRequest::new("9.8.7", "1.2.3");
    assert_eq!(
        request.query_params().query_string(),
        "?SOPInstanceUID=9.8.7&SeriesInstanceUID=1.2.3"
    );
}

#[test]
fn shared_list_ctor_fills_name_and_default_format() {
    let request = SharedListRequest::new("test");
    assert_eq!(request.query_params().query_string(), "?name=test&format=json");
}

#[test]
fn decoding_the_query_string_recovers_the_filters() {
    let request = SeriesRequest {
        collection: Some(String::from("TCGA-GBM")),
        manufacturer: Some(String::from("GE MEDICAL SYSTEMS")),
        body_part_examined: None,
        ..SeriesRequest::default()
    };
    let encoded = request.query_params().query_string();
    let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded[1..].as_bytes())
        .into_owned()
        .collect();
    assert_eq!(decoded, vec![
        (String::from("Collection"), String::from("TCGA-GBM")),
        (String::from("Manufacturer"), String::from("GE MEDICAL SYSTEMS")),
        (String::from("format"), String::from("json")),
    ]);
}

#[test]
fn endpoint_catalogue_is_complete() {
    assert_eq!(Endpoint::iter().count(), 15);
    assert_eq!(Endpoint::GetSOPInstanceUIDs.to_string(), "getSOPInstanceUIDs");
    assert_eq!(
        Endpoint::NewStudiesInPatientCollection.to_string(),
        "NewStudiesInPatientCollection"
    );
    assert_eq!(Endpoint::PatientsByModality.to_string(), "PatientsByModality");
    assert_eq!(Endpoint::GetImage.to_string(), "getImage");
}

#[test]
fn output_format_serializes_lowercase() {
    assert_eq!(OutputFormat::default(), OutputFormat::Json);
    assert_eq!(OutputFormat::Json.to_string(), "json");
    assert_eq!(OutputFormat::Csv.to_string(), "csv");
    assert_eq!(OutputFormat::Html.to_string(), "html");
    assert_eq!(OutputFormat::Xml.to_string(), "xml");
}
