use gh_client::presentation::serialization::{Timestamp, comma_separated, null_as_empty_vec};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize)]
struct Query {
    #[serde(serialize_with = "comma_separated")]
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct Listing {
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    names: Vec<String>,
}

#[test]
fn test_comma_separated_query() {
    let query = Query {
        labels: vec!["a".to_string(), "b c".to_string()],
    };
    assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "labels=a%2Cb+c");
}

#[test]
fn test_null_as_empty_vec() {
    let listing: Listing = serde_json::from_value(json!({"names": null})).unwrap();
    assert!(listing.names.is_empty());
    let listing: Listing = serde_json::from_value(json!({})).unwrap();
    assert!(listing.names.is_empty());
    let listing: Listing = serde_json::from_value(json!({"names": ["x"]})).unwrap();
    assert_eq!(listing.names, vec!["x"]);
}

#[test]
fn test_timestamp_numeric_string_and_float() {
    let from_string: Timestamp = serde_json::from_value(json!("1709287200")).unwrap();
    let from_float: Timestamp = serde_json::from_value(json!(1709287200.9)).unwrap();
    assert_eq!(from_string, from_float);
    assert_eq!(from_string.unix(), 1_709_287_200);
}

#[test]
fn test_timestamp_ordering() {
    let earlier = Timestamp::from_unix(10).unwrap();
    let later = Timestamp::from_unix(20).unwrap();
    assert!(earlier < later);
    assert_eq!(Timestamp::default().unix(), 0);
}
