mod common;

use axum::http::StatusCode;
use common::make_server;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_speakers() {
    let server = make_server();

    let response = server.get("/api/speakers").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let speakers = json.as_array().unwrap();
    assert_eq!(speakers.len(), 2);
    assert_eq!(speakers[0]["FirstName"], "Shawn");
    assert_eq!(speakers[0]["CompanyUrl"], "http://wilderminds.com");
    assert_eq!(speakers[1]["Twitter"], "resawildermuth");
}

#[tokio::test]
async fn test_get_speaker() {
    let server = make_server();
    let id = common::speaker_id(&server, "Resa").await;

    let response = server.get(&format!("/api/speakers/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["LastName"], "Wildermuth");
}

#[tokio::test]
async fn test_get_missing_speaker() {
    let server = make_server();

    let response = server.get("/api/speakers/999").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Speaker with 999 could not be found"
    );
}

#[tokio::test]
async fn test_create_speaker() {
    let server = make_server();

    let response = server
        .post("/api/speakers")
        .json(&json!({
            "SpeakerId": 1,
            "FirstName": "Grace",
            "MiddleName": "Brewster",
            "LastName": "Hopper",
            "BlogUrl": "https://example.com/grace",
            "GitHub": "ghopper"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let id = json["SpeakerId"].as_i64().unwrap();
    assert_ne!(id, 1, "client ids are ignored");
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("/api/speakers/{id}")
    );
    assert_eq!(json["GitHub"], "ghopper");

    let fetched = server
        .get(&format!("/api/speakers/{id}"))
        .await
        .json::<Value>();
    assert_eq!(fetched["MiddleName"], "Brewster");
}

#[tokio::test]
async fn test_create_speaker_validation_error() {
    let server = make_server();

    let response = server
        .post("/api/speakers")
        .json(&json!({ "FirstName": "Grace", "BlogUrl": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert!(json["error"]["details"].get("last_name").is_some());
    assert!(json["error"]["details"].get("blog_url").is_some());
}
