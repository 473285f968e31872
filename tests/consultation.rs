//! Consultation client against a local fake completions endpoint

mod common;

use std::time::Duration;

use common::{closed_url, completion_body, fixture_catalog, serve, serve_raw, serve_with_delay};
use parfum::config::ConsultantConfig;
use parfum::{CatalogStore, ConsultationClient, ErrorKind, TransportKind};

fn snapshot() -> parfum::CatalogDocument {
    let (_dir, path) = fixture_catalog();
    CatalogStore::open(path).load().expect("load fixture")
}

#[test]
fn recommend_sends_curated_request_and_returns_content() {
    let service = serve(vec![(200, completion_body("Try Santal 33."))]);
    let client = ConsultationClient::new(&service.config()).unwrap();

    let answer = client
        .recommend("Woody, smoky, for autumn evenings", &snapshot())
        .unwrap();
    assert_eq!(answer, "Try Santal 33.");

    let requests = service.finish();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];

    assert!(req.request_line.starts_with("POST /chat/completions"));
    assert_eq!(req.header("authorization"), Some("Bearer sk-test"));
    assert!(req
        .header("content-type")
        .unwrap_or_default()
        .starts_with("application/json"));

    let body = &req.body;
    assert_eq!(body["model"], "deepseek-chat");
    assert_eq!(body["max_tokens"], 1500);
    assert_eq!(body["stream"], false);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");

    let system = body["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("\"name\": \"Santal 33\""));
    assert!(!system.contains("year_released"));
    assert!(!system.contains("\"id\""));

    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("Woody, smoky, for autumn evenings"));
}

#[test]
fn answer_uses_summary_lines_and_smaller_budget() {
    let service = serve(vec![(200, completion_body("Sillage is the trail."))]);
    let mut config = service.config();
    config.temperature = 0.4;
    let client = ConsultationClient::new(&config).unwrap();

    let answer = client.answer("What is sillage?", &snapshot()).unwrap();
    assert_eq!(answer, "Sillage is the trail.");

    let req = &service.finish()[0];
    assert_eq!(req.body["max_tokens"], 1200);
    let temperature = req.body["temperature"].as_f64().unwrap();
    assert!((temperature - 0.4).abs() < 1e-6);

    let system = req.body["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("Sauvage (Dior) - Aromatic Fougere, Men"));
    assert!(!system.contains("Ambroxan"));
    assert_eq!(req.body["messages"][1]["content"], "What is sillage?");
}

#[test]
fn compare_pins_temperature_and_inlines_both_records() {
    let service = serve(vec![(200, completion_body("They differ."))]);
    let mut config = service.config();
    config.temperature = 0.1;
    let client = ConsultationClient::new(&config).unwrap();

    client
        .compare("Sauvage", "Coco Mademoiselle", &snapshot())
        .unwrap();

    let req = &service.finish()[0];
    assert_eq!(req.body["max_tokens"], 1500);
    let temperature = req.body["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-6);

    let system = req.body["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("Sauvage (Dior):"));
    assert!(system.contains("- Middle Notes: Sichuan Pepper, Lavender, Geranium"));
    assert!(system.contains("Coco Mademoiselle (Chanel):"));
    assert!(!system.contains("Santal 33"));
}

#[test]
fn compare_with_unknown_name_fails_before_any_request() {
    // nothing listens here, so a request would surface as a transport error
    let config = ConsultantConfig {
        api_key: Some("sk-test".to_string()),
        api_url: closed_url(),
        ..Default::default()
    };
    let client = ConsultationClient::new(&config).unwrap();

    let err = client
        .compare("Sauvage", "Aventus", &snapshot())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("Aventus"));
}

#[test]
fn missing_api_key_is_a_config_error() {
    let err = ConsultationClient::new(&ConsultantConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn non_success_status_maps_to_service_error() {
    let service = serve(vec![(
        401,
        r#"{"error":{"message":"Authentication Fails, Your api key is invalid","type":"authentication_error"}}"#
            .to_string(),
    )]);
    let client = ConsultationClient::new(&service.config()).unwrap();

    let err = client.answer("What is oud?", &snapshot()).unwrap_err();
    match err {
        parfum::Error::Service { status, ref message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Authentication Fails"));
        }
        other => panic!("expected service error, got {:?}", other),
    }
    service.finish();
}

#[test]
fn server_error_without_body_still_classified() {
    let service = serve(vec![(503, String::new())]);
    let client = ConsultationClient::new(&service.config()).unwrap();

    let err = client.answer("What is oud?", &snapshot()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);
    assert!(err.to_string().contains("503"));
    service.finish();
}

#[test]
fn truncated_error_body_still_reports_status() {
    // announces more body than it sends, then closes
    let service = serve_raw(vec![
        "HTTP/1.1 500 Internal Server Error\r\nContent-Type: application/json\r\nContent-Length: 512\r\nConnection: close\r\n\r\n{\"error\":"
            .to_string(),
    ]);
    let client = ConsultationClient::new(&service.config()).unwrap();

    let err = client.answer("What is oud?", &snapshot()).unwrap_err();
    match err {
        parfum::Error::Service { status, ref message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Unknown error");
        }
        other => panic!("expected service error, got {:?}", other),
    }
    service.finish();
}

#[test]
fn unexpected_shape_is_malformed_response() {
    let service = serve(vec![
        (200, r#"{"choices":[]}"#.to_string()),
        (200, r#"{"result":"hello"}"#.to_string()),
    ]);
    let client = ConsultationClient::new(&service.config()).unwrap();

    let err = client.answer("What is oud?", &snapshot()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);

    let err = client.answer("What is oud?", &snapshot()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    service.finish();
}

#[test]
fn connection_refused_is_transport_connect() {
    let config = ConsultantConfig {
        api_key: Some("sk-test".to_string()),
        api_url: closed_url(),
        ..Default::default()
    };
    let client = ConsultationClient::new(&config).unwrap();

    let err = client.answer("What is oud?", &snapshot()).unwrap_err();
    match err {
        parfum::Error::Transport { kind, .. } => assert_eq!(kind, TransportKind::Connect),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[test]
fn slow_service_times_out_without_retry() {
    let service = serve_with_delay(
        vec![(200, completion_body("too late"))],
        Duration::from_secs(3),
    );
    let mut config = service.config();
    config.timeout_secs = 1;
    let client = ConsultationClient::new(&config).unwrap();

    let err = client.answer("What is oud?", &snapshot()).unwrap_err();
    match err {
        parfum::Error::Transport { kind, .. } => assert_eq!(kind, TransportKind::Timeout),
        other => panic!("expected timeout, got {:?}", other),
    }

    // exactly one request reached the service
    assert_eq!(service.finish().len(), 1);
}
