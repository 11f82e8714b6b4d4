//! Tests for the `tiny_http` router

use std::collections::BTreeMap;

use custom_log_levels::server::tiny_http::{json_reply, route};
use serde_json::Value;
use tiny_http::Method;

fn get(path: &str) -> (u16, Value) {
    let reply = route(&Method::Get, path, "");
    (reply.status, serde_json::from_str(&reply.body).unwrap())
}

fn post(path: &str, body: &str) -> (u16, Value) {
    let reply = route(&Method::Post, path, body);
    (reply.status, serde_json::from_str(&reply.body).unwrap())
}

#[test]
fn test_levels_is_bare_array() {
    let (status, body) = get("/plugin/customLogLevels/levels");
    assert_eq!(status, 200);
    let names: Vec<String> = serde_json::from_value(body).unwrap();
    assert_eq!(names.len(), 10);
    assert!(names.contains(&"FINEST".to_string()));
}

#[test]
fn test_query_string_is_ignored() {
    let (status, _) = get("/plugin/customLogLevels/levels?lang=en");
    assert_eq!(status, 200);
}

#[test]
fn test_levels_detail() {
    let (status, body) = get("/plugin/customLogLevels/levels/detail");
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["levels"][0]["name"], "ALL");
}

#[test]
fn test_single_level() {
    let (status, body) = get("/plugin/customLogLevels/levels/verbose");
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "VERBOSE");
    assert_eq!(body["data"]["value"], 3000);
}

#[test]
fn test_single_level_not_found() {
    let (status, body) = get("/plugin/customLogLevels/levels/severe");
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[test]
fn test_validate_route() {
    let (status, body) = get("/plugin/customLogLevels/levels/trace/validate");
    assert_eq!(status, 200);
    assert_eq!(body["data"]["valid"], true);

    let (status, body) = get("/plugin/customLogLevels/levels/SEVERE/validate");
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("OFF, FATAL, ERROR"));
}

#[test]
fn test_filter_route() {
    let body = r#"{
        "min_level": "debug",
        "logs": [
            {"level": "TRACE", "message": "t"},
            {"message": "no level"},
            {"level": "ERROR", "message": "e"}
        ]
    }"#;
    let (status, resp) = post("/plugin/customLogLevels/logs/filter", body);
    assert_eq!(status, 200);
    assert_eq!(resp["data"]["applied"], true);
    assert_eq!(resp["data"]["total"], 3);
    assert_eq!(resp["data"]["retained"], 2);
    assert_eq!(resp["data"]["logs"][0]["message"], "no level");
    assert_eq!(resp["data"]["logs"][1]["message"], "e");
}

#[test]
fn test_filter_route_rejects_bad_json() {
    let (status, body) = post("/plugin/customLogLevels/logs/filter", "{not json");
    assert_eq!(status, 400);
    assert!(body["error"]["message"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[test]
fn test_info_route() {
    let (status, body) = get("/plugin/customLogLevels/info");
    assert_eq!(status, 200);
    assert_eq!(body["data"]["id"], "customLogLevels");
}

#[test]
fn test_outside_namespace_is_not_found() {
    let (status, _) = get("/levels");
    assert_eq!(status, 404);
    let (status, _) = get("/plugin/other/levels");
    assert_eq!(status, 404);
}

#[test]
fn test_wrong_method_is_not_found() {
    let (status, _) = post("/plugin/customLogLevels/levels", "");
    assert_eq!(status, 404);
    let (status, _) = get("/plugin/customLogLevels/logs/filter");
    assert_eq!(status, 404);
}

#[test]
fn test_nested_level_path_is_not_found() {
    let (status, _) = get("/plugin/customLogLevels/levels/info/extra");
    assert_eq!(status, 404);
}

#[test]
fn test_validate_without_name_is_level_lookup() {
    let (status, body) = get("/plugin/customLogLevels/levels/validate");
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Log level 'validate' not found");

    let (status, _) = get("/plugin/customLogLevels/levels//validate");
    assert_eq!(status, 404);
}

#[test]
fn test_unserializable_body_is_internal_error() {
    let mut data = BTreeMap::new();
    data.insert((1u8, 2u8), 3u8);

    let reply = json_reply(&data, 200);
    assert_eq!(reply.status, 500);
    let body: Value = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Failed to serialize response")
    );
}
