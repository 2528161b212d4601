/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use alexaforbusiness::input::{
    CreateRoomInput, GetConferencePreferenceInput, GetRoomInput, SearchRoomsInput,
    StartDeviceSyncInput,
};
use alexaforbusiness::model::{Feature, Filter, Sort, SortValue, Tag};
use alexaforbusiness::{Config, Region};
use http::Request;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .idempotency_token_provider("00000000-0000-4000-8000-000000000000")
        .build()
}

fn body_json(request: &Request<bytes::Bytes>) -> Value {
    serde_json::from_slice(request.body()).expect("request body is JSON")
}

fn header<'a>(request: &'a Request<bytes::Bytes>, name: &str) -> &'a str {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_else(|| panic!("missing header {}", name))
}

#[test]
fn request_targets_the_operation() {
    let request = GetRoomInput::builder()
        .room_arn("arn:aws:a4b:us-east-1:123456789012:room/abc")
        .build()
        .make_request(&config())
        .expect("valid request");
    assert_eq!(http::Method::POST, request.method());
    assert_eq!("https://a4b.us-east-1.amazonaws.com/", request.uri().to_string());
    assert_eq!("AlexaForBusiness.GetRoom", header(&request, "x-amz-target"));
    assert_eq!("application/x-amz-json-1.1", header(&request, "content-type"));
    assert_eq!(
        request.body().len().to_string(),
        header(&request, "content-length")
    );
    assert!(header(&request, "user-agent").starts_with("aws-sdk-rust/"));
    assert_eq!(
        json!({ "RoomArn": "arn:aws:a4b:us-east-1:123456789012:room/abc" }),
        body_json(&request)
    );
}

#[test]
fn members_without_values_are_omitted() {
    let request = GetConferencePreferenceInput::builder()
        .build()
        .make_request(&config())
        .expect("valid request");
    assert_eq!(b"{}".as_slice(), request.body().as_ref());
}

#[test]
fn nested_members_use_wire_names() {
    let request = SearchRoomsInput::builder()
        .max_results(10)
        .filters(
            Filter::builder()
                .key("RoomName")
                .values("Lobby")
                .values("Kitchen")
                .build(),
        )
        .sort_criteria(Sort::builder().key("RoomName").value(SortValue::Desc).build())
        .build()
        .make_request(&config())
        .expect("valid request");
    assert_eq!(
        json!({
            "MaxResults": 10,
            "Filters": [{ "Key": "RoomName", "Values": ["Lobby", "Kitchen"] }],
            "SortCriteria": [{ "Key": "RoomName", "Value": "DESC" }],
        }),
        body_json(&request)
    );

    let request = StartDeviceSyncInput::builder()
        .device_arn("device")
        .features(Feature::Bluetooth)
        .features(Feature::Volume)
        .build()
        .make_request(&config())
        .expect("valid request");
    assert_eq!(
        json!({ "DeviceArn": "device", "Features": ["BLUETOOTH", "VOLUME"] }),
        body_json(&request)
    );
}

#[test]
fn missing_token_is_generated_without_touching_input() {
    let input = CreateRoomInput::builder()
        .room_name("Lobby")
        .tags(Tag::builder().key("floor").value("1").build())
        .build();
    let request = input.make_request(&config()).expect("valid request");
    assert_eq!(
        json!({
            "RoomName": "Lobby",
            "ClientRequestToken": "00000000-0000-4000-8000-000000000000",
            "Tags": [{ "Key": "floor", "Value": "1" }],
        }),
        body_json(&request)
    );
    assert_eq!(None, input.client_request_token());
    assert_eq!("AlexaForBusiness.CreateRoom", header(&request, "x-amz-target"));
}

#[test]
fn explicit_token_is_kept() {
    let input = CreateRoomInput::builder()
        .room_name("Lobby")
        .client_request_token("my-token")
        .build();
    let request = input.make_request(&config()).expect("valid request");
    assert_eq!(
        json!({ "RoomName": "Lobby", "ClientRequestToken": "my-token" }),
        body_json(&request)
    );
}

#[test]
fn random_tokens_differ_per_request() {
    let config = Config::builder().region(Region::new("eu-west-1")).build();
    let input = CreateRoomInput::builder().room_name("Lobby").build();
    let first = body_json(&input.make_request(&config).expect("valid request"));
    let second = body_json(&input.make_request(&config).expect("valid request"));
    let token = |v: &Value| v["ClientRequestToken"].as_str().map(str::to_owned);
    assert!(token(&first).is_some());
    assert_ne!(token(&first), token(&second));
}

#[test]
fn endpoint_override_is_used() {
    let config = Config::builder()
        .region(Region::new("us-east-1"))
        .endpoint_url("http://localhost:8080")
        .build();
    let request = GetRoomInput::builder()
        .build()
        .make_request(&config)
        .expect("valid request");
    assert_eq!("http://localhost:8080/", request.uri().to_string());
}

#[test]
fn missing_region_fails_to_build() {
    let config = Config::builder().build();
    let err = GetRoomInput::builder()
        .room_arn("arn")
        .build()
        .make_request(&config)
        .expect_err("no region configured");
    let source = std::error::Error::source(&err).map(|s| s.to_string());
    assert!(
        source.as_deref().unwrap_or_default().contains("no region"),
        "{:?}",
        source
    );
}
