/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use alexaforbusiness::error::{CreateRoomErrorKind, GetRoomErrorKind};
use alexaforbusiness::model::DeviceEventType;
use alexaforbusiness::operation::{CreateRoom, GetRoom, ListDeviceEvents};
use alexaforbusiness::request_id::RequestId;
use alexaforbusiness::response::ParseStrictResponse;
use alexaforbusiness::Error;
use aws_smithy_types::DateTime;
use bytes::Bytes;
use pretty_assertions::assert_eq;

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amzn-requestid", "req-1234")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn success_body_is_parsed() {
    let output = GetRoom::new()
        .parse(&response(
            200,
            r#"{"Room":{"RoomArn":"arn:room","RoomName":"Lobby","SomethingNew":true}}"#,
        ))
        .expect("success");
    let room = output.room().expect("room present");
    assert_eq!(Some("arn:room"), room.room_arn());
    assert_eq!(Some("Lobby"), room.room_name());
    assert_eq!(None, room.description());
}

#[test]
fn empty_success_body_yields_default_output() {
    let output = CreateRoom::new()
        .parse(&response(200, ""))
        .expect("success");
    assert_eq!(None, output.room_arn());
}

#[test]
fn timestamps_are_epoch_seconds() {
    let output = ListDeviceEvents::new()
        .parse(&response(
            200,
            r#"{"DeviceEvents":[
                {"Type":"CONNECTION_STATUS","Value":"ONLINE","Timestamp":1.5E9},
                {"Type":"DEVICE_STATUS","Value":"READY","Timestamp":1500000000.25}
            ],"NextToken":"next"}"#,
        ))
        .expect("success");
    let events = output.device_events().expect("events present");
    assert_eq!(2, events.len());
    assert_eq!(Some(&DeviceEventType::ConnectionStatus), events[0].r#type());
    assert_eq!(Some(&DateTime::from_secs(1_500_000_000)), events[0].timestamp());
    assert_eq!(
        Some(&DateTime::from_secs_f64(1_500_000_000.25)),
        events[1].timestamp()
    );
    assert_eq!(Some("next"), output.next_token());
}

#[test]
fn modeled_error_is_recognized() {
    let err = GetRoom::new()
        .parse(&response(
            400,
            r#"{"__type":"com.amazonaws.alexaforbusiness#NotFoundException","Message":"room is gone"}"#,
        ))
        .expect_err("error status");
    assert!(err.is_not_found_exception());
    assert_eq!(Some("NotFoundException"), err.code());
    assert_eq!(Some("room is gone"), err.message());
    assert_eq!(Some("req-1234"), err.request_id());
    match &err.kind {
        GetRoomErrorKind::NotFoundException(inner) => {
            assert_eq!(Some("room is gone"), inner.message())
        }
        other => panic!("unexpected kind: {:?}", other),
    }
    assert_eq!("NotFoundException: room is gone", err.to_string());
}

#[test]
fn error_code_header_takes_precedence() {
    let response = http::Response::builder()
        .status(400)
        .header("x-amzn-errortype", "AlreadyExistsException:http://internal.amazon.com/")
        .header("x-amz-request-id", "fallback-id")
        .body(Bytes::from_static(br#"{"message":"duplicate room"}"#))
        .unwrap();
    let err = CreateRoom::new().parse(&response).expect_err("error status");
    assert!(matches!(err.kind, CreateRoomErrorKind::AlreadyExistsException(_)));
    assert_eq!(Some("duplicate room"), err.message());
    assert_eq!(Some("fallback-id"), err.request_id());
}

#[test]
fn classification_ignores_unrelated_body_members() {
    let err = GetRoom::new()
        .parse(&response(
            400,
            r#"{"__type":"NotFoundException","message":"a","Message":"b","code":7}"#,
        ))
        .expect_err("error status");
    assert!(err.is_not_found_exception(), "{:?}", err);
    assert_eq!(Some("NotFoundException"), err.code());
    assert_eq!(Some("a"), err.message());
    assert_eq!(Some("req-1234"), err.request_id());
}

#[test]
fn error_code_header_survives_undecodable_body() {
    let response = http::Response::builder()
        .status(400)
        .header("x-amzn-errortype", "NotFoundException")
        .header("x-amzn-requestid", "req-5678")
        .body(Bytes::from_static(b"<html>not found</html>"))
        .unwrap();
    let err = GetRoom::new().parse(&response).expect_err("error status");
    assert!(err.is_not_found_exception());
    assert_eq!(Some("req-5678"), err.request_id());
    match &err.kind {
        GetRoomErrorKind::NotFoundException(inner) => assert_eq!(None, inner.message()),
        other => panic!("unexpected kind: {:?}", other),
    }
}

#[test]
fn unknown_error_code_is_kept_on_generic_error() {
    let err = GetRoom::new()
        .parse(&response(
            500,
            r#"{"__type":"InternalFailure","message":"try again"}"#,
        ))
        .expect_err("error status");
    assert!(matches!(err.kind, GetRoomErrorKind::Unhandled(_)));
    assert!(!err.is_not_found_exception());
    assert_eq!(Some("InternalFailure"), err.code());
    assert_eq!(Some("try again"), err.message());
    assert_eq!(Some("req-1234"), err.request_id());
}

#[test]
fn error_without_code_keeps_request_id() {
    let err = GetRoom::new()
        .parse(&response(503, ""))
        .expect_err("error status");
    assert!(matches!(err.kind, GetRoomErrorKind::Unhandled(_)));
    assert_eq!(None, err.code());
    assert_eq!(Some("req-1234"), err.request_id());
}

#[test]
fn malformed_body_is_unhandled() {
    let err = GetRoom::new()
        .parse(&response(200, "{not json"))
        .expect_err("malformed body");
    assert!(matches!(err.kind, GetRoomErrorKind::Unhandled(_)));
    assert!(std::error::Error::source(&err).is_some());

    let err = GetRoom::new()
        .parse(&response(400, "<html>"))
        .expect_err("malformed error body");
    assert!(matches!(err.kind, GetRoomErrorKind::Unhandled(_)));
}

#[test]
fn operation_errors_convert_to_service_error() {
    let err = GetRoom::new()
        .parse(&response(
            400,
            r#"{"__type":"NotFoundException","Message":"room is gone"}"#,
        ))
        .expect_err("error status");
    match Error::from(err) {
        Error::NotFoundException(inner) => assert_eq!(Some("room is gone"), inner.message()),
        other => panic!("unexpected error: {:?}", other),
    }

    let err = GetRoom::new()
        .parse(&response(500, r#"{"__type":"InternalFailure"}"#))
        .expect_err("error status");
    assert!(matches!(Error::from(err), Error::Unhandled(_)));
}

#[test]
fn raw_responses_expose_request_ids() {
    assert_eq!(Some("req-1234"), response(200, "{}").request_id());
}
