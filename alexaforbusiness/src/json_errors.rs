/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error metadata for AWS JSON 1.1 error responses.

use crate::request_id::apply_request_id;
use aws_smithy_types::error::ErrorMetadata;
use bytes::Bytes;
use http::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

const CODE_MEMBERS: &[&str] = &["__type", "code", "Code"];
const MESSAGE_MEMBERS: &[&str] = &["message", "Message", "errorMessage"];

/// Strips the namespace and any trailing URL from a raw error code.
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/`
/// becomes `FooError`.
fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn error_type_from_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
}

/// Returns the first member among `names` holding a string.
fn first_string<'a>(body: &'a Map<String, Value>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| body.get(*name).and_then(Value::as_str))
}

/// Reads the error code, message, and request ID from an error response.
///
/// The `x-amzn-errortype` header takes precedence over `__type` and `code` in the body. A body
/// that is not a JSON object contributes nothing; the headers are still used.
pub(crate) fn parse_generic_error(response: &http::Response<Bytes>) -> ErrorMetadata {
    let body: Map<String, Value> = match crate::aws_json::deserialize_body(response.body()) {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(error = %err, "error response body is not a JSON object");
            Map::new()
        }
    };
    let code = error_type_from_header(response.headers())
        .or_else(|| first_string(&body, CODE_MEMBERS))
        .map(sanitize_error_code);
    let mut builder = ErrorMetadata::builder();
    if let Some(code) = code {
        builder = builder.code(code);
    }
    if let Some(message) = first_string(&body, MESSAGE_MEMBERS) {
        builder = builder.message(message);
    }
    let meta = apply_request_id(builder, response.headers()).build();
    tracing::debug!(
        status = response.status().as_u16(),
        code = ?meta.code(),
        "parsed error response"
    );
    meta
}

/// Deserializes the members of a modeled error.
///
/// The error has already been classified by its code, so a body that does not fit the error's
/// shape yields an error with no members rather than failing.
pub(crate) fn deserialize_error_body<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    crate::aws_json::deserialize_body(body).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "error response body does not match the modeled error");
        T::default()
    })
}

#[cfg(test)]
mod test {
    use super::{deserialize_error_body, parse_generic_error, sanitize_error_code};
    use crate::error::ResourceInUseException;
    use crate::request_id::RequestId;
    use bytes::Bytes;
    use tracing_test::traced_test;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn code_and_message_from_body() {
        let meta = parse_generic_error(&response(
            400,
            r#"{"__type":"com.amazonaws.alexaforbusiness#NotFoundException","message":"room not found"}"#,
        ));
        assert_eq!(meta.code(), Some("NotFoundException"));
        assert_eq!(meta.message(), Some("room not found"));
        assert_eq!(meta.request_id(), Some("1234"));
    }

    #[test]
    fn capitalized_message_and_code_members() {
        let meta = parse_generic_error(&response(
            400,
            r#"{"code":"LimitExceededException","Message":"too many rooms"}"#,
        ));
        assert_eq!(meta.code(), Some("LimitExceededException"));
        assert_eq!(meta.message(), Some("too many rooms"));
    }

    #[test]
    fn header_takes_precedence() {
        let response = http::Response::builder()
            .status(400)
            .header(
                "x-amzn-errortype",
                "ConcurrentModificationException:http://internal.amazon.com/coral/com.amazon.coral.validate/",
            )
            .body(Bytes::from_static(br#"{"__type":"NotFoundException"}"#))
            .unwrap();
        let meta = parse_generic_error(&response);
        assert_eq!(meta.code(), Some("ConcurrentModificationException"));
    }

    #[test]
    fn empty_body() {
        let meta = parse_generic_error(&response(500, ""));
        assert_eq!(meta.code(), None);
        assert_eq!(meta.message(), None);
        assert_eq!(meta.request_id(), Some("1234"));
    }

    #[test]
    fn malformed_body_falls_back_to_headers() {
        let html = http::Response::builder()
            .status(503)
            .header("x-amzn-errortype", "LimitExceededException")
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(b"<html>"))
            .unwrap();
        let meta = parse_generic_error(&html);
        assert_eq!(meta.code(), Some("LimitExceededException"));
        assert_eq!(meta.message(), None);
        assert_eq!(meta.request_id(), Some("1234"));

        let meta = parse_generic_error(&response(500, "[1, 2]"));
        assert_eq!(meta.code(), None);
        assert_eq!(meta.request_id(), Some("1234"));
    }

    #[test]
    fn repeated_and_mistyped_members_are_tolerated() {
        let meta = parse_generic_error(&response(
            400,
            r#"{"__type":"NotFoundException","message":"a","Message":"b"}"#,
        ));
        assert_eq!(meta.code(), Some("NotFoundException"));
        assert_eq!(meta.message(), Some("a"));

        let meta = parse_generic_error(&response(
            400,
            r#"{"code":42,"Code":"NameInUseException","message":null,"errorMessage":"taken"}"#,
        ));
        assert_eq!(meta.code(), Some("NameInUseException"));
        assert_eq!(meta.message(), Some("taken"));
    }

    #[test]
    fn mismatched_modeled_error_body_is_empty() {
        let parsed: ResourceInUseException =
            deserialize_error_body(br#"{"Message":"in use","ClientRequestToken":"token"}"#);
        assert_eq!(parsed.message(), Some("in use"));
        assert_eq!(parsed.client_request_token(), Some("token"));

        let parsed: ResourceInUseException = deserialize_error_body(br#"{"Message":7}"#);
        assert_eq!(parsed, ResourceInUseException::default());
    }

    #[test]
    fn error_codes_are_sanitized() {
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError:http://example.com"), "FooError");
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }

    #[traced_test]
    #[test]
    fn parsed_code_is_logged() {
        parse_generic_error(&response(400, r#"{"__type":"NameInUseException"}"#));
        assert!(logs_contain("parsed error response"));
        assert!(logs_contain("NameInUseException"));
    }
}
