/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request IDs returned by the service.

use aws_smithy_types::error::metadata::Builder as ErrorMetadataBuilder;
use aws_smithy_types::error::ErrorMetadata;
use http::{HeaderMap, HeaderValue};

/// Key of the [`ErrorMetadata`] extra field holding the request ID.
const AWS_REQUEST_ID: &str = "aws_request_id";

/// Implementers add a function to return an AWS request ID
pub trait RequestId {
    /// Returns the request ID if it's available.
    fn request_id(&self) -> Option<&str>;
}

impl RequestId for ErrorMetadata {
    fn request_id(&self) -> Option<&str> {
        self.extra(AWS_REQUEST_ID)
    }
}

impl<B> RequestId for http::Response<B> {
    fn request_id(&self) -> Option<&str> {
        extract_request_id(self.headers())
    }
}

/// Copies the response's request ID, if any, onto an error metadata builder.
pub(crate) fn apply_request_id(
    builder: ErrorMetadataBuilder,
    headers: &HeaderMap<HeaderValue>,
) -> ErrorMetadataBuilder {
    if let Some(request_id) = extract_request_id(headers) {
        builder.custom(AWS_REQUEST_ID, request_id)
    } else {
        builder
    }
}

fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Response;

    #[test]
    fn request_id_from_either_header() {
        let response = Response::builder()
            .header("x-amzn-requestid", "some-request-id")
            .body(())
            .unwrap();
        assert_eq!(Some("some-request-id"), response.request_id());

        let response = Response::builder()
            .header("x-amz-request-id", "other-request-id")
            .body(())
            .unwrap();
        assert_eq!(Some("other-request-id"), response.request_id());

        let response = Response::builder().body(()).unwrap();
        assert_eq!(None, response.request_id());
    }

    #[test]
    fn apply_request_id_to_metadata() {
        let mut headers = HeaderMap::new();
        assert_eq!(
            ErrorMetadata::builder().build(),
            apply_request_id(ErrorMetadata::builder(), &headers).build(),
        );
        headers.insert("x-amzn-requestid", HeaderValue::from_static("some-request-id"));
        let meta = apply_request_id(ErrorMetadata::builder(), &headers).build();
        assert_eq!(Some("some-request-id"), meta.request_id());
    }
}
