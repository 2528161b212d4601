/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Parsing of HTTP responses into operation results.

use bytes::Bytes;

/// Parses a fully loaded HTTP response.
///
/// Every operation in [`crate::operation`] implements this trait with
/// `Output = Result<OperationOutput, OperationError>`. Non-2xx responses are mapped to the
/// operation's modeled errors where the error code is recognized.
pub trait ParseStrictResponse {
    /// Result of parsing, typically `Result<FooOutput, FooError>`.
    type Output;

    /// Parses `response`. The body must already be fully read.
    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output;
}
