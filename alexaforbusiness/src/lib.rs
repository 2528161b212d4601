/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::too_many_arguments)]
#![warn(missing_docs)]

//! <p>Alexa for Business helps you use Alexa in your organization. Alexa for Business provides
//! you with the tools to manage Alexa devices, enroll your users, and assign skills, at scale.</p>
//!
//! Every operation of the service has three parts:
//!
//! * an input type in [`input`] with a builder, which turns itself into an AWS JSON 1.1 request
//!   with `make_request`,
//! * an output type in [`output`],
//! * an operation type in [`operation`] that parses a raw HTTP response into either the output or
//!   the operation's error type in [`error`].
//!
//! Nested value types and enumerations shared between operations live in [`model`].
//!
//! ```rust
//! use alexaforbusiness::response::ParseStrictResponse;
//! use alexaforbusiness::{operation, Config, Region};
//!
//! let config = Config::builder().region(Region::new("us-east-1")).build();
//! let request = operation::GetRoom::builder()
//!     .room_arn("arn:aws:a4b:us-east-1:123456789012:room/abc")
//!     .build()
//!     .make_request(&config)
//!     .expect("valid request");
//! assert_eq!(request.headers()["x-amz-target"], "AlexaForBusiness.GetRoom");
//!
//! let response = http::Response::builder()
//!     .status(200)
//!     .body(bytes::Bytes::from_static(br#"{"Room":{"RoomName":"Lobby"}}"#))
//!     .unwrap();
//! let output = operation::GetRoom::new().parse(&response).expect("valid response");
//! assert_eq!(output.room().and_then(|room| room.room_name()), Some("Lobby"));
//! ```

mod aws_json;
pub mod config;
mod display;
pub mod endpoint;
/// All error types that operations can return, and the error raised by strict enum lookup.
pub mod error;
mod error_meta;
mod hash_util;
pub mod idempotency_token;
/// Input structures for operations, and their serialization into AWS JSON 1.1 requests.
pub mod input;
mod instant_epoch;
mod json_errors;
/// Data structures and enumerations used by operation inputs and outputs.
pub mod model;
/// Operation shapes, which parse raw responses into outputs or errors.
pub mod operation;
mod operation_deser;
/// Output structures for operations.
pub mod output;
pub mod request_id;
pub mod response;

pub use aws_types::region::Region;
pub use config::Config;
pub use error_meta::Error;

/// Crate version number.
pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
