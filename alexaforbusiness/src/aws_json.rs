/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! AWS JSON 1.1 request serialization and response body deserialization.

use crate::config::Config;
use aws_smithy_types::error::operation::BuildError;
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "AlexaForBusiness";
const X_AMZ_TARGET: &str = "x-amz-target";
const X_AMZ_USER_AGENT: &str = "x-amz-user-agent";

/// Builds a `POST /` request carrying `input` as its JSON body.
///
/// Members that are unset are omitted from the body.
pub(crate) fn serialize_request<T>(
    operation: &'static str,
    input: &T,
    config: &Config,
) -> Result<http::Request<Bytes>, BuildError>
where
    T: Serialize + ?Sized,
{
    let endpoint = crate::endpoint::resolve_endpoint(config).map_err(BuildError::other)?;
    let body = serde_json::to_vec(input).map_err(BuildError::other)?;
    let user_agent = user_agent(config);
    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(endpoint)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(X_AMZ_TARGET, format!("{}.{}", TARGET_PREFIX, operation))
        .header(CONTENT_LENGTH, body.len())
        .header(USER_AGENT, user_agent.as_str())
        .header(X_AMZ_USER_AGENT, user_agent.as_str())
        .body(Bytes::from(body))
        .map_err(BuildError::other)?;
    tracing::debug!(operation, uri = %request.uri(), "serialized request");
    Ok(request)
}

/// Deserializes a response body, treating an empty body as `T::default()`.
pub(crate) fn deserialize_body<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

fn user_agent(config: &Config) -> String {
    let mut user_agent = format!(
        "aws-sdk-rust/{version} api/alexaforbusiness/{version} os/{os} lang/rust",
        version = crate::PKG_VERSION,
        os = std::env::consts::OS,
    );
    if let Some(app_name) = config.app_name() {
        user_agent.push_str(&format!(" app/{}", app_name));
    }
    user_agent
}

#[cfg(test)]
mod test {
    use super::{deserialize_body, serialize_request, user_agent};
    use crate::config::Config;
    use aws_types::app_name::AppName;
    use aws_types::region::Region;
    use serde::{Deserialize, Serialize};
    use tracing_test::traced_test;

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    struct Payload {
        #[serde(rename = "RoomArn", skip_serializing_if = "Option::is_none", default)]
        room_arn: Option<String>,
    }

    fn config() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    #[test]
    fn headers_and_body() {
        let request = serialize_request(
            "GetRoom",
            &Payload {
                room_arn: Some("arn".to_string()),
            },
            &config(),
        )
        .expect("valid request");
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri().path(), "/");
        assert_eq!(request.headers()["content-type"], "application/x-amz-json-1.1");
        assert_eq!(request.headers()["x-amz-target"], "AlexaForBusiness.GetRoom");
        assert_eq!(request.headers()["content-length"], "17");
        assert_eq!(request.body().as_ref(), br#"{"RoomArn":"arn"}"#);
    }

    #[test]
    fn empty_input_serializes_to_empty_object() {
        let request =
            serialize_request("GetRoom", &Payload::default(), &config()).expect("valid request");
        assert_eq!(request.body().as_ref(), b"{}");
    }

    #[test]
    fn missing_region_is_a_build_error() {
        let err = serialize_request("GetRoom", &Payload::default(), &Config::builder().build())
            .expect_err("no region");
        let source = std::error::Error::source(&err).expect("endpoint error is the source");
        assert!(source.to_string().contains("no region"), "{}", source);
    }

    #[test]
    fn app_name_in_user_agent() {
        let config = Config::builder()
            .app_name(AppName::new("room-admin").expect("valid app name"))
            .build();
        assert!(user_agent(&config).ends_with(" app/room-admin"));
        assert!(user_agent(&Config::builder().build()).starts_with("aws-sdk-rust/"));
    }

    #[test]
    fn empty_body_deserializes_to_default() {
        assert_eq!(deserialize_body::<Payload>(b"").unwrap(), Payload::default());
        assert_eq!(deserialize_body::<Payload>(b" \n").unwrap(), Payload::default());
        assert_eq!(
            deserialize_body::<Payload>(br#"{"RoomArn":"arn","Extra":1}"#).unwrap(),
            Payload {
                room_arn: Some("arn".to_string())
            }
        );
        assert!(deserialize_body::<Payload>(b"{").is_err());
    }

    #[traced_test]
    #[test]
    fn serialization_is_logged() {
        serialize_request("DeleteRoom", &Payload::default(), &config()).expect("valid request");
        assert!(logs_contain("serialized request"));
        assert!(logs_contain("DeleteRoom"));
    }
}
