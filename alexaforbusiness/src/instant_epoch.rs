/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Serde adapter for timestamps sent as fractional epoch seconds.

use aws_smithy_types::DateTime;
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S>(value: &Option<DateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(time) if time.subsec_nanos() == 0 => serializer.serialize_i64(time.secs()),
        Some(time) => serializer.serialize_f64(time.as_secs_f64()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = Option::<f64>::deserialize(deserializer)?;
    Ok(secs.map(DateTime::from_secs_f64))
}

#[cfg(test)]
mod test {
    use aws_smithy_types::DateTime;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Event {
        #[serde(
            rename = "Timestamp",
            default,
            skip_serializing_if = "Option::is_none",
            with = "super"
        )]
        timestamp: Option<DateTime>,
    }

    #[test]
    fn whole_seconds_serialize_as_integers() {
        let event = Event {
            timestamp: Some(DateTime::from_secs(1_576_540_098)),
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"Timestamp":1576540098}"#
        );
    }

    #[test]
    fn fractional_seconds_round_trip() {
        let event: Event = serde_json::from_str(r#"{"Timestamp":1576540098.5}"#).unwrap();
        let time = event.timestamp.expect("timestamp set");
        assert_eq!(time.secs(), 1_576_540_098);
        assert_eq!(time.subsec_nanos(), 500_000_000);
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"Timestamp":1576540098.5}"#
        );
    }

    #[test]
    fn missing_and_null_are_absent() {
        let missing: Event = serde_json::from_str("{}").unwrap();
        let null: Event = serde_json::from_str(r#"{"Timestamp":null}"#).unwrap();
        assert_eq!(missing.timestamp, None);
        assert_eq!(null.timestamp, None);
        assert_eq!(serde_json::to_string(&missing).unwrap(), "{}");
    }
}
