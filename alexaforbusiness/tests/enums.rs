/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use alexaforbusiness::model::{
    BusinessReportFailureCode, BusinessReportFormat, BusinessReportInterval, BusinessReportStatus,
    CommsProtocol, ConferenceProviderType, ConnectionStatus, DeviceEventType, DeviceStatus,
    DeviceStatusDetailCode, DeviceUsageType, DistanceUnit, EnablementType, EnablementTypeFilter,
    EndOfMeetingReminderType, EnrollmentStatus, Feature, Locale, NetworkEapMethod,
    NetworkSecurityType, PhoneNumberType, RequirePin, SipType, SkillType, SkillTypeFilter,
    SortValue, TemperatureUnit, WakeWord,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn known_values_parse_strictly() {
    assert_eq!(Locale::EnUs, Locale::try_parse("en-US").expect("known"));
    assert_eq!(
        NetworkSecurityType::Wpa2Enterprise,
        "WPA2_ENTERPRISE".parse::<NetworkSecurityType>().expect("known")
    );
    assert_eq!(CommsProtocol::H323, CommsProtocol::try_parse("H323").expect("known"));
}

#[test]
fn empty_and_unknown_values_fail_distinctly() {
    let empty = Locale::try_parse("").expect_err("empty");
    assert!(empty.is_empty_value());
    assert_eq!("enum value cannot be empty", empty.to_string());

    let unknown = Locale::try_parse("fr-FR").expect_err("unknown");
    assert!(!unknown.is_empty_value());
    assert_eq!("fr-FR", unknown.value());
    assert_eq!("unknown enum variant: 'fr-FR'", unknown.to_string());
}

#[test]
fn lenient_conversion_keeps_unknown_values() {
    let parsed = DeviceEventType::from("SOMETHING_NEW");
    assert_eq!(DeviceEventType::Unknown("SOMETHING_NEW".into()), parsed);
    assert_eq!("SOMETHING_NEW", parsed.as_str());
    assert_eq!("CSV_ZIP", BusinessReportFormat::from("CSV_ZIP".to_string()).as_str());
}

#[test]
fn enums_serialize_as_wire_strings() {
    let json = serde_json::to_string(&NetworkSecurityType::Wpa2Psk).expect("serializable");
    assert_eq!("\"WPA2_PSK\"", json);
    let back: NetworkSecurityType = serde_json::from_str("\"WEP\"").expect("deserializable");
    assert_eq!(NetworkSecurityType::Wep, back);
    let unknown: NetworkSecurityType = serde_json::from_str("\"WPA3\"").expect("deserializable");
    assert_eq!(NetworkSecurityType::Unknown("WPA3".into()), unknown);
}

/// Checks that strict lookup inverts `as_str` and `Display` for every listed value of each enum,
/// and that empty and unlisted values are rejected.
macro_rules! check_enums {
    ($($enum:ty),+ $(,)?) => {$(
        {
            let name = stringify!($enum);
            let values = <$enum>::values();
            assert!(!values.is_empty(), "{} lists no values", name);
            for value in values {
                let parsed = <$enum>::try_parse(value)
                    .unwrap_or_else(|err| panic!("{}: {} ({})", name, value, err));
                assert_eq!(*value, parsed.as_str(), "{}", name);
                assert_eq!(*value, parsed.to_string(), "{}", name);
                assert_eq!(parsed, <$enum>::from(*value), "{}", name);
                assert_eq!(Ok(parsed), value.parse::<$enum>(), "{}", name);
            }
            let empty = <$enum>::try_parse("").expect_err(name);
            assert!(empty.is_empty_value(), "{}", name);
            let unknown = <$enum>::try_parse("not-a-wire-value").expect_err(name);
            assert_eq!("unknown enum variant: 'not-a-wire-value'", unknown.to_string(), "{}", name);
        }
    )+};
}

#[test]
fn every_enum_round_trips_its_values() {
    check_enums!(
        BusinessReportFailureCode,
        BusinessReportFormat,
        BusinessReportInterval,
        BusinessReportStatus,
        CommsProtocol,
        ConferenceProviderType,
        ConnectionStatus,
        DeviceEventType,
        DeviceStatus,
        DeviceStatusDetailCode,
        DeviceUsageType,
        DistanceUnit,
        EnablementType,
        EnablementTypeFilter,
        EndOfMeetingReminderType,
        EnrollmentStatus,
        Feature,
        Locale,
        NetworkEapMethod,
        NetworkSecurityType,
        PhoneNumberType,
        RequirePin,
        SipType,
        SkillType,
        SkillTypeFilter,
        SortValue,
        TemperatureUnit,
        WakeWord,
    );
}

proptest! {
    #[test]
    fn every_listed_value_round_trips(index in 0..NetworkSecurityType::values().len()) {
        let value = NetworkSecurityType::values()[index];
        let parsed = NetworkSecurityType::try_parse(value).expect("listed values are known");
        prop_assert_eq!(value, parsed.as_str());
        prop_assert_eq!(value, parsed.to_string());
    }

    #[test]
    fn unlisted_values_are_rejected(value in "[a-z]{1,12}") {
        // wire values for this enum are upper case
        let err = DeviceEventType::try_parse(&value).expect_err("lower case is unknown");
        prop_assert_eq!(value.as_str(), err.value());
    }
}
