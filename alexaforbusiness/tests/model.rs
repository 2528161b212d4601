/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use alexaforbusiness::input::PutSkillAuthorizationInput;
use alexaforbusiness::model::{
    Audio, Contact, Locale, NetworkProfile, NetworkSecurityType, PhoneNumber, PhoneNumberType,
    SkillDetails, Tag,
};
use pretty_assertions::assert_eq;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn audio() -> Audio {
    Audio::builder()
        .locale(Locale::EnUs)
        .location("https://bucket.s3.amazonaws.com/file.mp3")
        .build()
}

#[test]
fn equal_values_hash_equal() {
    let a = audio();
    let b = audio();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let other = Audio::builder().locale(Locale::EnUs).build();
    assert_ne!(a, other);
}

#[test]
fn display_lists_present_fields_only() {
    assert_eq!(
        "Audio { locale: en-US, location: https://bucket.s3.amazonaws.com/file.mp3 }",
        audio().to_string()
    );
    assert_eq!("Audio", Audio::builder().build().to_string());
    assert_eq!(
        "Tag { key: team }",
        Tag::builder().key("team").build().to_string()
    );
}

#[test]
fn default_equals_empty_builder() {
    assert_eq!(Audio::default(), Audio::builder().build());
    assert_eq!(None, Audio::default().locale());
    assert_eq!(None, Audio::default().location());
}

#[test]
fn chained_and_set_builders_agree() {
    let chained = Tag::builder().key("k").value("v").build();
    let set = Tag::builder()
        .set_key(Some("k".to_string()))
        .set_value(Some("v".to_string()))
        .build();
    assert_eq!(chained, set);
    assert_eq!(Some("k"), chained.key());
    assert_eq!(Some("v"), chained.value());

    let cleared = Tag::builder().key("k").set_key(None).build();
    assert_eq!(None, cleared.key());
}

#[test]
fn list_builders_append() {
    let contact = Contact::builder()
        .phone_numbers(
            PhoneNumber::builder()
                .number("555-0100")
                .r#type(PhoneNumberType::Work)
                .build(),
        )
        .phone_numbers(
            PhoneNumber::builder()
                .number("555-0101")
                .r#type(PhoneNumberType::Mobile)
                .build(),
        )
        .build();
    let numbers = contact.phone_numbers().expect("numbers set");
    assert_eq!(2, numbers.len());
    assert_eq!(Some(&PhoneNumberType::Work), numbers[0].r#type());
    assert_eq!(Some(&PhoneNumberType::Mobile), numbers[1].r#type());
}

#[test]
fn sensitive_fields_are_redacted() {
    let contact = Contact::builder()
        .display_name("Ana")
        .phone_number("+1-206-555-0100")
        .build();
    let debug = format!("{:?}", contact);
    let display = contact.to_string();
    for rendered in [&debug, &display] {
        assert!(rendered.contains("Sensitive Data Redacted"), "{}", rendered);
        assert!(!rendered.contains("555-0100"), "{}", rendered);
        assert!(rendered.contains("Ana"), "{}", rendered);
    }
    // the getter still exposes the value
    assert_eq!(Some("+1-206-555-0100"), contact.phone_number());

    let profile = NetworkProfile::builder()
        .ssid("office")
        .security_type(NetworkSecurityType::Wpa2Psk)
        .current_password("hunter2")
        .next_password("hunter3")
        .build();
    let debug = format!("{:?}", profile);
    assert!(!debug.contains("hunter"), "{}", debug);
    assert!(!profile.to_string().contains("hunter"));
    assert!(profile.to_string().contains("WPA2_PSK"));
}

#[test]
fn redaction_is_skipped_for_absent_values_in_display() {
    let contact = Contact::builder().display_name("Ana").build();
    assert_eq!("Contact { display_name: Ana }", contact.to_string());
}

#[test]
fn map_entries_reject_duplicate_keys() {
    let mut builder = PutSkillAuthorizationInput::builder()
        .skill_id("amzn1.ask.skill.1")
        .room_arn("arn:room");
    builder
        .add_authorization_result_entry("Code", "abc")
        .expect("first key");
    let err = builder
        .add_authorization_result_entry("Code", "def")
        .expect_err("duplicate key");
    assert!(err.to_string().contains("duplicated keys (Code) are provided"), "{}", err);

    // the failed call leaves the builder as it was
    builder
        .add_authorization_result_entry("State", "xyz")
        .expect("second key");
    let input = builder.build();
    assert_eq!(Some("amzn1.ask.skill.1"), input.skill_id());
    assert_eq!(Some("arn:room"), input.room_arn());
    let map = input.authorization_result().expect("map set");
    assert_eq!(2, map.len());
    assert_eq!(Some(&"abc".to_string()), map.get("Code"));
    assert_eq!(Some(&"xyz".to_string()), map.get("State"));
}

#[test]
fn map_entries_can_be_chained() {
    let mut builder = SkillDetails::builder().product_description("Lights");
    builder
        .add_reviews_entry("5", "great")
        .and_then(|b| b.add_reviews_entry("4", "good"))
        .expect("distinct keys");
    let details = builder.build();
    assert_eq!(Some("Lights"), details.product_description());
    assert_eq!(Some(2), details.reviews().map(|r| r.len()));
}

#[test]
fn map_entries_can_be_cleared() {
    let mut builder = SkillDetails::builder();
    builder.add_reviews_entry("5", "great").expect("first key");
    builder
        .clear_reviews_entries()
        .add_reviews_entry("5", "fine")
        .expect("cleared map accepts the key again");
    let details = builder.build();
    assert_eq!(
        Some(&"fine".to_string()),
        details.reviews().and_then(|r| r.get("5"))
    );
}

#[test]
fn map_values_hash_independent_of_insertion_order() {
    let mut builder = SkillDetails::builder();
    builder
        .add_reviews_entry("a", "1")
        .and_then(|b| b.add_reviews_entry("b", "2"))
        .and_then(|b| b.add_reviews_entry("c", "3"))
        .expect("distinct keys");
    let forward = builder.build();
    let mut map = HashMap::new();
    map.insert("c".to_string(), "3".to_string());
    map.insert("b".to_string(), "2".to_string());
    map.insert("a".to_string(), "1".to_string());
    let set = SkillDetails::builder().set_reviews(Some(map)).build();

    assert_eq!(forward, set);
    assert_eq!(hash_of(&forward), hash_of(&set));
    assert!(set.to_string().contains("{a: 1, b: 2, c: 3}"), "{}", set);
}

#[test]
fn values_serialize_with_wire_names() {
    let json = serde_json::to_value(audio()).expect("serializable");
    assert_eq!(
        serde_json::json!({
            "Locale": "en-US",
            "Location": "https://bucket.s3.amazonaws.com/file.mp3",
        }),
        json
    );
    let empty = serde_json::to_string(&Audio::default()).expect("serializable");
    assert_eq!("{}", empty);
}
