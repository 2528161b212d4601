/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Idempotency tokens for create-style operations.
//!
//! Operations whose input carries a `ClientRequestToken` member get one generated when the caller
//! leaves it unset. Tokens are UUIDv4 strings drawn from a [`fastrand::Rng`].

use std::sync::{Arc, Mutex};

/// Formats 122 random bits as a version 4, variant 1 UUID.
pub(crate) fn uuid_v4(input: u128) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(36);
    let mut nibbles = input;
    for idx in 0..36 {
        match idx {
            8 | 13 | 18 | 23 => out.push('-'),
            14 => out.push('4'),
            _ => {
                let mut nibble = (nibbles & 0x0F) as u8;
                nibbles >>= 4;
                if idx == 19 {
                    nibble = (nibble & 0b0011) | 0b1000;
                }
                out.push(HEX_CHARS[nibble as usize] as char);
            }
        }
    }
    out
}

/// Source of idempotency tokens.
///
/// Cloning a provider shares the underlying random number generator.
#[derive(Debug, Clone)]
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

#[derive(Debug, Clone)]
enum Inner {
    Static(&'static str),
    Random(Arc<Mutex<fastrand::Rng>>),
}

/// Returns the default token provider, seeded from the system.
pub fn default_provider() -> IdempotencyTokenProvider {
    IdempotencyTokenProvider::random()
}

impl From<&'static str> for IdempotencyTokenProvider {
    fn from(token: &'static str) -> Self {
        Self::fixed(token)
    }
}

impl Default for IdempotencyTokenProvider {
    fn default() -> Self {
        default_provider()
    }
}

impl IdempotencyTokenProvider {
    /// Generates a new token.
    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Static(token) => token.to_string(),
            Inner::Random(rng) => {
                let input = rng
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .u128(..);
                uuid_v4(input)
            }
        }
    }

    /// A provider whose tokens are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: Inner::Random(Arc::new(Mutex::new(fastrand::Rng::with_seed(seed)))),
        }
    }

    /// A provider seeded from the system.
    pub fn random() -> Self {
        Self {
            inner: Inner::Random(Arc::new(Mutex::new(fastrand::Rng::new()))),
        }
    }

    /// A provider that always returns `token`.
    pub fn fixed(token: &'static str) -> Self {
        Self {
            inner: Inner::Static(token),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{uuid_v4, IdempotencyTokenProvider};
    use proptest::prelude::*;

    #[test]
    fn zero_input_is_a_valid_v4_uuid() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn all_bits_set_is_a_valid_v4_uuid() {
        assert_eq!(uuid_v4(u128::MAX), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn seeded_providers_are_reproducible() {
        let first = IdempotencyTokenProvider::with_seed(42);
        let second = IdempotencyTokenProvider::with_seed(42);
        let a = first.make_idempotency_token();
        assert_eq!(a, second.make_idempotency_token());
        assert_ne!(a, first.make_idempotency_token());
    }

    #[test]
    fn clones_share_the_generator() {
        let provider = IdempotencyTokenProvider::with_seed(7);
        let clone = provider.clone();
        assert_ne!(
            provider.make_idempotency_token(),
            clone.make_idempotency_token()
        );
    }

    #[test]
    fn fixed_provider() {
        let provider = IdempotencyTokenProvider::from("00000000-0000-4000-8000-000000000000");
        assert_eq!(
            provider.make_idempotency_token(),
            "00000000-0000-4000-8000-000000000000"
        );
    }

    proptest! {
        #[test]
        fn uuid_shape(input: u128) {
            let uuid = uuid_v4(input);
            prop_assert_eq!(uuid.len(), 36);
            let groups: Vec<&str> = uuid.split('-').collect();
            prop_assert_eq!(groups.iter().map(|g| g.len()).collect::<Vec<_>>(), vec![8, 4, 4, 4, 12]);
            prop_assert!(groups[2].starts_with('4'));
            prop_assert!(matches!(groups[3].as_bytes()[0], b'8' | b'9' | b'a' | b'b'));
            prop_assert!(uuid.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
        }
    }
}
