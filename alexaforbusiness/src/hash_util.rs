/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Hashes an optional map independent of its iteration order.
pub(crate) fn hash_map_sorted<H: Hasher>(map: Option<&HashMap<String, String>>, state: &mut H) {
    let entries = map.map(|map| {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort();
        entries
    });
    entries.hash(state);
}

#[cfg(test)]
mod test {
    use super::hash_map_sorted;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::hash::Hasher;

    fn digest(map: Option<&HashMap<String, String>>) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_map_sorted(map, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let mut first = HashMap::new();
        let mut second = HashMap::new();
        for i in 0..32 {
            first.insert(format!("k{}", i), i.to_string());
        }
        for i in (0..32).rev() {
            second.insert(format!("k{}", i), i.to_string());
        }
        assert_eq!(digest(Some(&first)), digest(Some(&second)));
    }

    #[test]
    fn absent_and_empty_differ() {
        assert_ne!(digest(None), digest(Some(&HashMap::new())));
    }
}
