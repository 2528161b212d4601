/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Helpers backing the `Display` impls of generated shapes.

use std::collections::HashMap;
use std::fmt;

/// Renders a value with its `Display` impl where a `Debug` value is expected.
pub(crate) struct Shown<'a, T: ?Sized>(pub(crate) &'a T);

impl<T: fmt::Display + ?Sized> fmt::Debug for Shown<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

pub(crate) struct DisplayList<'a, T>(pub(crate) &'a [T]);

impl<T: fmt::Display> fmt::Debug for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(Shown)).finish()
    }
}

/// Entries are rendered in key order so output is stable across runs.
pub(crate) struct DisplayMap<'a>(pub(crate) &'a HashMap<String, String>);

impl fmt::Debug for DisplayMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort();
        f.debug_map()
            .entries(entries.into_iter().map(|(k, v)| (Shown(k), Shown(v))))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{DisplayList, DisplayMap, Shown};
    use std::collections::HashMap;

    #[test]
    fn shown_uses_display() {
        assert_eq!(format!("{:?}", Shown("no quotes")), "no quotes");
    }

    #[test]
    fn lists_render_elements_with_display() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format!("{:?}", DisplayList(&items)), "[a, b]");
        let empty: Vec<i32> = vec![];
        assert_eq!(format!("{:?}", DisplayList(&empty)), "[]");
    }

    #[test]
    fn maps_render_sorted() {
        let mut map = HashMap::new();
        map.insert("zeta".to_string(), "1".to_string());
        map.insert("alpha".to_string(), "2".to_string());
        assert_eq!(format!("{:?}", DisplayMap(&map)), "{alpha: 2, zeta: 1}");
    }
}
