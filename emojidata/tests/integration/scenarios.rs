//
// emojidata
//
// Copyright 2024 emojidata contributors
//
// This file is part of emojidata.
//
// emojidata is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emojidata is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emojidata. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

use emojidata::QualifiedType;

use crate::{hex, load};

#[test]
fn test_scenario_emoji_presentation_character() {
    let data = load();
    assert_eq!(
        data.detect_qualified("😀").unwrap(),
        QualifiedType::FullyQualified
    );
}

#[test]
fn test_scenario_presentation_sequence() {
    let data = load();
    assert_eq!(
        data.detect_qualified("\u{263A}\u{FE0F}").unwrap(),
        QualifiedType::FullyQualified
    );
    assert_eq!(
        data.detect_qualified("\u{263A}").unwrap(),
        QualifiedType::Unqualified
    );
}

#[test]
fn test_scenario_zwj_family() {
    let data = load();
    let family = "👨\u{200D}👩\u{200D}👧";
    let patterns = data.patterns().unwrap();
    assert!(patterns.is_emoji_zwj_sequence(family));
    assert!(patterns.is_emoji_sequence(family));
    assert!(!patterns.is_emoji_core_sequence(family));
    assert_eq!(
        data.detect_qualified(family).unwrap(),
        QualifiedType::FullyQualified
    );
    assert_eq!(
        data.sequences().get(family).unwrap().description(),
        "family: man, woman, girl"
    );
}

#[test]
fn test_scenario_find_single_characters() {
    let data = load();
    let text = "1😛 2😛 3😛";
    let found = data.find_all(text);
    assert_eq!(found.len(), 3);
    assert_eq!(
        found.iter().map(|m| (m.start, m.end)).collect::<Vec<_>>(),
        vec![(1, 2), (4, 5), (7, 8)]
    );
    assert_eq!(
        found.iter().map(|m| m.byte_range()).collect::<Vec<_>>(),
        vec![1..5, 7..11, 13..17]
    );
    for m in &found {
        assert_eq!(m.record.as_str(), "😛");
        assert_eq!(m.record.len(), 1);
        assert_eq!(&text[m.byte_range()], "😛");
    }
}

#[test]
fn test_scenario_find_longest_family() {
    let data = load();
    let three = hex("1F468 200D 1F469 200D 1F467");
    let four = hex("1F468 200D 1F469 200D 1F467 200D 1F466");
    let text = format!("{}{}", three, four);
    let found = data.find_all(&text);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].record.as_str(), three);
    assert_eq!((found[0].start, found[0].end), (0, 5));
    assert_eq!(found[1].record.as_str(), four);
    assert_eq!((found[1].start, found[1].end), (5, 12));
    assert_eq!(found[1].byte_end, text.len());
}
