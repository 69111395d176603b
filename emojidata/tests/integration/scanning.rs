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

use emojidata::SequenceMatch;

use crate::{hex, load};

fn assert_well_formed(text: &str, found: &[SequenceMatch<'_>]) {
    for m in found {
        assert!(m.start < m.end);
        assert_eq!(&text[m.byte_range()], m.record.as_str());
        assert_eq!(text[..m.byte_start].chars().count(), m.start);
        assert_eq!(m.end - m.start, m.record.len());
    }
    for pair in found.windows(2) {
        assert!(pair[0].end <= pair[1].start, "{:?}", pair);
    }
}

#[test]
fn test_scanning_finds_every_sequence_as_itself() {
    let data = load();
    let records = data.sequences().iter().collect::<Vec<_>>();
    let text = records
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let found = data.find_all(&text);
    assert_well_formed(&text, &found);
    assert_eq!(found.len(), records.len());
    for (m, record) in found.iter().zip(records) {
        assert_eq!(m.record, record);
    }
}

#[test]
fn test_scanning_longest_match_wins() {
    let data = load();

    // A keycap contains the `0023 FE0F` variation sequence.
    let text = hex("0023 FE0F 20E3 0023 FE0F");
    let found = data.find_all(&text);
    assert_well_formed(&text, &found);
    assert_eq!(
        found.iter().map(|m| m.record.hex()).collect::<Vec<_>>(),
        vec!["0023 FE0F 20E3", "0023 FE0F"]
    );

    // Modifier sequences and their bases back to back.
    let text = "👍🏽👍👍🏻";
    let found = data.find_all(text);
    assert_well_formed(text, &found);
    assert_eq!(
        found.iter().map(|m| (m.start, m.end)).collect::<Vec<_>>(),
        vec![(0, 2), (2, 3), (3, 5)]
    );

    // The flag is preferred over the black flag and the tags are not
    // registered on their own.
    let england = hex("1F3F4 E0067 E0062 E0065 E006E E0067 E007F");
    let text = format!("{}{}", england, "🏴");
    let found = data.find_all(&text);
    assert_well_formed(&text, &found);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].record.description(), "flag: England");
    assert_eq!(found[1].record.description(), "black flag");
}

#[test]
fn test_scanning_partial_sequences() {
    let data = load();

    // Unregistered ZWJ sequence: only its registered head is found.
    let text = hex("1F441 FE0F 200D 1F5E8");
    let found = data.find_all(&text);
    assert_well_formed(&text, &found);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].record.hex(), "1F441 FE0F");

    // Unregistered family: the members are found one by one.
    let text = hex("1F469 200D 1F469 200D 1F467");
    let found = data.find_all(&text);
    assert_well_formed(&text, &found);
    assert_eq!(
        found.iter().map(|m| m.start).collect::<Vec<_>>(),
        vec![0, 2, 4]
    );

    // Regional indicators are only registered in pairs.
    let text = hex("1F1FA 1F1F8 1F1FA");
    let found = data.find_all(&text);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].record.description(), "flag: United States");
}

#[test]
fn test_scanning_iterator() {
    let data = load();
    let text = "Hi 👋🏽! ☺\u{FE0F} and ☺";
    let mut find = data.find(text);
    let first = find.next().unwrap();
    assert_eq!(first.record.description(), "waving hand: medium skin tone");
    assert_eq!((first.start, first.end), (3, 5));
    let second = find.next().unwrap();
    assert_eq!(second.record.hex(), "263A FE0F");
    assert_eq!((second.start, second.end), (7, 9));
    assert!(find.next().is_none());

    // Every call starts over.
    assert_eq!(data.find(text).count(), 2);
    assert!(data.find_all("").is_empty());
    assert!(data.find_all("no emoji here").is_empty());
}
