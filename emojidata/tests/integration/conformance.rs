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

use emojidata::{
    conformance::{read_conformance, Status},
    loader::DataSource,
    QualifiedType,
};

use crate::{data_dir, load};

/// Rows where a later emoji character lacks VS16 although the first one is
/// qualified. `emoji-test.txt` lists them as unqualified, the position rule
/// classifies them as minimally-qualified.
const MINIMALLY_QUALIFIED_BY_POSITION: &[&str] = &["1F441 FE0F 200D 1F5E8"];

#[test]
fn test_conformance_emoji_test_file() {
    let data = load();
    let records = read_conformance(&DataSource::file(data_dir().join("emoji-test.txt"))).unwrap();
    assert_eq!(records.len(), 75);

    let mut checked = 0;
    let mut diverging = vec![];
    for record in &records {
        let Some(expected) = record.status.qualified_type() else {
            continue;
        };
        let hex = emojidata::codepoints::to_hex(&record.code_points);
        let text = record.to_text().unwrap();
        let detected = data.detect_qualified(&text).unwrap();
        checked += 1;
        if MINIMALLY_QUALIFIED_BY_POSITION.contains(&hex.as_str()) {
            assert_eq!(expected, QualifiedType::Unqualified, "{hex}");
            assert_eq!(detected, QualifiedType::MinimallyQualified, "{hex}");
            diverging.push(hex);
            continue;
        }
        assert_eq!(detected, expected, "{} {}", hex, record.description);
    }
    assert_eq!(checked, 70);
    assert_eq!(diverging, MINIMALLY_QUALIFIED_BY_POSITION);
}

#[test]
fn test_conformance_statuses() {
    let records = read_conformance(&DataSource::file(data_dir().join("emoji-test.txt"))).unwrap();
    let count = |status: Status| records.iter().filter(|r| r.status == status).count();
    assert_eq!(count(Status::Component), 5);
    assert_eq!(count(Status::MinimallyQualified), 4);
    assert!(count(Status::FullyQualified) > count(Status::Unqualified));

    let family = records
        .iter()
        .find(|r| r.description == "family: man, woman, girl, boy")
        .unwrap();
    assert_eq!(family.status, Status::FullyQualified);
    assert_eq!(family.version, "E2.0");
    assert_eq!(family.code_points.len(), 7);
}

#[test]
fn test_conformance_fully_qualified_sequences_are_registered() {
    let data = load();
    let records = read_conformance(&DataSource::file(data_dir().join("emoji-test.txt"))).unwrap();
    for record in records
        .iter()
        .filter(|r| r.status.qualified_type() == Some(QualifiedType::FullyQualified))
    {
        let text = record.to_text().unwrap();
        assert!(
            data.sequences().contains(&text),
            "{} is not registered",
            record.description
        );
    }
}
