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

use std::fs;

use emojidata::{DataConfig, EmojiData, ErrorKind};
use tempfile::TempDir;

use crate::data_dir;

const FILES: [&str; 4] = [
    "emoji-data.txt",
    "emoji-sequences.txt",
    "emoji-zwj-sequences.txt",
    "emoji-variation-sequences.txt",
];

#[test]
fn test_configs_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    for name in FILES {
        let target = if name == "emoji-sequences.txt" {
            "sequences.txt"
        } else {
            name
        };
        fs::copy(data_dir().join(name), tmp_dir.path().join(target)).unwrap();
    }
    let conf_path = tmp_dir.path().join("emojidata.toml");
    fs::write(
        &conf_path,
        format!(
            r#"
data_dir = "{}"
emoji_sequences = "sequences.txt"
"#,
            tmp_dir.path().display()
        ),
    )
    .unwrap();

    let conf = DataConfig::from_file(&conf_path).unwrap();
    assert_eq!(conf.data_dir, tmp_dir.path());
    assert_eq!(conf.emoji_sequences, "sequences.txt");
    assert_eq!(conf.emoji_data, "emoji-data.txt");

    let mut data = EmojiData::from_config(&conf);
    data.load().unwrap();
    assert_eq!(data.characters().len(), 166);
    assert_eq!(data.sequences().len(), 76);
}

#[test]
fn test_configs_missing_files() {
    let tmp_dir = TempDir::new().unwrap();
    let mut data = EmojiData::from_config(&DataConfig::with_data_dir(tmp_dir.path()));
    let err = data.load().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io(std::io::ErrorKind::NotFound));
    assert!(!data.is_loaded());

    // Characters load, sequences do not: nothing stays loaded.
    fs::copy(
        data_dir().join("emoji-data.txt"),
        tmp_dir.path().join("emoji-data.txt"),
    )
    .unwrap();
    let err = data.load().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io(std::io::ErrorKind::NotFound));
    assert!(!data.is_loaded());
    assert!(data.characters().is_empty());
    assert!(data.patterns().is_err());
}

#[test]
fn test_configs_malformed_data() {
    let tmp_dir = TempDir::new().unwrap();
    for name in FILES {
        fs::copy(data_dir().join(name), tmp_dir.path().join(name)).unwrap();
    }
    let mut contents = fs::read_to_string(tmp_dir.path().join("emoji-data.txt")).unwrap();
    contents.push_str("1F601 ; Emoji_Sparkle # E0.6 [1] (😁) beaming face\n");
    fs::write(tmp_dir.path().join("emoji-data.txt"), contents).unwrap();

    let mut data = EmojiData::from_config(&DataConfig::with_data_dir(tmp_dir.path()));
    let err = data.load().unwrap_err();
    assert_eq!(err.kind, ErrorKind::DataFormat);
    assert!(err.to_string().contains("Emoji_Sparkle"));
    assert!(!data.is_loaded());

    // A sequence made of an unknown character.
    fs::copy(
        data_dir().join("emoji-data.txt"),
        tmp_dir.path().join("emoji-data.txt"),
    )
    .unwrap();
    let mut contents =
        fs::read_to_string(tmp_dir.path().join("emoji-zwj-sequences.txt")).unwrap();
    contents.push_str(
        "1F9D1 200D 1F384 ; RGI_Emoji_ZWJ_Sequence ; mx claus # E13.0 [1] (🧑‍🎄)\n",
    );
    fs::write(tmp_dir.path().join("emoji-zwj-sequences.txt"), contents).unwrap();
    let err = data.load().unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(!data.is_loaded());
}

#[test]
fn test_configs_rejects_unknown_fields() {
    let err = DataConfig::from_toml_str("emoji_test = \"emoji-test.txt\"").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}
