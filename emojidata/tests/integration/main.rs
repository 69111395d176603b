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

use std::path::PathBuf;

use emojidata::{DataConfig, EmojiData};

mod configs;
mod conformance;
mod registries;
mod scanning;
mod scenarios;

/// The reduced UTS #51 data files under `tests/data`.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

pub fn load() -> EmojiData {
    let mut data = EmojiData::from_config(&DataConfig::with_data_dir(data_dir()));
    data.load().unwrap();
    data
}

pub fn hex(hex: &str) -> String {
    emojidata::codepoints::hex_to_string(hex).unwrap()
}
