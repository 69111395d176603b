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

//! Location of the emoji data files.
//!
//! ```toml
//! data_dir = "/usr/share/unicode/emoji"
//! emoji_data = "emoji-data.txt"
//! emoji_sequences = "emoji-sequences.txt"
//! emoji_zwj_sequences = "emoji-zwj-sequences.txt"
//! emoji_variation_sequences = "emoji-variation-sequences.txt"
//! ```
//!
//! Every field is optional. File names are relative to `data_dir`, which
//! defaults to `$EMOJI_DATA_DIR` or `./data`.

use std::path::{Path, PathBuf};

use crate::{
    error::{Result, ResultIntoError},
    loader::DataSource,
    sequence::SequenceSources,
};

/// Environment variable overriding the default `data_dir`.
pub const DATA_DIR_ENV: &str = "EMOJI_DATA_DIR";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    pub emoji_data: String,
    pub emoji_sequences: String,
    pub emoji_zwj_sequences: String,
    pub emoji_variation_sequences: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::var_os(DATA_DIR_ENV)
                .map_or_else(|| PathBuf::from("data"), PathBuf::from),
            emoji_data: "emoji-data.txt".to_string(),
            emoji_sequences: "emoji-sequences.txt".to_string(),
            emoji_zwj_sequences: "emoji-zwj-sequences.txt".to_string(),
            emoji_variation_sequences: "emoji-variation-sequences.txt".to_string(),
        }
    }
}

impl DataConfig {
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).chain_err_summary(|| {
            format!("Could not read configuration file {}", path.display())
        })?;
        Self::from_toml_str(&contents).chain_err_summary(|| {
            format!("Could not parse configuration file {}", path.display())
        })
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    pub fn sources(&self) -> Sources {
        Sources {
            characters: DataSource::file(self.path_of(&self.emoji_data)),
            sequences: SequenceSources {
                variation: vec![DataSource::file(
                    self.path_of(&self.emoji_variation_sequences),
                )],
                zwj: vec![DataSource::file(self.path_of(&self.emoji_zwj_sequences))],
                sequences: vec![DataSource::file(self.path_of(&self.emoji_sequences))],
            },
        }
    }
}

/// Every data source needed to load an [`EmojiData`](crate::EmojiData).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sources {
    pub characters: DataSource,
    pub sequences: SequenceSources,
}
