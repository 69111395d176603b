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

//! Registered emoji sequences, read from `emoji-variation-sequences.txt`,
//! `emoji-zwj-sequences.txt` and `emoji-sequences.txt`.
//!
//! ```text
//! 0023 FE0E  ; text style;  # 3.0  [1] (#︎) number sign
//! 1F468 200D 1F469 200D 1F467 ; RGI_Emoji_ZWJ_Sequence ; family: man, woman, girl # E2.0 [1] (👨‍👩‍👧)
//! 231A..231B ; Basic_Emoji ; watch..hourglass done # E0.6 [2] (⌚..⌛)
//! ```
//!
//! The registry is keyed by the exact string of each sequence. When the same
//! string appears more than once the first record read is kept.

use std::{fmt, ops::Range, str::FromStr};

use indexmap::IndexMap;

use crate::{
    character::{CharacterRecord, CharacterRegistry},
    codepoints::{code_points_to_string, parse_hex_list, to_hex, CodePoint, CodePoints},
    error::{Error, Result, ResultIntoError},
    loader::{CodePointsField, DataFile, DataLine, DataSource},
    scanner::{ScanIter, SequenceScanner},
};

/// Type tag of records read from the variation sequence file.
pub const VARIATION_SEQUENCE_TYPE: &str = "Emoji_Variation_Sequence";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Variation {
    /// `emoji style`
    Emoji,
    /// `text style`
    Text,
    #[default]
    None,
}

impl Variation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emoji => "emoji style",
            Self::Text => "text style",
            Self::None => "",
        }
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

impl FromStr for Variation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "emoji style" => Ok(Self::Emoji),
            "text style" => Ok(Self::Text),
            "" => Ok(Self::None),
            other => Err(Error::data_format(format!(
                "`{}` is not a variation style.",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SequenceRecord {
    code_points: CodePoints,
    string: String,
    type_tag: String,
    version: String,
    variation: Variation,
    description: String,
}

impl SequenceRecord {
    pub fn from_one(character: &CharacterRecord, type_tag: &str, description: &str) -> Result<Self> {
        Self::from_many(&[character], type_tag, description)
    }

    pub fn from_many(
        characters: &[&CharacterRecord],
        type_tag: &str,
        description: &str,
    ) -> Result<Self> {
        if characters.is_empty() {
            return Err(Error::invalid_argument(
                "A sequence needs at least one character.",
            ));
        }
        let code_points: CodePoints = characters.iter().map(|c| c.code_point()).collect();
        Ok(Self {
            string: code_points_to_string(&code_points)?,
            code_points,
            type_tag: type_tag.trim().to_string(),
            version: String::new(),
            variation: Variation::None,
            description: description.trim().to_string(),
        })
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variation = variation;
        self
    }

    pub fn code_points(&self) -> &[CodePoint] {
        &self.code_points
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub const fn variation(&self) -> Variation {
        self.variation
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// `1F468 200D 1F469`
    pub fn hex(&self) -> String {
        to_hex(&self.code_points)
    }

    pub fn characters<'c>(&self, registry: &'c CharacterRegistry) -> Result<Vec<&'c CharacterRecord>> {
        self.code_points.iter().map(|cp| registry.get(*cp)).collect()
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.string)
    }
}

/// Sequence files, consumed in field order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SequenceSources {
    pub variation: Vec<DataSource>,
    pub zwj: Vec<DataSource>,
    pub sequences: Vec<DataSource>,
}

impl SequenceSources {
    fn ordered(&self) -> impl Iterator<Item = (SourceKind, &DataSource)> + '_ {
        self.variation
            .iter()
            .map(|s| (SourceKind::Variation, s))
            .chain(self.zwj.iter().map(|s| (SourceKind::Sequence, s)))
            .chain(self.sequences.iter().map(|s| (SourceKind::Sequence, s)))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SourceKind {
    Variation,
    Sequence,
}

/// A registered sequence found in a text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SequenceMatch<'r> {
    pub record: &'r SequenceRecord,
    /// Character offset of the first character.
    pub start: usize,
    /// Character offset one past the last character.
    pub end: usize,
    pub byte_start: usize,
    pub byte_end: usize,
}

impl SequenceMatch<'_> {
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }
}

#[derive(Clone, Debug, Default)]
pub struct SequenceRegistry {
    records: IndexMap<String, SequenceRecord>,
    scanner: SequenceScanner,
    initialized: bool,
}

impl SequenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every sequence source. Does nothing if the registry is already
    /// initialized. On error the registry is left untouched.
    pub fn initialize(
        &mut self,
        characters: &CharacterRegistry,
        sources: &SequenceSources,
    ) -> Result<()> {
        if self.initialized {
            log::trace!("sequence registry already initialized");
            return Ok(());
        }
        if !characters.is_initialized() {
            return Err(Error::invalid_argument(
                "The sequence registry requires an initialized character registry.",
            ));
        }
        let mut records = IndexMap::new();
        for (kind, source) in sources.ordered() {
            let file = source.read()?;
            let before = records.len();
            Self::parse(&file, kind, characters, &mut records).chain_err_summary(|| {
                format!("Could not load emoji sequences from {}", file.name())
            })?;
            log::debug!(
                "loaded {} emoji sequences from {}",
                records.len() - before,
                file.name()
            );
        }
        let scanner = SequenceScanner::new(records.keys().map(String::as_str))?;
        self.records = records;
        self.scanner = scanner;
        self.initialized = true;
        Ok(())
    }

    fn parse(
        file: &DataFile,
        kind: SourceKind,
        characters: &CharacterRegistry,
        records: &mut IndexMap<String, SequenceRecord>,
    ) -> Result<()> {
        for line in file.lines() {
            let fields = line.fields(if kind == SourceKind::Variation { 2 } else { 3 })?;
            let info = line.comment_info();
            let (type_tag, variation, description) = match kind {
                SourceKind::Variation => (
                    VARIATION_SEQUENCE_TYPE,
                    fields[1]
                        .parse::<Variation>()
                        .map_err(|err| line.format_error(err.summary))?,
                    info.description,
                ),
                SourceKind::Sequence => (fields[1], Variation::None, fields[2]),
            };
            let field = CodePointsField::parse(fields[0])
                .map_err(|err| line.format_error(err.summary))?;
            let mut insert = |chars: &[&CharacterRecord]| -> Result<()> {
                let record = SequenceRecord::from_many(chars, type_tag, description)?
                    .with_version(info.version.unwrap_or_default())
                    .with_variation(variation);
                if records.contains_key(record.as_str()) {
                    debug!(
                        "{}:{}: ignoring duplicate sequence {}",
                        line.source,
                        line.line_no,
                        record.hex()
                    );
                    return Ok(());
                }
                records.insert(record.string.clone(), record);
                Ok(())
            };
            match field {
                CodePointsField::Range(start, end) => {
                    for cp in start..=end {
                        insert(std::slice::from_ref(&lookup(characters, &line, cp)?))?;
                    }
                }
                CodePointsField::List(code_points) => {
                    let chars = code_points
                        .iter()
                        .map(|cp| lookup(characters, &line, *cp))
                        .collect::<Result<Vec<_>>>()?;
                    insert(chars.as_slice())?;
                }
            }
        }
        Ok(())
    }

    /// Drop every record and reset the scanner. Does nothing if the
    /// registry is not initialized.
    pub fn release(&mut self) {
        if !self.initialized {
            return;
        }
        log::trace!("releasing {} emoji sequences", self.records.len());
        self.records.clear();
        self.scanner = SequenceScanner::default();
        self.initialized = false;
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, s: &str) -> bool {
        self.records.contains_key(s)
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, String, SequenceRecord> {
        self.records.values()
    }

    pub fn scanner(&self) -> &SequenceScanner {
        &self.scanner
    }

    pub fn get(&self, s: &str) -> Result<&SequenceRecord> {
        self.records.get(s).ok_or_else(|| {
            Error::not_found(format!(
                "{:?} ({}) is not a registered emoji sequence.",
                s,
                to_hex(&crate::codepoints::code_points_of(s))
            ))
        })
    }

    pub fn get_by_chars(&self, chars: &[char]) -> Result<&SequenceRecord> {
        self.get(&chars.iter().collect::<String>())
    }

    pub fn get_by_code_points(&self, code_points: &[CodePoint]) -> Result<&SequenceRecord> {
        self.get(&code_points_to_string(code_points)?)
    }

    /// `"1F468 200D 1F469"`, `"1F600"`.
    pub fn get_by_hex(&self, hex: &str) -> Result<&SequenceRecord> {
        self.get_by_code_points(&parse_hex_list(hex)?)
    }

    /// Registered sequences in `text`: leftmost first, longest at each
    /// position, never overlapping. Each call starts a new scan.
    pub fn find<'r, 'h>(&'r self, text: &'h str) -> Find<'r, 'h> {
        Find {
            records: &self.records,
            inner: self.scanner.find_iter(text),
        }
    }

    pub fn find_all<'r>(&'r self, text: &str) -> Vec<SequenceMatch<'r>> {
        self.find(text).collect()
    }
}

fn lookup<'c>(
    characters: &'c CharacterRegistry,
    line: &DataLine<'_>,
    code_point: CodePoint,
) -> Result<&'c CharacterRecord> {
    characters.get(code_point).chain_err_summary(|| {
        format!(
            "Line {} of {} refers to an unknown character",
            line.line_no, line.source
        )
    })
}

impl<'a> IntoIterator for &'a SequenceRegistry {
    type Item = &'a SequenceRecord;
    type IntoIter = indexmap::map::Values<'a, String, SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Find<'r, 'h> {
    records: &'r IndexMap<String, SequenceRecord>,
    inner: ScanIter<'r, 'h>,
}

impl<'r> Iterator for Find<'r, '_> {
    type Item = SequenceMatch<'r>;

    fn next(&mut self) -> Option<SequenceMatch<'r>> {
        let m = self.inner.next()?;
        let (_, record) = self.records.get_index(m.index)?;
        Some(SequenceMatch {
            record,
            start: m.start,
            end: m.end,
            byte_start: m.byte_range.start,
            byte_end: m.byte_range.end,
        })
    }
}
