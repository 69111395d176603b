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

//! Emoji character properties, read from `emoji-data.txt`.
//!
//! ```text
//! 1F600         ; Emoji                # E1.0   [1] (😀)       grinning face
//! 1F3FB..1F3FF  ; Emoji_Modifier       # E1.0   [5] (🏻..🏿)    light skin tone..dark skin tone
//! ```
//!
//! See <https://www.unicode.org/reports/tr51/#Emoji_Properties>.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    codepoints::{
        code_point_to_char, parse_hex, CodePoint, COMBINING_ENCLOSING_KEYCAP,
        EMOJI_PRESENTATION_SELECTOR, KEYCAP_BASES, TEXT_PRESENTATION_SELECTOR,
    },
    error::{Error, Result, ResultIntoError},
    loader::{CodePointsField, DataFile, DataSource},
};

bitflags! {
    /// The emoji character properties of a code point.
    #[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
    pub struct EmojiProperties: u8 {
        /// `Emoji`
        const EMOJI   = 0b0000_0001;
        /// `Emoji_Presentation`
        const EPRES   = 0b0000_0010;
        /// `Emoji_Modifier`
        const EMOD    = 0b0000_0100;
        /// `Emoji_Modifier_Base`
        const EBASE   = 0b0000_1000;
        /// `Emoji_Component`
        const ECOMP   = 0b0001_0000;
        /// `Extended_Pictographic`
        const EXTPICT = 0b0010_0000;
    }
}

const PROPERTY_NAMES: [(EmojiProperties, &str); 6] = [
    (EmojiProperties::EMOJI, "Emoji"),
    (EmojiProperties::EPRES, "Emoji_Presentation"),
    (EmojiProperties::EMOD, "Emoji_Modifier"),
    (EmojiProperties::EBASE, "Emoji_Modifier_Base"),
    (EmojiProperties::ECOMP, "Emoji_Component"),
    (EmojiProperties::EXTPICT, "Extended_Pictographic"),
];

impl EmojiProperties {
    pub fn from_property_name(name: &str) -> Option<Self> {
        PROPERTY_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(flag, _)| *flag)
    }

    /// Property names as spelled in the data file, in declaration order.
    pub fn property_names(self) -> impl Iterator<Item = &'static str> {
        PROPERTY_NAMES
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CharacterRecord {
    code_point: CodePoint,
    properties: EmojiProperties,
    version: String,
    description: String,
}

impl CharacterRecord {
    pub fn from_one(
        code_point: CodePoint,
        property: EmojiProperties,
        version: &str,
        description: &str,
    ) -> Self {
        Self::from_many(code_point, [property], version, description)
    }

    pub fn from_many<I>(code_point: CodePoint, properties: I, version: &str, description: &str) -> Self
    where
        I: IntoIterator<Item = EmojiProperties>,
    {
        Self {
            code_point,
            properties: properties.into_iter().collect(),
            version: version.to_string(),
            description: description.to_string(),
        }
    }

    /// A record without properties, for code points sequences need but the
    /// property file does not list.
    pub fn empty(code_point: CodePoint) -> Self {
        Self::from_many(code_point, std::iter::empty(), "", "")
    }

    pub const fn code_point(&self) -> CodePoint {
        self.code_point
    }

    pub const fn properties(&self) -> EmojiProperties {
        self.properties
    }

    pub fn has_property(&self, property: EmojiProperties) -> bool {
        self.properties.contains(property)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `1F600`
    pub fn hex(&self) -> String {
        format!("{:04X}", self.code_point)
    }

    pub fn as_char(&self) -> Result<char> {
        code_point_to_char(self.code_point)
    }
}

impl fmt::Display for CharacterRecord {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match char::from_u32(self.code_point) {
            Some(c) => write!(fmt, "{}", c),
            None => write!(fmt, "U+{}", self.hex()),
        }
    }
}

/// All known emoji characters, keyed by code point in insertion order.
#[derive(Clone, Debug, Default)]
pub struct CharacterRegistry {
    records: IndexMap<CodePoint, CharacterRecord>,
    initialized: bool,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the property file. Does nothing if the registry is already
    /// initialized. On error the registry is left untouched.
    pub fn initialize(&mut self, source: &DataSource) -> Result<()> {
        if self.initialized {
            log::trace!("character registry already initialized");
            return Ok(());
        }
        let file = source.read()?;
        let records = Self::parse(&file)
            .chain_err_summary(|| format!("Could not load emoji properties from {}", file.name()))?;
        log::debug!(
            "loaded {} emoji characters from {}",
            records.len(),
            file.name()
        );
        self.records = records;
        self.initialized = true;
        Ok(())
    }

    fn parse(file: &DataFile) -> Result<IndexMap<CodePoint, CharacterRecord>> {
        let mut records: IndexMap<CodePoint, CharacterRecord> = IndexMap::new();
        for line in file.lines() {
            let fields = line.fields(2)?;
            let range = CodePointsField::parse(fields[0])
                .map_err(|err| line.format_error(err.summary))?
                .as_range()
                .ok_or_else(|| line.format_error("expected a code point or a range"))?;
            let property = EmojiProperties::from_property_name(fields[1]).ok_or_else(|| {
                line.format_error(format!("unknown property `{}`", fields[1]))
            })?;
            let info = line.comment_info();
            for code_point in range {
                records
                    .entry(code_point)
                    .and_modify(|record| record.properties.insert(property))
                    .or_insert_with(|| {
                        CharacterRecord::from_one(
                            code_point,
                            property,
                            info.version.unwrap_or_default(),
                            info.description,
                        )
                    });
            }
        }
        for code_point in [
            TEXT_PRESENTATION_SELECTOR,
            EMOJI_PRESENTATION_SELECTOR,
            COMBINING_ENCLOSING_KEYCAP,
        ] {
            records
                .entry(code_point)
                .or_insert_with(|| CharacterRecord::empty(code_point));
        }
        Ok(records)
    }

    /// Drop every record. Does nothing if the registry is not initialized.
    pub fn release(&mut self) {
        if !self.initialized {
            return;
        }
        log::trace!("releasing {} emoji characters", self.records.len());
        self.records.clear();
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

    pub fn contains(&self, code_point: CodePoint) -> bool {
        self.records.contains_key(&code_point)
    }

    pub fn get(&self, code_point: CodePoint) -> Result<&CharacterRecord> {
        self.records.get(&code_point).ok_or_else(|| {
            Error::not_found(format!("U+{:04X} is not an emoji character.", code_point))
        })
    }

    pub fn get_by_char(&self, c: char) -> Result<&CharacterRecord> {
        self.get(CodePoint::from(c))
    }

    /// Look up a string made of exactly one character.
    pub fn get_by_str(&self, s: &str) -> Result<&CharacterRecord> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.get_by_char(c),
            _ => Err(Error::invalid_argument(format!(
                "Expected exactly one character, got {:?}.",
                s
            ))),
        }
    }

    pub fn get_by_hex(&self, hex: &str) -> Result<&CharacterRecord> {
        self.get(parse_hex(hex)?)
    }

    /// Whether `code_point` is registered, excluding the keycap bases
    /// `0-9#*` which only count as emoji inside a keycap sequence.
    pub fn is_emoji_code_point(&self, code_point: CodePoint) -> bool {
        !KEYCAP_BASES.contains(&code_point) && self.contains(code_point)
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, CodePoint, CharacterRecord> {
        self.records.values()
    }

    /// Code points of every record having all of `properties`.
    pub fn code_points_with(
        &self,
        properties: EmojiProperties,
    ) -> impl Iterator<Item = CodePoint> + '_ {
        self.iter()
            .filter(move |r| r.properties.contains(properties))
            .map(CharacterRecord::code_point)
    }

    /// Code points of every record having none of `properties`.
    pub fn code_points_without(
        &self,
        properties: EmojiProperties,
    ) -> impl Iterator<Item = CodePoint> + '_ {
        self.iter()
            .filter(move |r| !r.properties.intersects(properties))
            .map(CharacterRecord::code_point)
    }
}

impl<'a> IntoIterator for &'a CharacterRegistry {
    type Item = &'a CharacterRecord;
    type IntoIter = indexmap::map::Values<'a, CodePoint, CharacterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
