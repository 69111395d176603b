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

//! Qualification of emoji sequences, UTS #51 ED-18 through ED-19.
//!
//! A character in a sequence is *qualified* when it is displayed as emoji by
//! default, when it starts a modifier sequence or when it is followed by
//! VS16. A sequence is
//!
//! - *fully-qualified* when all of its emoji characters are qualified,
//! - *minimally-qualified* when its first character is qualified but some
//!   other emoji character is not,
//! - *unqualified* otherwise.

use std::{fmt, str::FromStr};

use crate::{
    character::CharacterRegistry,
    codepoints::{code_points_of, CodePoint},
    error::{Error, Result},
    grammar::{EmojiPatterns, Production},
};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualifiedType {
    FullyQualified,
    MinimallyQualified,
    Unqualified,
}

impl QualifiedType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified",
            Self::Unqualified => "unqualified",
        }
    }
}

impl fmt::Display for QualifiedType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

impl FromStr for QualifiedType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            "unqualified" => Ok(Self::Unqualified),
            other => Err(Error::invalid_argument(format!(
                "`{}` is not a qualification status.",
                other
            ))),
        }
    }
}

fn qualified_at(patterns: &EmojiPatterns, code_points: &[CodePoint], i: usize) -> bool {
    patterns.matches_at(Production::DefaultEmojiPresentationCharacter, code_points, i)
        || patterns.matches_at(Production::EmojiModifierSequence, code_points, i)
        || patterns.matches_at(Production::EmojiPresentationSequence, code_points, i)
}

/// Whether the character at character offset `i` of `s` is qualified.
/// Offsets past the end are never qualified.
pub fn is_qualified_emoji_character(patterns: &EmojiPatterns, s: &str, i: usize) -> bool {
    qualified_at(patterns, &code_points_of(s), i)
}

/// Classify `s`.
///
/// Every character of `s` must be registered, otherwise the input is rejected
/// with [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument).
/// Input that is not one well-formed `emoji_sequence` is unqualified.
pub fn detect_qualified(
    characters: &CharacterRegistry,
    patterns: &EmojiPatterns,
    s: &str,
) -> Result<QualifiedType> {
    if s.is_empty() {
        return Err(Error::invalid_argument(
            "Cannot detect qualification of an empty string.",
        ));
    }
    let code_points = code_points_of(s);
    if let Some(cp) = code_points.iter().find(|cp| !characters.contains(**cp)) {
        return Err(Error::invalid_argument(format!(
            "{:?} contains U+{:04X}, which is not an emoji character.",
            s, cp
        )));
    }
    if !patterns
        .pattern(Production::EmojiSequence)
        .is_full_match(&code_points)
    {
        return Ok(QualifiedType::Unqualified);
    }
    if !qualified_at(patterns, &code_points, 0) {
        return Ok(QualifiedType::Unqualified);
    }
    let emoji_character = patterns.pattern(Production::EmojiCharacter);
    let fully = (1..code_points.len()).all(|i| {
        !emoji_character.matches_at(&code_points, i) || qualified_at(patterns, &code_points, i)
    });
    Ok(if fully {
        QualifiedType::FullyQualified
    } else {
        QualifiedType::MinimallyQualified
    })
}
