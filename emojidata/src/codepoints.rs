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

//! Conversions between code points, characters, strings and the hexadecimal
//! notation of the data files.

use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    utils::parsec::{code_point_list, prefixed_hex_code_point, ws_eat, Parser},
};

pub type CodePoint = u32;

/// Most emoji sequences are shorter than eight code points.
pub type CodePoints = SmallVec<[CodePoint; 8]>;

pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

/// VS15
pub const TEXT_PRESENTATION_SELECTOR: CodePoint = 0xFE0E;
/// VS16
pub const EMOJI_PRESENTATION_SELECTOR: CodePoint = 0xFE0F;
pub const COMBINING_ENCLOSING_KEYCAP: CodePoint = 0x20E3;
pub const ZWJ: CodePoint = 0x200D;
pub const REGIONAL_INDICATOR_FIRST: CodePoint = 0x1F1E6;
pub const REGIONAL_INDICATOR_LAST: CodePoint = 0x1F1FF;
pub const TAG_SPEC_FIRST: CodePoint = 0xE0020;
pub const TAG_SPEC_LAST: CodePoint = 0xE007E;
pub const CANCEL_TAG: CodePoint = 0xE007F;
/// Keycap bases: `0-9`, `#` and `*`.
pub const KEYCAP_BASES: &[CodePoint] = &[
    0x23, 0x2A, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39,
];

pub fn code_point_to_char(code_point: CodePoint) -> Result<char> {
    char::from_u32(code_point).ok_or_else(|| {
        Error::invalid_argument(format!(
            "U+{:04X} is not a Unicode scalar value.",
            code_point
        ))
    })
}

pub fn code_points_of(s: &str) -> CodePoints {
    s.chars().map(CodePoint::from).collect()
}

/// Concatenate code points into a `String`.
pub fn code_points_to_string(code_points: &[CodePoint]) -> Result<String> {
    code_points
        .iter()
        .map(|cp| code_point_to_char(*cp))
        .collect::<Result<String>>()
}

/// Parse one hexadecimal code point. `1F600`, `U+1F600` and `0x1F600` are
/// accepted.
pub fn parse_hex(hex: &str) -> Result<CodePoint> {
    ws_eat(prefixed_hex_code_point())
        .parse_complete(hex)
        .map(|(_, cp)| cp)
        .map_err(|_| {
            Error::invalid_argument(format!("`{}` is not a hexadecimal code point.", hex))
        })
}

/// Parse a space separated list of hexadecimal code points, as found in the
/// first field of the sequence data files.
pub fn parse_hex_list(hex: &str) -> Result<CodePoints> {
    ws_eat(code_point_list())
        .parse_complete(hex)
        .map(|(_, cps)| cps.into_iter().collect())
        .map_err(|_| {
            Error::invalid_argument(format!(
                "`{}` is not a list of hexadecimal code points.",
                hex
            ))
        })
}

/// Convert a space separated hex list into the string it denotes.
///
/// ```rust
/// # use emojidata::codepoints::hex_to_string;
/// assert_eq!(hex_to_string("263A FE0F").unwrap(), "\u{263A}\u{FE0F}");
/// ```
pub fn hex_to_string(hex: &str) -> Result<String> {
    code_points_to_string(&parse_hex_list(hex)?)
}

/// Format code points in data file notation: `1F468 200D 1F469`.
pub fn to_hex(code_points: &[CodePoint]) -> String {
    code_points
        .iter()
        .map(|cp| format!("{:04X}", cp))
        .collect::<Vec<_>>()
        .join(" ")
}
