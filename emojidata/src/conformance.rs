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

//! Records of `emoji-test.txt`, the keyboard and display test data file.
//!
//! ```text
//! 263A FE0F    ; fully-qualified     # ☺️ E0.6 smiling face
//! 263A         ; unqualified         # ☺ E0.6 smiling face
//! ```

use std::{fmt, str::FromStr};

use crate::{
    codepoints::{code_points_to_string, CodePoints},
    error::{Error, Result, ResultIntoError},
    loader::{CodePointsField, CommentInfo, DataSource},
    qualified::QualifiedType,
};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Component,
    FullyQualified,
    MinimallyQualified,
    Unqualified,
}

impl Status {
    /// `None` for components, which are not classified.
    pub const fn qualified_type(self) -> Option<QualifiedType> {
        match self {
            Self::Component => None,
            Self::FullyQualified => Some(QualifiedType::FullyQualified),
            Self::MinimallyQualified => Some(QualifiedType::MinimallyQualified),
            Self::Unqualified => Some(QualifiedType::Unqualified),
        }
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() == "component" {
            return Ok(Self::Component);
        }
        s.parse::<QualifiedType>()
            .map(|q| match q {
                QualifiedType::FullyQualified => Self::FullyQualified,
                QualifiedType::MinimallyQualified => Self::MinimallyQualified,
                QualifiedType::Unqualified => Self::Unqualified,
            })
            .chain_err_kind(crate::error::ErrorKind::DataFormat)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.qualified_type() {
            None => write!(fmt, "component"),
            Some(q) => write!(fmt, "{}", q),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConformanceRecord {
    pub code_points: CodePoints,
    pub status: Status,
    pub version: String,
    pub description: String,
}

impl ConformanceRecord {
    pub fn to_text(&self) -> Result<String> {
        code_points_to_string(&self.code_points)
    }
}

/// Read every record of an `emoji-test.txt` source.
pub fn read_conformance(source: &DataSource) -> Result<Vec<ConformanceRecord>> {
    let file = source.read()?;
    let mut ret = vec![];
    for line in file.lines() {
        let fields = line.fields(2)?;
        let code_points = match CodePointsField::parse(fields[0])
            .map_err(|err| line.format_error(err.summary))?
        {
            CodePointsField::List(list) => list,
            CodePointsField::Range(_, _) => {
                return Err(line.format_error("ranges are not allowed in test data"))
            }
        };
        let status = fields[1]
            .parse::<Status>()
            .map_err(|err| line.format_error(err.summary))?;
        // The comment starts with the sample, which is skipped.
        let rest = line
            .comment
            .split_once(char::is_whitespace)
            .map_or("", |(_, rest)| rest);
        let info = CommentInfo::parse(rest);
        ret.push(ConformanceRecord {
            code_points,
            status,
            version: info.version.unwrap_or_default().to_string(),
            description: info.description.to_string(),
        });
    }
    log::debug!("read {} conformance records from {}", ret.len(), file.name());
    Ok(ret)
}
