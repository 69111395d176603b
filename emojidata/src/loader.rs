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

//! Reader for the line format shared by the UTS #51 data files.
//!
//! ```text
//! 231A..231B    ; Basic_Emoji   ; watch..hourglass done   # E0.6   [2] (⌚..⌛)
//! ```
//!
//! Every non-blank line that does not start with `#` or `;` is split into
//! its content and its trailing comment. Interpreting the `;` separated
//! fields of the content is left to the format-aware callers, which report
//! [`ErrorKind::DataFormat`](crate::error::ErrorKind::DataFormat) errors.

use std::{
    borrow::Cow,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use smallvec::SmallVec;

use crate::{
    codepoints::{CodePoint, CodePoints},
    error::{Error, Result, ResultIntoError},
    utils::parsec::{
        code_point_list, code_point_range, delimited, is_a, match_literal, opt, pair, right,
        ws_eat, Parser,
    },
};

/// Where the lines of a data file come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    /// Text already in memory, for example a file embedded with
    /// `include_str!`.
    Inline {
        name: Cow<'static, str>,
        text: Cow<'static, str>,
    },
}

impl DataSource {
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Self::File(path.into())
    }

    pub const fn inline(name: &'static str, text: &'static str) -> Self {
        Self::Inline {
            name: Cow::Borrowed(name),
            text: Cow::Borrowed(text),
        }
    }

    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::File(path) => path.display().to_string().into(),
            Self::Inline { name, .. } => Cow::Borrowed(name.as_ref()),
        }
    }

    /// Read the whole source. Any I/O failure is returned as is; there are no
    /// retries.
    pub fn read(&self) -> Result<DataFile> {
        match self {
            Self::File(path) => {
                let text = std::fs::read_to_string(path).chain_err_summary(|| {
                    format!("Could not read emoji data file {}", path.display())
                })?;
                log::trace!("read {} bytes from {}", text.len(), path.display());
                Ok(DataFile {
                    name: path.display().to_string(),
                    text: Cow::Owned(text),
                })
            }
            Self::Inline { name, text } => Ok(DataFile {
                name: name.to_string(),
                text: text.clone(),
            }),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::inline("empty", "")
    }
}

impl From<&Path> for DataSource {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<PathBuf> for DataSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// The contents of a [`DataSource`].
#[derive(Clone, Debug)]
pub struct DataFile {
    name: String,
    text: Cow<'static, str>,
}

impl DataFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate the data lines of the file. Each call starts over from the
    /// first line.
    pub fn lines(&self) -> DataLines<'_> {
        DataLines {
            source: &self.name,
            inner: self.text.lines().enumerate(),
        }
    }
}

pub struct DataLines<'a> {
    source: &'a str,
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Iterator for DataLines<'a> {
    type Item = DataLine<'a>;

    fn next(&mut self) -> Option<DataLine<'a>> {
        for (idx, line) in self.inner.by_ref() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            let (content, comment) = line.split_once('#').unwrap_or((line, ""));
            return Some(DataLine {
                source: self.source,
                line_no: idx + 1,
                content: content.trim(),
                comment: comment.trim(),
            });
        }
        None
    }
}

/// A data line, split into its content and its comment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DataLine<'a> {
    pub source: &'a str,
    /// 1-based.
    pub line_no: usize,
    pub content: &'a str,
    pub comment: &'a str,
}

impl<'a> DataLine<'a> {
    /// Split the content on `;` and trim every field. Fails if fewer than
    /// `required` fields are present.
    pub fn fields(&self, required: usize) -> Result<SmallVec<[&'a str; 4]>> {
        let fields: SmallVec<[&'a str; 4]> = self.content.split(';').map(str::trim).collect();
        if fields.len() < required {
            return Err(self.format_error(format!(
                "expected {} `;` separated fields, found {}",
                required,
                fields.len()
            )));
        }
        Ok(fields)
    }

    pub fn comment_info(&self) -> CommentInfo<'a> {
        CommentInfo::parse(self.comment)
    }

    pub fn format_error<M: Into<Cow<'static, str>>>(&self, msg: M) -> Error {
        Error::data_format(format!(
            "Malformed line {} in {}: `{}`",
            self.line_no, self.source, self.content
        ))
        .set_details(msg)
    }
}

/// The code point column of a data line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CodePointsField {
    /// `<start>..<end>`, inclusive.
    Range(CodePoint, CodePoint),
    /// One or more space separated code points.
    List(CodePoints),
}

impl CodePointsField {
    pub fn parse(field: &str) -> Result<Self> {
        if let Ok((_, (start, end))) = ws_eat(code_point_range()).parse_complete(field) {
            if start > end {
                return Err(Error::data_format(format!(
                    "Reversed code point range `{}`.",
                    field
                )));
            }
            return Ok(Self::Range(start, end));
        }
        ws_eat(code_point_list())
            .parse_complete(field)
            .map(|(_, list)| Self::List(list.into_iter().collect()))
            .map_err(|_| Error::data_format(format!("Malformed code point field `{}`.", field)))
    }

    /// The code points covered by a range or by a single code point. `None`
    /// for lists of two or more code points.
    pub fn as_range(&self) -> Option<RangeInclusive<CodePoint>> {
        match self {
            Self::Range(start, end) => Some(*start..=*end),
            Self::List(list) if list.len() == 1 => Some(list[0]..=list[0]),
            Self::List(_) => None,
        }
    }
}

/// What can be recovered from the trailing comment of a data line.
///
/// ```text
/// E0.6   [2] (⌚..⌛)    watch..hourglass done
/// 3.0  [1] (#︎) number sign
/// (1.1) NUMBER SIGN
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CommentInfo<'a> {
    pub version: Option<&'a str>,
    pub count: Option<usize>,
    pub sample: Option<&'a str>,
    pub description: &'a str,
}

const DIGITS: &[u8] = b"0123456789";

fn version<'a>() -> impl Parser<'a, &'a str> {
    move |input: &'a str| {
        let (rest, _) = pair(
            opt(match_literal("E")),
            pair(is_a(DIGITS), right(match_literal("."), is_a(DIGITS))),
        )
        .parse(input)?;
        // The count may follow the version without a space, as in `E0.0[1022]`.
        if !(rest.is_empty()
            || rest.starts_with(char::is_whitespace)
            || rest.starts_with([')', '[']))
        {
            return Err(input);
        }
        Ok((rest, &input[..input.len() - rest.len()]))
    }
}

fn count<'a>() -> impl Parser<'a, usize> {
    move |input: &'a str| {
        let (rest, digits) =
            delimited(ws_eat(match_literal("[")), is_a(DIGITS), ws_eat(match_literal("]")))
                .parse(input)?;
        digits
            .parse::<usize>()
            .map(|n| (rest, n))
            .map_err(|_| input)
    }
}

impl<'a> CommentInfo<'a> {
    pub fn parse(comment: &'a str) -> Self {
        let mut ret = CommentInfo::default();
        let mut rest = comment.trim();
        if let Ok((next, v)) = either_version(rest) {
            ret.version = Some(v);
            rest = next.trim_start();
        }
        if let Ok((next, n)) = count().parse(rest) {
            ret.count = Some(n);
            rest = next.trim_start();
        }
        if let Some(inner) = rest.strip_prefix('(') {
            if let Some(end) = inner.find(')') {
                ret.sample = Some(&inner[..end]);
                rest = inner[end + 1..].trim_start();
            }
        }
        ret.description = rest.trim();
        ret
    }
}

fn either_version(input: &str) -> crate::utils::parsec::Result<'_, &str> {
    version()
        .parse(input)
        .or_else(|_| delimited(match_literal("("), version(), match_literal(")")).parse(input))
}
