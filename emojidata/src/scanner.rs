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

//! Leftmost, longest, non-overlapping search for a set of strings.

use std::ops::Range;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::Result;

/// One automaton over every pattern, longest patterns first.
#[derive(Clone, Debug, Default)]
pub struct SequenceScanner {
    automaton: Option<AhoCorasick>,
    /// Automaton pattern id to caller index.
    ids: Vec<usize>,
}

/// A match of the pattern with caller index `index`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanMatch {
    pub index: usize,
    /// Character offset of the first character.
    pub start: usize,
    /// Character offset one past the last character.
    pub end: usize,
    pub byte_range: Range<usize>,
}

impl SequenceScanner {
    /// Build a scanner over `patterns`. The caller index of each pattern is
    /// its position in the iterator. Empty patterns never match.
    pub fn new<'p, I>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut ordered = patterns
            .into_iter()
            .enumerate()
            .filter(|(_, p)| !p.is_empty())
            .map(|(i, p)| (i, p, p.chars().count()))
            .collect::<Vec<(usize, &str, usize)>>();
        if ordered.is_empty() {
            return Ok(Self::default());
        }
        // Stable, so equal lengths keep their order.
        ordered.sort_by_key(|(_, _, len)| std::cmp::Reverse(*len));
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(ordered.iter().map(|(_, p, _)| p))?;
        log::trace!("built sequence automaton over {} patterns", ordered.len());
        Ok(Self {
            automaton: Some(automaton),
            ids: ordered.into_iter().map(|(i, _, _)| i).collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Caller indices in automaton order.
    pub fn ordering(&self) -> &[usize] {
        &self.ids
    }

    pub fn find_iter<'s, 'h>(&'s self, text: &'h str) -> ScanIter<'s, 'h> {
        ScanIter {
            inner: self.automaton.as_ref().map(|ac| ac.find_iter(text)),
            ids: &self.ids,
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }
}

pub struct ScanIter<'s, 'h> {
    inner: Option<aho_corasick::FindIter<'s, 'h>>,
    ids: &'s [usize],
    text: &'h str,
    byte_pos: usize,
    char_pos: usize,
}

impl Iterator for ScanIter<'_, '_> {
    type Item = ScanMatch;

    fn next(&mut self) -> Option<ScanMatch> {
        let m = self.inner.as_mut()?.next()?;
        let (start_byte, end_byte) = (m.start(), m.end());
        self.char_pos += self.text[self.byte_pos..start_byte].chars().count();
        let start = self.char_pos;
        self.char_pos += self.text[start_byte..end_byte].chars().count();
        self.byte_pos = end_byte;
        Some(ScanMatch {
            index: self.ids[m.pattern().as_usize()],
            start,
            end: self.char_pos,
            byte_range: start_byte..end_byte,
        })
    }
}
