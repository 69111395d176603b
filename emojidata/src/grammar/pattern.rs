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

//! Matchers over code point slices.
//!
//! A [`Pattern`] is evaluated by computing the set of every position it can
//! stop at, starting from a set of positions. Alternatives are never
//! committed to early, so a whole-input match is found whenever one exists,
//! like a backtracking regular expression would.

use std::{fmt, sync::Arc};

use smallvec::SmallVec;

use super::Production;
use crate::codepoints::CodePoint;

type Interval = (CodePoint, CodePoint);

/// Sorted set of end positions.
pub type Positions = SmallVec<[usize; 4]>;

/// A set of code points stored as sorted, disjoint, non-adjacent inclusive
/// intervals.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CodePointSet {
    ranges: Vec<Interval>,
}

impl CodePointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(code_point: CodePoint) -> Self {
        Self::from_range(code_point, code_point)
    }

    pub fn from_range(start: CodePoint, end: CodePoint) -> Self {
        let mut ret = Self::new();
        if start <= end {
            ret.ranges.push((start, end));
        }
        ret
    }

    /// Binary search over the intervals.
    pub fn contains(&self, code_point: CodePoint) -> bool {
        self.ranges
            .binary_search_by(|&(start, end)| {
                if end < code_point {
                    std::cmp::Ordering::Less
                } else if start > code_point {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Number of code points in the set.
    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .map(|(start, end)| (end - start) as usize + 1)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[Interval] {
        &self.ranges
    }

    pub fn iter(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.ranges.iter().flat_map(|&(start, end)| start..=end)
    }
}

impl FromIterator<CodePoint> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = CodePoint>>(iter: I) -> Self {
        let mut code_points = iter.into_iter().collect::<Vec<CodePoint>>();
        code_points.sort_unstable();
        code_points.dedup();
        let mut ranges: Vec<Interval> = Vec::new();
        for cp in code_points {
            match ranges.last_mut() {
                Some((_, end)) if end.checked_add(1) == Some(cp) => *end = cp,
                _ => ranges.push((cp, cp)),
            }
        }
        Self { ranges }
    }
}

impl fmt::Display for CodePointSet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if let [(start, end)] = self.ranges.as_slice() {
            if start == end {
                return write!(fmt, "\\u{{{:04X}}}", start);
            }
        }
        write!(fmt, "[")?;
        for (start, end) in &self.ranges {
            if start == end {
                write!(fmt, "\\u{{{:04X}}}", start)?;
            } else {
                write!(fmt, "\\u{{{:04X}}}-\\u{{{:04X}}}", start, end)?;
            }
        }
        write!(fmt, "]")
    }
}

/// A production compiled into a reusable matcher.
#[derive(Clone, Debug)]
pub struct Fragment {
    pub production: Production,
    pub pattern: Pattern,
}

#[derive(Clone, Debug)]
pub enum Pattern {
    /// One code point from the set.
    Class(Arc<CodePointSet>),
    /// Each pattern in turn.
    Seq(Vec<Pattern>),
    /// Any of the patterns.
    Alt(Vec<Pattern>),
    OneOrMore(Box<Pattern>),
    /// A previously compiled production.
    Named(Arc<Fragment>),
}

fn union(positions: &mut Positions) {
    positions.sort_unstable();
    positions.dedup();
}

impl Pattern {
    pub fn class<I: IntoIterator<Item = CodePoint>>(code_points: I) -> Self {
        Self::Class(Arc::new(code_points.into_iter().collect()))
    }

    pub fn single(code_point: CodePoint) -> Self {
        Self::Class(Arc::new(CodePointSet::single(code_point)))
    }

    pub fn range(start: CodePoint, end: CodePoint) -> Self {
        Self::Class(Arc::new(CodePointSet::from_range(start, end)))
    }

    pub fn one_or_more(self) -> Self {
        Self::OneOrMore(Box::new(self))
    }

    /// Every position reachable by matching `self` once from any of
    /// `starts`.
    pub fn step(&self, input: &[CodePoint], starts: &[usize]) -> Positions {
        match self {
            Self::Class(set) => starts
                .iter()
                .filter(|&&s| input.get(s).is_some_and(|cp| set.contains(*cp)))
                .map(|s| s + 1)
                .collect(),
            Self::Seq(patterns) => {
                let mut current: Positions = starts.iter().copied().collect();
                for pattern in patterns {
                    if current.is_empty() {
                        break;
                    }
                    current = pattern.step(input, &current);
                }
                current
            }
            Self::Alt(patterns) => {
                let mut ret = Positions::new();
                for pattern in patterns {
                    ret.extend(pattern.step(input, starts));
                }
                union(&mut ret);
                ret
            }
            Self::OneOrMore(pattern) => {
                let mut ret = Positions::new();
                let mut frontier = pattern.step(input, starts);
                while !frontier.is_empty() {
                    frontier.retain(|p| !ret.contains(p));
                    ret.extend(frontier.iter().copied());
                    union(&mut ret);
                    frontier = pattern.step(input, &frontier);
                }
                ret
            }
            Self::Named(fragment) => fragment.pattern.step(input, starts),
        }
    }

    /// Whether `self` matches all of `input`.
    pub fn is_full_match(&self, input: &[CodePoint]) -> bool {
        self.step(input, &[0]).contains(&input.len())
    }

    /// Whether `input[start..]` begins with a match of `self`.
    pub fn matches_at(&self, input: &[CodePoint], start: usize) -> bool {
        !self.step(input, &[start]).is_empty()
    }

    /// The end of the longest match of `self` beginning at `start`.
    pub fn longest_match_at(&self, input: &[CodePoint], start: usize) -> Option<usize> {
        self.step(input, &[start]).last().copied()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Class(set) => write!(fmt, "{}", set),
            Self::Seq(patterns) => {
                write!(fmt, "(")?;
                for p in patterns {
                    write!(fmt, "{}", p)?;
                }
                write!(fmt, ")")
            }
            Self::Alt(patterns) => {
                write!(fmt, "(")?;
                for (i, p) in patterns.iter().enumerate() {
                    if i > 0 {
                        write!(fmt, "|")?;
                    }
                    write!(fmt, "{}", p)?;
                }
                write!(fmt, ")")
            }
            Self::OneOrMore(p) => write!(fmt, "{}+", p),
            Self::Named(fragment) => write!(fmt, "{{{}}}", fragment.production.name()),
        }
    }
}
