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

//! Parser combinators for the fields of the emoji data files.

use crate::codepoints::CodePoint;

pub type Result<'a, Output> = std::result::Result<(&'a str, Output), &'a str>;

pub trait Parser<'a, Output> {
    fn parse(&self, input: &'a str) -> Result<'a, Output>;

    fn parse_complete(&self, input: &'a str) -> Result<'a, Output> {
        match self.parse(input) {
            r @ Ok(("", _)) => r,
            r @ Err(_) => r,
            Ok(_) => Err(input),
        }
    }
}

impl<'a, F, Output> Parser<'a, Output> for F
where
    F: Fn(&'a str) -> Result<Output>,
{
    fn parse(&self, input: &'a str) -> Result<'a, Output> {
        self(input)
    }
}

pub fn map<'a, P, F, A, B>(parser: P, map_fn: F) -> impl Parser<'a, B>
where
    P: Parser<'a, A>,
    F: Fn(A) -> B,
{
    move |input| {
        parser
            .parse(input)
            .map(|(next_input, result)| (next_input, map_fn(result)))
    }
}

pub fn map_res<'a, P, F, E, A, B>(parser: P, map_fn: F) -> impl Parser<'a, B>
where
    P: Parser<'a, A>,
    F: Fn(A) -> std::result::Result<B, E>,
{
    move |input| {
        parser.parse(input).and_then(|(next_input, result)| {
            map_fn(result).map_or_else(|_| Err(input), |res| Ok((next_input, res)))
        })
    }
}

pub fn match_literal<'a>(expected: &'static str) -> impl Parser<'a, ()> {
    move |input: &'a str| match input.get(0..expected.len()) {
        Some(next) if next == expected => Ok((&input[expected.len()..], ())),
        _ => Err(input),
    }
}

pub fn match_literal_anycase<'a>(expected: &'static str) -> impl Parser<'a, ()> {
    move |input: &'a str| match input.get(0..expected.len()) {
        Some(next) if next.eq_ignore_ascii_case(expected) => Ok((&input[expected.len()..], ())),
        _ => Err(input),
    }
}

pub fn one_or_more<'a, P, A>(parser: P) -> impl Parser<'a, Vec<A>>
where
    P: Parser<'a, A>,
{
    move |mut input| {
        let mut result = Vec::new();

        if let Ok((next_input, first_item)) = parser.parse(input) {
            input = next_input;
            result.push(first_item);
        } else {
            return Err(input);
        }

        while let Ok((next_input, next_item)) = parser.parse(input) {
            input = next_input;
            result.push(next_item);
        }

        Ok((input, result))
    }
}

pub fn zero_or_more<'a, P, A>(parser: P) -> impl Parser<'a, Vec<A>>
where
    P: Parser<'a, A>,
{
    move |mut input| {
        let mut result = Vec::new();

        while let Ok((next_input, next_item)) = parser.parse(input) {
            input = next_input;
            result.push(next_item);
        }

        Ok((input, result))
    }
}

pub fn pred<'a, P, A, F>(parser: P, predicate: F) -> impl Parser<'a, A>
where
    P: Parser<'a, A>,
    F: Fn(&A) -> bool,
{
    move |input| {
        if let Ok((next_input, value)) = parser.parse(input) {
            if predicate(&value) {
                return Ok((next_input, value));
            }
        }
        Err(input)
    }
}

pub fn either<'a, P1, P2, A>(parser1: P1, parser2: P2) -> impl Parser<'a, A>
where
    P1: Parser<'a, A>,
    P2: Parser<'a, A>,
{
    move |input| match parser1.parse(input) {
        ok @ Ok(_) => ok,
        Err(_) => parser2.parse(input),
    }
}

pub fn pair<'a, P1, P2, R1, R2>(parser1: P1, parser2: P2) -> impl Parser<'a, (R1, R2)>
where
    P1: Parser<'a, R1>,
    P2: Parser<'a, R2>,
{
    move |input| {
        parser1.parse(input).and_then(|(next_input, result1)| {
            parser2
                .parse(next_input)
                .map(|(last_input, result2)| (last_input, (result1, result2)))
        })
    }
}

pub fn left<'a, P1, P2, R1, R2>(parser1: P1, parser2: P2) -> impl Parser<'a, R1>
where
    P1: Parser<'a, R1>,
    P2: Parser<'a, R2>,
{
    map(pair(parser1, parser2), |(left, _right)| left)
}

pub fn right<'a, P1, P2, R1, R2>(parser1: P1, parser2: P2) -> impl Parser<'a, R2>
where
    P1: Parser<'a, R1>,
    P2: Parser<'a, R2>,
{
    map(pair(parser1, parser2), |(_left, right)| right)
}

pub fn opt<'a, P, A>(opt_parser: P) -> impl Parser<'a, Option<A>>
where
    P: Parser<'a, A>,
{
    move |input| match opt_parser.parse(input) {
        Ok((next_input, result)) => Ok((next_input, Some(result))),
        Err(_) => Ok((input, None)),
    }
}

pub fn delimited<'a, PNL, PNR, LN, RN, P, R>(
    lparser: PNL,
    mid: P,
    rparser: PNR,
) -> impl Parser<'a, R>
where
    PNL: Parser<'a, LN>,
    PNR: Parser<'a, RN>,
    P: Parser<'a, R>,
{
    move |input| {
        lparser.parse(input).and_then(|(next_input, _)| {
            mid.parse(next_input).and_then(|(last_input, result)| {
                rparser.parse(last_input).map(|(rest, _)| (rest, result))
            })
        })
    }
}

pub fn any_char(input: &str) -> Result<char> {
    input
        .chars()
        .next()
        .map_or_else(|| Err(input), |next| Ok((&input[next.len_utf8()..], next)))
}

pub fn whitespace_char<'a>() -> impl Parser<'a, char> {
    pred(any_char, |c| c.is_whitespace())
}

pub fn space1<'a>() -> impl Parser<'a, Vec<char>> {
    one_or_more(whitespace_char())
}

pub fn space0<'a>() -> impl Parser<'a, Vec<char>> {
    zero_or_more(whitespace_char())
}

pub fn whitespace_wrap<'a, P, A>(parser: P) -> impl Parser<'a, A>
where
    P: Parser<'a, A>,
{
    right(space0(), left(parser, space0()))
}

pub use whitespace_wrap as ws_eat;

/// Take the longest non-empty prefix made of bytes in `slice`.
pub fn is_a<'a>(slice: &'static [u8]) -> impl Parser<'a, &'a str> {
    move |input: &'a str| {
        let i = input
            .as_bytes()
            .iter()
            .take_while(|byte| slice.contains(byte))
            .count();
        if i == 0 {
            return Err(input);
        }
        let (b, a) = input.split_at(i);
        Ok((a, b))
    }
}

pub fn separated_list1<'a, P, A, S, Sep>(parser: P, separator: S) -> impl Parser<'a, Vec<A>>
where
    P: Parser<'a, A>,
    S: Parser<'a, Sep>,
{
    move |input| {
        let (mut input, first) = parser.parse(input)?;
        let mut result = vec![first];
        while let Ok((next_input, _)) = separator.parse(input) {
            match parser.parse(next_input) {
                Ok((rest, item)) => {
                    input = rest;
                    result.push(item);
                }
                Err(_) => break,
            }
        }
        Ok((input, result))
    }
}

const HEX_DIGITS: &[u8] = b"0123456789abcdefABCDEF";

/// A bare hexadecimal code point, as written in the data files: `1F600`.
pub fn hex_code_point<'a>() -> impl Parser<'a, CodePoint> {
    map_res(is_a(HEX_DIGITS), |digits: &str| {
        u32::from_str_radix(digits, 16)
            .ok()
            .filter(|cp| *cp <= crate::codepoints::MAX_CODE_POINT)
            .ok_or(())
    })
}

/// A code point with an optional `U+` or `0x` prefix.
pub fn prefixed_hex_code_point<'a>() -> impl Parser<'a, CodePoint> {
    right(
        opt(either(match_literal_anycase("U+"), match_literal_anycase("0x"))),
        hex_code_point(),
    )
}

/// `<start>..<end>`
pub fn code_point_range<'a>() -> impl Parser<'a, (CodePoint, CodePoint)> {
    pair(hex_code_point(), right(match_literal(".."), hex_code_point()))
}

/// Space separated code points: `1F468 200D 1F469`
pub fn code_point_list<'a>() -> impl Parser<'a, Vec<CodePoint>> {
    separated_list1(hex_code_point(), space1())
}
