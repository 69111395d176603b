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

//! The emoji grammar of UTS #51 ED-1 through ED-17, compiled from the
//! character properties.
//!
//! ```text
//! emoji_core_sequence := emoji_character | emoji_presentation_sequence
//!                      | emoji_keycap_sequence | emoji_modifier_sequence
//!                      | emoji_flag_sequence
//! emoji_zwj_element   := emoji_core_sequence | emoji_tag_sequence
//! emoji_zwj_sequence  := emoji_zwj_element ( ZWJ emoji_zwj_element )+
//! emoji_sequence      := emoji_core_sequence | emoji_zwj_sequence
//!                      | emoji_tag_sequence
//! ```
//!
//! See <https://www.unicode.org/reports/tr51/#Definitions>.

use std::{fmt, sync::Arc};

pub mod pattern;

pub use pattern::{CodePointSet, Fragment, Pattern, Positions};

use crate::{
    character::{CharacterRegistry, EmojiProperties},
    codepoints::{
        code_points_of, CodePoint, CANCEL_TAG, COMBINING_ENCLOSING_KEYCAP,
        EMOJI_PRESENTATION_SELECTOR, KEYCAP_BASES, REGIONAL_INDICATOR_FIRST,
        REGIONAL_INDICATOR_LAST, TAG_SPEC_FIRST, TAG_SPEC_LAST, TEXT_PRESENTATION_SELECTOR, ZWJ,
    },
    error::{Error, Result},
};

/// Named productions of the emoji grammar, in dependency order: every
/// production only refers to productions declared before it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Production {
    EmojiCharacter,
    ExtendedPictographicCharacter,
    EmojiComponent,
    DefaultEmojiPresentationCharacter,
    DefaultTextPresentationCharacter,
    TextPresentationSelector,
    EmojiPresentationSelector,
    TextPresentationSequence,
    EmojiPresentationSequence,
    EmojiModifier,
    EmojiModifierBase,
    EmojiModifierSequence,
    RegionalIndicator,
    EmojiFlagSequence,
    TagBase,
    TagSpec,
    TagTerm,
    EmojiTagSequence,
    EmojiKeycapSequence,
    EmojiCoreSequence,
    EmojiZwjElement,
    EmojiZwjSequence,
    EmojiSequence,
}

impl Production {
    pub const ALL: [Self; 23] = [
        Self::EmojiCharacter,
        Self::ExtendedPictographicCharacter,
        Self::EmojiComponent,
        Self::DefaultEmojiPresentationCharacter,
        Self::DefaultTextPresentationCharacter,
        Self::TextPresentationSelector,
        Self::EmojiPresentationSelector,
        Self::TextPresentationSequence,
        Self::EmojiPresentationSequence,
        Self::EmojiModifier,
        Self::EmojiModifierBase,
        Self::EmojiModifierSequence,
        Self::RegionalIndicator,
        Self::EmojiFlagSequence,
        Self::TagBase,
        Self::TagSpec,
        Self::TagTerm,
        Self::EmojiTagSequence,
        Self::EmojiKeycapSequence,
        Self::EmojiCoreSequence,
        Self::EmojiZwjElement,
        Self::EmojiZwjSequence,
        Self::EmojiSequence,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::EmojiCharacter => "emoji_character",
            Self::ExtendedPictographicCharacter => "extended_pictographic_character",
            Self::EmojiComponent => "emoji_component",
            Self::DefaultEmojiPresentationCharacter => "default_emoji_presentation_character",
            Self::DefaultTextPresentationCharacter => "default_text_presentation_character",
            Self::TextPresentationSelector => "text_presentation_selector",
            Self::EmojiPresentationSelector => "emoji_presentation_selector",
            Self::TextPresentationSequence => "text_presentation_sequence",
            Self::EmojiPresentationSequence => "emoji_presentation_sequence",
            Self::EmojiModifier => "emoji_modifier",
            Self::EmojiModifierBase => "emoji_modifier_base",
            Self::EmojiModifierSequence => "emoji_modifier_sequence",
            Self::RegionalIndicator => "regional_indicator",
            Self::EmojiFlagSequence => "emoji_flag_sequence",
            Self::TagBase => "tag_base",
            Self::TagSpec => "tag_spec",
            Self::TagTerm => "tag_term",
            Self::EmojiTagSequence => "emoji_tag_sequence",
            Self::EmojiKeycapSequence => "emoji_keycap_sequence",
            Self::EmojiCoreSequence => "emoji_core_sequence",
            Self::EmojiZwjElement => "emoji_zwj_element",
            Self::EmojiZwjSequence => "emoji_zwj_sequence",
            Self::EmojiSequence => "emoji_sequence",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

/// Every production of the grammar, compiled against one
/// [`CharacterRegistry`].
#[derive(Clone, Debug)]
pub struct EmojiPatterns {
    /// Indexed by `Production as usize`.
    fragments: Vec<Arc<Fragment>>,
}

macro_rules! predicates {
    ($($(#[$attr:meta])* $fn_name:ident => $production:ident),*$(,)?) => {
        $(
            $(#[$attr])*
            pub fn $fn_name(&self, s: &str) -> bool {
                self.is_match(Production::$production, s)
            }
        )*
    };
}

impl EmojiPatterns {
    /// Compile every production, in [`Production::ALL`] order.
    pub fn compile(characters: &CharacterRegistry) -> Self {
        let mut ret = Self {
            fragments: Vec::with_capacity(Production::ALL.len()),
        };
        for production in Production::ALL {
            let pattern = ret.build(production, characters);
            ret.fragments.push(Arc::new(Fragment {
                production,
                pattern,
            }));
        }
        log::trace!("compiled {} emoji grammar productions", ret.fragments.len());
        ret
    }

    fn named(&self, production: Production) -> Pattern {
        Pattern::Named(self.fragments[production as usize].clone())
    }

    fn build(&self, production: Production, characters: &CharacterRegistry) -> Pattern {
        use Production::*;

        match production {
            EmojiCharacter => Pattern::class(characters.code_points_with(EmojiProperties::EMOJI)),
            ExtendedPictographicCharacter => {
                Pattern::class(characters.code_points_with(EmojiProperties::EXTPICT))
            }
            EmojiComponent => Pattern::class(characters.code_points_with(EmojiProperties::ECOMP)),
            DefaultEmojiPresentationCharacter => {
                Pattern::class(characters.code_points_with(EmojiProperties::EPRES))
            }
            DefaultTextPresentationCharacter => {
                Pattern::class(characters.code_points_without(EmojiProperties::EPRES))
            }
            TextPresentationSelector => Pattern::single(TEXT_PRESENTATION_SELECTOR),
            EmojiPresentationSelector => Pattern::single(EMOJI_PRESENTATION_SELECTOR),
            TextPresentationSequence => {
                Pattern::Seq(vec![self.named(EmojiCharacter), self.named(TextPresentationSelector)])
            }
            EmojiPresentationSequence => Pattern::Seq(vec![
                self.named(EmojiCharacter),
                self.named(EmojiPresentationSelector),
            ]),
            EmojiModifier => Pattern::class(characters.code_points_with(EmojiProperties::EMOD)),
            EmojiModifierBase => {
                Pattern::class(characters.code_points_with(EmojiProperties::EBASE))
            }
            EmojiModifierSequence => {
                Pattern::Seq(vec![self.named(EmojiModifierBase), self.named(EmojiModifier)])
            }
            RegionalIndicator => Pattern::range(REGIONAL_INDICATOR_FIRST, REGIONAL_INDICATOR_LAST),
            EmojiFlagSequence => {
                Pattern::Seq(vec![self.named(RegionalIndicator), self.named(RegionalIndicator)])
            }
            TagBase => Pattern::Alt(vec![
                self.named(EmojiCharacter),
                self.named(EmojiModifierSequence),
                self.named(EmojiPresentationSequence),
            ]),
            TagSpec => Pattern::range(TAG_SPEC_FIRST, TAG_SPEC_LAST).one_or_more(),
            TagTerm => Pattern::single(CANCEL_TAG),
            EmojiTagSequence => Pattern::Seq(vec![
                self.named(TagBase),
                self.named(TagSpec),
                self.named(TagTerm),
            ]),
            EmojiKeycapSequence => Pattern::Seq(vec![
                Pattern::class(KEYCAP_BASES.iter().copied()),
                Pattern::single(EMOJI_PRESENTATION_SELECTOR),
                Pattern::single(COMBINING_ENCLOSING_KEYCAP),
            ]),
            EmojiCoreSequence => Pattern::Alt(vec![
                self.named(EmojiCharacter),
                self.named(EmojiPresentationSequence),
                self.named(EmojiKeycapSequence),
                self.named(EmojiModifierSequence),
                self.named(EmojiFlagSequence),
            ]),
            EmojiZwjElement => {
                Pattern::Alt(vec![self.named(EmojiCoreSequence), self.named(EmojiTagSequence)])
            }
            EmojiZwjSequence => Pattern::Seq(vec![
                self.named(EmojiZwjElement),
                Pattern::Seq(vec![Pattern::single(ZWJ), self.named(EmojiZwjElement)])
                    .one_or_more(),
            ]),
            EmojiSequence => Pattern::Alt(vec![
                self.named(EmojiCoreSequence),
                self.named(EmojiZwjSequence),
                self.named(EmojiTagSequence),
            ]),
        }
    }

    pub fn get(&self, production: Production) -> &Fragment {
        &self.fragments[production as usize]
    }

    pub fn pattern(&self, production: Production) -> &Pattern {
        &self.get(production).pattern
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> + '_ {
        self.fragments.iter().map(|f| f.as_ref())
    }

    /// Whether all of `s` is one match of `production`.
    pub fn is_match(&self, production: Production, s: &str) -> bool {
        self.pattern(production).is_full_match(&code_points_of(s))
    }

    /// Whether `code_points[start..]` begins with a match of `production`.
    pub fn matches_at(&self, production: Production, code_points: &[CodePoint], start: usize) -> bool {
        self.pattern(production).matches_at(code_points, start)
    }

    pub fn longest_match_at(
        &self,
        production: Production,
        code_points: &[CodePoint],
        start: usize,
    ) -> Option<usize> {
        self.pattern(production).longest_match_at(code_points, start)
    }

    predicates! {
        is_emoji_character => EmojiCharacter,
        is_extended_pictographic_character => ExtendedPictographicCharacter,
        is_emoji_component => EmojiComponent,
        is_default_emoji_presentation_character => DefaultEmojiPresentationCharacter,
        is_default_text_presentation_character => DefaultTextPresentationCharacter,
        is_text_presentation_selector => TextPresentationSelector,
        is_emoji_presentation_selector => EmojiPresentationSelector,
        /// An emoji character followed by VS15.
        is_text_presentation_sequence => TextPresentationSequence,
        /// An emoji character followed by VS16.
        is_emoji_presentation_sequence => EmojiPresentationSequence,
        is_emoji_modifier => EmojiModifier,
        is_emoji_modifier_base => EmojiModifierBase,
        is_emoji_modifier_sequence => EmojiModifierSequence,
        is_regional_indicator => RegionalIndicator,
        /// Two regional indicators. Whether the pair names a region is not
        /// checked.
        is_emoji_flag_sequence => EmojiFlagSequence,
        is_tag_base => TagBase,
        /// One or more of U+E0020..U+E007E.
        is_tag_spec => TagSpec,
        is_tag_term => TagTerm,
        is_emoji_tag_sequence => EmojiTagSequence,
        is_emoji_keycap_sequence => EmojiKeycapSequence,
        is_emoji_core_sequence => EmojiCoreSequence,
        is_emoji_zwj_element => EmojiZwjElement,
        is_emoji_zwj_sequence => EmojiZwjSequence,
        is_emoji_sequence => EmojiSequence,
    }
}

impl<'a> IntoIterator for &'a EmojiPatterns {
    type Item = &'a Arc<Fragment>;
    type IntoIter = std::slice::Iter<'a, Arc<Fragment>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

/// Lifecycle wrapper around [`EmojiPatterns`].
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    patterns: Option<EmojiPatterns>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the productions. Does nothing if already compiled. The
    /// character registry must be initialized.
    pub fn initialize(&mut self, characters: &CharacterRegistry) -> Result<()> {
        if self.patterns.is_some() {
            log::trace!("emoji grammar already compiled");
            return Ok(());
        }
        if !characters.is_initialized() {
            return Err(Error::invalid_argument(
                "The emoji grammar requires an initialized character registry.",
            ));
        }
        self.patterns = Some(EmojiPatterns::compile(characters));
        Ok(())
    }

    pub fn release(&mut self) {
        if self.patterns.take().is_some() {
            log::trace!("released emoji grammar");
        }
    }

    pub const fn is_initialized(&self) -> bool {
        self.patterns.is_some()
    }

    pub fn patterns(&self) -> Result<&EmojiPatterns> {
        self.patterns
            .as_ref()
            .ok_or_else(|| Error::invalid_argument("The emoji grammar is not compiled."))
    }
}
