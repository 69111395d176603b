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

//! The loaded emoji data: both registries, the compiled grammar and the
//! sequence scanner.
//!
//! [`EmojiData`] values are independent of each other. [`load_all`],
//! [`unload_all`] and [`emoji_data`] manage one shared, process-wide value.

use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    character::CharacterRegistry,
    conf::{DataConfig, Sources},
    error::{Error, ErrorKind, Result},
    grammar::{EmojiPatterns, Grammar},
    qualified::{self, QualifiedType},
    sequence::{Find, SequenceMatch, SequenceRegistry},
};

#[derive(Clone, Debug, Default)]
pub struct EmojiData {
    sources: Sources,
    characters: CharacterRegistry,
    grammar: Grammar,
    sequences: SequenceRegistry,
}

impl EmojiData {
    /// An unloaded value that will read `sources` on [`EmojiData::load`].
    pub fn new(sources: Sources) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    pub fn from_config(conf: &DataConfig) -> Self {
        Self::new(conf.sources())
    }

    /// Load the character registry, compile the grammar and load the
    /// sequence registry, in that order. Does nothing if already loaded. If
    /// any step fails everything is unloaded again.
    pub fn load(&mut self) -> Result<()> {
        if self.is_loaded() {
            return Ok(());
        }
        let ret = self
            .characters
            .initialize(&self.sources.characters)
            .and_then(|()| self.grammar.initialize(&self.characters))
            .and_then(|()| {
                self.sequences
                    .initialize(&self.characters, &self.sources.sequences)
            });
        if let Err(err) = ret {
            log::error!("could not load emoji data: {}", err.summary);
            self.unload();
            return Err(err);
        }
        log::debug!(
            "loaded {} emoji characters and {} emoji sequences",
            self.characters.len(),
            self.sequences.len()
        );
        Ok(())
    }

    /// Release everything in reverse load order.
    pub fn unload(&mut self) {
        self.sequences.release();
        self.grammar.release();
        self.characters.release();
    }

    pub fn is_loaded(&self) -> bool {
        self.characters.is_initialized()
            && self.grammar.is_initialized()
            && self.sequences.is_initialized()
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    pub fn characters(&self) -> &CharacterRegistry {
        &self.characters
    }

    pub fn patterns(&self) -> Result<&EmojiPatterns> {
        self.grammar.patterns()
    }

    pub fn sequences(&self) -> &SequenceRegistry {
        &self.sequences
    }

    pub fn detect_qualified(&self, s: &str) -> Result<QualifiedType> {
        qualified::detect_qualified(&self.characters, self.patterns()?, s)
    }

    pub fn is_qualified_emoji_character(&self, s: &str, i: usize) -> Result<bool> {
        Ok(qualified::is_qualified_emoji_character(
            self.patterns()?,
            s,
            i,
        ))
    }

    pub fn find<'r, 'h>(&'r self, text: &'h str) -> Find<'r, 'h> {
        self.sequences.find(text)
    }

    pub fn find_all<'r>(&'r self, text: &str) -> Vec<SequenceMatch<'r>> {
        self.sequences.find_all(text)
    }
}

static EMOJI_DATA: RwLock<Option<Arc<EmojiData>>> = RwLock::new(None);

/// Load the process-wide emoji data from `conf`. Does nothing and returns the
/// loaded value if it is already loaded.
pub fn load_all(conf: &DataConfig) -> Result<Arc<EmojiData>> {
    let mut lck = EMOJI_DATA.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(data) = lck.as_ref() {
        log::trace!("emoji data already loaded");
        return Ok(data.clone());
    }
    let mut data = EmojiData::from_config(conf);
    data.load()?;
    let data = Arc::new(data);
    *lck = Some(data.clone());
    Ok(data)
}

/// Release the process-wide emoji data. Values returned by [`emoji_data`]
/// before the call stay valid.
pub fn unload_all() {
    let mut lck = EMOJI_DATA.write().unwrap_or_else(PoisonError::into_inner);
    if lck.take().is_some() {
        log::trace!("unloaded emoji data");
    }
}

/// The process-wide emoji data loaded by [`load_all`].
pub fn emoji_data() -> Result<Arc<EmojiData>> {
    EMOJI_DATA
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or_else(|| {
            Error::new("Emoji data is not loaded, call load_all() first.")
                .set_kind(ErrorKind::InvalidArgument)
        })
}
