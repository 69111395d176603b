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

#![deny(
    rustdoc::redundant_explicit_links,
    unsafe_op_in_unsafe_fn,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::rc_buffer,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
    clippy::borrow_as_ptr,
    clippy::case_sensitive_file_extension_comparisons,
    clippy::unused_enumerate_index,
    clippy::unnecessary_fallible_conversions,
    clippy::struct_field_names,
    clippy::manual_hash_one,
    clippy::into_iter_without_iter,
)]
#![allow(
    clippy::option_if_let_else,
    clippy::missing_const_for_fn,
    clippy::significant_drop_tightening,
    clippy::multiple_crate_versions,
    clippy::significant_drop_in_scrutinee,
    clippy::cognitive_complexity
)]
#![doc = include_str!("../README.md")]
//!
//! ## Description
//!
//! A crate that models the Unicode emoji data files of UTS #51:
//! - Read the property and sequence data files (see module [`loader`])
//! - Look up emoji characters and their properties (see module
//!   [`character`])
//! - Look up registered emoji sequences and find them in text (see module
//!   [`sequence`])
//! - Test strings against the productions of the emoji grammar (see module
//!   [`grammar`])
//! - Classify sequences as fully-qualified, minimally-qualified or
//!   unqualified (see module [`qualified`])
//!
//! Other exports are
//! - Data file locations (see module [`conf`])
//! - Records of the `emoji-test.txt` conformance file (see module
//!   [`conformance`])
//! - A `debug` macro that works like `std::dbg` but for multiple threads. (see
//!   [`debug` macro](debug!))

#[macro_use]
pub mod dbg {

    #[allow(clippy::redundant_closure)]
    #[macro_export]
    macro_rules! debug {
        ($val:literal) => {
            {
                if cfg!(feature="debug-tracing") {
                    $crate::log::debug!($val);
                }
                $val
            }
        };
        ($val:expr) => {
            if cfg!(feature="debug-tracing") {
                let stringify = stringify!($val);
                // Use of `match` here is intentional because it affects the lifetimes
                // of temporaries - https://stackoverflow.com/a/48732525/1063961
                match $val {
                    tmp => {
                        $crate::log::debug!("{} = {:?}", stringify, tmp);
                        tmp
                    }
                }
            } else {
                $val
            }
        };
        ($fmt:literal, $($arg:tt)*) => {
            if cfg!(feature="debug-tracing") {
                $crate::log::debug!($fmt, $($arg)*);
            }
        };
    }
}

pub use utils::logging::{LogLevel, StderrLogger};

pub mod error;
pub use error::*;
pub mod codepoints;
pub mod loader;
pub mod character;
pub use character::{CharacterRecord, CharacterRegistry, EmojiProperties};
pub mod grammar;
pub use grammar::{EmojiPatterns, Grammar, Production};
pub mod scanner;
pub mod sequence;
pub use sequence::{SequenceMatch, SequenceRecord, SequenceRegistry, SequenceSources, Variation};
pub mod qualified;
pub use qualified::{detect_qualified, is_qualified_emoji_character, QualifiedType};
pub mod conf;
pub use conf::{DataConfig, Sources};
pub mod conformance;
pub mod emoji_data;
pub use emoji_data::{emoji_data, load_all, unload_all, EmojiData};

#[macro_use]
pub mod utils;

#[macro_use]
extern crate serde_derive;
pub extern crate log;

#[macro_use]
extern crate bitflags;
pub extern crate aho_corasick;
pub extern crate indexmap;
pub extern crate smallvec;
