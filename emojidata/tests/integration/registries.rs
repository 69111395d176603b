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

use emojidata::{
    codepoints::code_points_of, sequence::VARIATION_SEQUENCE_TYPE, EmojiProperties, ErrorKind,
    Production, Variation,
};

use crate::{hex, load};

#[test]
fn test_registries_sizes() {
    let data = load();
    // 165 code points in emoji-data.txt, plus U+FE0E.
    assert_eq!(data.characters().len(), 166);
    // 34 variation, 9 ZWJ and 33 other sequences. The emoji style
    // variation sequences repeated in emoji-sequences.txt count once.
    assert_eq!(data.sequences().len(), 76);
}

#[test]
fn test_registries_load_is_idempotent() {
    let mut data = load();
    let characters = data.characters().len();
    let sequences = data.sequences().len();
    data.load().unwrap();
    assert_eq!(data.characters().len(), characters);
    assert_eq!(data.sequences().len(), sequences);

    data.unload();
    assert!(!data.is_loaded());
    assert!(data.sequences().is_empty());
    assert_eq!(
        data.detect_qualified("😀").unwrap_err().kind,
        ErrorKind::InvalidArgument
    );
    data.load().unwrap();
    assert_eq!(data.characters().len(), characters);
    assert_eq!(data.sequences().len(), sequences);
}

#[test]
fn test_registries_character_properties() {
    let data = load();
    let characters = data.characters();

    let thumbs_up = characters.get_by_char('👍').unwrap();
    assert_eq!(
        thumbs_up.properties(),
        EmojiProperties::EMOJI
            | EmojiProperties::EPRES
            | EmojiProperties::EBASE
            | EmojiProperties::EXTPICT
    );
    assert_eq!(thumbs_up.version(), "E0.6");
    assert_eq!(thumbs_up.description(), "thumbs up");

    // Properties of a range apply to every member.
    let girl = characters.get_by_hex("1F467").unwrap();
    assert!(girl.has_property(EmojiProperties::EBASE));
    assert_eq!(girl.description(), "boy..woman");

    let zwj = characters.get(0x200D).unwrap();
    assert_eq!(zwj.properties(), EmojiProperties::ECOMP);

    let vs15 = characters.get(0xFE0E).unwrap();
    assert!(vs15.properties().is_empty());

    assert!(!characters.is_emoji_code_point(0x23));
    assert!(characters.is_emoji_code_point(0x1F600));
    assert_eq!(
        characters.get_by_char('a').unwrap_err().kind,
        ErrorKind::NotFound
    );
}

#[test]
fn test_registries_emoji_character_completeness() {
    let data = load();
    let patterns = data.patterns().unwrap();
    for record in data.characters() {
        let s = record.as_char().unwrap().to_string();
        assert_eq!(
            patterns.is_emoji_character(&s),
            record.has_property(EmojiProperties::EMOJI),
            "{}",
            record.hex()
        );
        assert_eq!(
            patterns.is_emoji_modifier(&s),
            record.has_property(EmojiProperties::EMOD),
            "{}",
            record.hex()
        );
        assert_eq!(
            patterns.is_default_emoji_presentation_character(&s),
            record.has_property(EmojiProperties::EPRES),
            "{}",
            record.hex()
        );
    }
    for s in ["a", "\u{2639}", "😀😀", ""] {
        assert!(!patterns.is_emoji_character(s), "{s:?}");
    }
}

#[test]
fn test_registries_sequence_round_trip() {
    let data = load();
    let sequences = data.sequences();
    for record in sequences {
        assert_eq!(sequences.get(record.as_str()).unwrap(), record);
        assert_eq!(sequences.get_by_hex(&record.hex()).unwrap(), record);
        assert_eq!(sequences.get_by_code_points(record.code_points()).unwrap(), record);
        assert_eq!(code_points_of(record.as_str()).as_slice(), record.code_points());
        let characters = record.characters(data.characters()).unwrap();
        assert_eq!(characters.len(), record.len());
    }
}

#[test]
fn test_registries_sequences_follow_the_grammar() {
    let data = load();
    let patterns = data.patterns().unwrap();
    for record in data.sequences() {
        let s = record.as_str();
        let production = match (record.type_tag(), record.variation()) {
            (VARIATION_SEQUENCE_TYPE, Variation::Text) => Production::TextPresentationSequence,
            (VARIATION_SEQUENCE_TYPE, _) => Production::EmojiPresentationSequence,
            ("Basic_Emoji", _) => Production::EmojiCoreSequence,
            ("Emoji_Keycap_Sequence", _) => Production::EmojiKeycapSequence,
            ("RGI_Emoji_Flag_Sequence", _) => Production::EmojiFlagSequence,
            ("RGI_Emoji_Tag_Sequence", _) => Production::EmojiTagSequence,
            ("RGI_Emoji_Modifier_Sequence", _) => Production::EmojiModifierSequence,
            ("RGI_Emoji_ZWJ_Sequence", _) => Production::EmojiZwjSequence,
            (other, _) => panic!("unexpected type field {other}"),
        };
        assert!(patterns.is_match(production, s), "{} {}", record.hex(), production);
        if production != Production::TextPresentationSequence {
            assert!(patterns.is_emoji_sequence(s), "{}", record.hex());
        }
    }
}

#[test]
fn test_registries_first_writer_wins() {
    let data = load();
    let smiling = data.sequences().get(&hex("263A FE0F")).unwrap();
    assert_eq!(smiling.type_tag(), VARIATION_SEQUENCE_TYPE);
    assert_eq!(smiling.variation(), Variation::Emoji);
    assert_eq!(smiling.version(), "1.1");
    assert_eq!(smiling.description(), "WHITE SMILING FACE");

    let england = data
        .sequences()
        .get_by_hex("1F3F4 E0067 E0062 E0065 E006E E0067 E007F")
        .unwrap();
    assert_eq!(england.type_tag(), "RGI_Emoji_Tag_Sequence");
    assert_eq!(england.description(), "flag: England");
    assert_eq!(england.version(), "E5.0");
}
