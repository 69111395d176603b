#![no_main]
use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;

extern crate emojidata;

use emojidata::{loader::DataSource, EmojiData, SequenceSources, Sources};

fn data() -> &'static EmojiData {
    static DATA: OnceLock<EmojiData> = OnceLock::new();
    DATA.get_or_init(|| {
        let mut data = EmojiData::new(Sources {
            characters: DataSource::inline(
                "emoji-data.txt",
                include_str!("../../emojidata/tests/data/emoji-data.txt"),
            ),
            sequences: SequenceSources {
                variation: vec![DataSource::inline(
                    "emoji-variation-sequences.txt",
                    include_str!("../../emojidata/tests/data/emoji-variation-sequences.txt"),
                )],
                zwj: vec![DataSource::inline(
                    "emoji-zwj-sequences.txt",
                    include_str!("../../emojidata/tests/data/emoji-zwj-sequences.txt"),
                )],
                sequences: vec![DataSource::inline(
                    "emoji-sequences.txt",
                    include_str!("../../emojidata/tests/data/emoji-sequences.txt"),
                )],
            },
        });
        data.load().unwrap();
        data
    })
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let emoji = self::data();
    let mut last_end = 0;
    for m in emoji.find(text) {
        assert!(m.start >= last_end);
        assert_eq!(&text[m.byte_range()], m.record.as_str());
        last_end = m.end;
    }
    let _ = emoji.detect_qualified(text);
    for i in 0..text.chars().count().min(16) {
        let _ = emoji.is_qualified_emoji_character(text, i);
    }
});
