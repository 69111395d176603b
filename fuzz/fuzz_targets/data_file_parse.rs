#![no_main]
use libfuzzer_sys::fuzz_target;

extern crate emojidata;

use emojidata::{conformance::read_conformance, loader::DataSource, CharacterRegistry};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let source = DataSource::Inline {
        name: "fuzz".into(),
        text: text.to_string().into(),
    };
    let mut characters = CharacterRegistry::new();
    if characters.initialize(&source).is_ok() {
        assert!(characters.is_initialized());
    }
    let _ = read_conformance(&source);
});
