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

//! The process-wide emoji data is shared state: every test runs in its own
//! process.

use std::{path::PathBuf, sync::Arc};

use emojidata::{
    conf::DATA_DIR_ENV, emoji_data, load_all, unload_all, DataConfig, ErrorKind, LogLevel,
    QualifiedType, StderrLogger,
};
use rusty_fork::rusty_fork_test;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

rusty_fork_test! {
    #[test]
    fn test_lifecycle_load_all() {
        assert_eq!(emoji_data().unwrap_err().kind, ErrorKind::InvalidArgument);

        let data = load_all(&DataConfig::with_data_dir(data_dir())).unwrap();
        assert!(data.is_loaded());
        assert!(Arc::ptr_eq(&data, &emoji_data().unwrap()));

        // Already loaded: the configuration is not looked at.
        let again = load_all(&DataConfig::with_data_dir("/nonexistent/emoji")).unwrap();
        assert!(Arc::ptr_eq(&data, &again));

        unload_all();
        assert_eq!(emoji_data().unwrap_err().kind, ErrorKind::InvalidArgument);
        unload_all();
        // Values handed out before unloading stay usable.
        assert_eq!(
            data.detect_qualified("😀").unwrap(),
            QualifiedType::FullyQualified
        );

        let reloaded = load_all(&DataConfig::with_data_dir(data_dir())).unwrap();
        assert!(!Arc::ptr_eq(&data, &reloaded));
        assert_eq!(reloaded.sequences().len(), data.sequences().len());
    }

    #[test]
    fn test_lifecycle_failed_load() {
        let err = load_all(&DataConfig::with_data_dir("/nonexistent/emoji")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io(std::io::ErrorKind::NotFound));
        assert!(emoji_data().is_err());
        assert!(load_all(&DataConfig::with_data_dir(data_dir())).is_ok());
    }

    #[test]
    fn test_lifecycle_data_dir_from_env() {
        std::env::set_var(DATA_DIR_ENV, data_dir());
        let conf = DataConfig::default();
        assert_eq!(conf.data_dir, data_dir());
        let data = load_all(&conf).unwrap();
        assert_eq!(data.characters().len(), 166);
    }

    #[test]
    fn test_lifecycle_shared_between_threads() {
        load_all(&DataConfig::with_data_dir(data_dir())).unwrap();
        let handles = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let data = emoji_data().unwrap();
                    let text = "👍🏽 ".repeat(i + 1);
                    data.find_all(&text).len()
                })
            })
            .collect::<Vec<_>>();
        let counts = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_lifecycle_logging() {
        let tmp_dir = tempfile::TempDir::new().unwrap();
        let log_path = tmp_dir.path().join("emojidata.log");
        let logger = StderrLogger::with_file(LogLevel::DEBUG, &log_path).unwrap();
        logger.init().unwrap();
        assert_eq!(logger.log_dest(), Some(log_path.clone()));
        assert_eq!(StderrLogger::new(LogLevel::ERROR).init().unwrap_err().kind, ErrorKind::Bug);

        load_all(&DataConfig::with_data_dir(data_dir())).unwrap();
        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(
            contents.contains("loaded 166 emoji characters and 76 emoji sequences"),
            "{contents}"
        );
        assert!(contents.contains("[DEBUG]"), "{contents}");

        logger.set_log_level(LogLevel::OFF);
        unload_all();
        load_all(&DataConfig::with_data_dir(data_dir())).unwrap();
        assert_eq!(std::fs::read_to_string(&log_path).unwrap(), contents);
    }
}
