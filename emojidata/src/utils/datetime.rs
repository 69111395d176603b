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

//! Timestamps for log lines.

use std::{
    borrow::Cow,
    ffi::{CStr, CString},
    time::{SystemTime, UNIX_EPOCH},
};

pub type UnixTimestamp = u64;

pub mod formats {
    /// `<date> <time>`
    pub const RFC3339_DATETIME_AND_SPACE: &str = "%Y-%m-%d %H:%M:%S\0";
    pub const RFC3339_DATE: &str = "%Y-%m-%d\0";
}

use formats as fmt;

extern "C" {
    fn strftime(
        s: *mut std::os::raw::c_char,
        max: libc::size_t,
        format: *const std::os::raw::c_char,
        tm: *const libc::tm,
    ) -> libc::size_t;

    fn gmtime_r(timep: *const libc::time_t, tm: *mut libc::tm) -> *mut libc::tm;
}

pub fn now() -> UnixTimestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Format a UNIX epoch timestamp in UTC with the `strftime` format `fmt`,
/// [`formats::RFC3339_DATETIME_AND_SPACE`] if `None`.
pub fn timestamp_to_string_utc(timestamp: UnixTimestamp, fmt: Option<&str>) -> String {
    let mut new_tm: libc::tm = unsafe { std::mem::zeroed() };
    let i: libc::time_t = timestamp.try_into().unwrap_or(0);
    if unsafe { gmtime_r(std::ptr::addr_of!(i), std::ptr::addr_of_mut!(new_tm)) }.is_null() {
        return String::new();
    }
    let format: Cow<'_, CStr> = if let Some(cs) = fmt
        .map(str::as_bytes)
        .map(CStr::from_bytes_with_nul)
        .and_then(|res| res.ok())
    {
        Cow::from(cs)
    } else if let Some(cstring) = fmt
        .map(str::as_bytes)
        .map(CString::new)
        .and_then(|res| res.ok())
    {
        Cow::from(cstring)
    } else {
        unsafe { CStr::from_bytes_with_nul_unchecked(fmt::RFC3339_DATETIME_AND_SPACE.as_bytes()) }
            .into()
    };

    let mut vec: [u8; 256] = [0; 256];
    let ret = unsafe {
        strftime(
            vec.as_mut_ptr().cast(),
            vec.len(),
            format.as_ptr(),
            std::ptr::addr_of!(new_tm),
        )
    };
    String::from_utf8_lossy(&vec[0..ret]).into_owned()
}
