//! Pattern Module
//!
//! Provides compiled regular expressions that remember their source text and
//! the option flags they were compiled with, so they can be sent back over
//! the wire unchanged.
//!
//! Matching is done by the Rust `regex` crate. Option flags map to builder
//! settings:
//! - `EXTENDED`: whitespace and `#` comments in the pattern are ignored
//! - `CASELESS`: case-insensitive matching
//! - `MULTILINE`: `^` and `$` match at line boundaries
//! - `DOTALL`: `.` matches newline

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Ericsson AB 1996-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use regex::{Regex, RegexBuilder};

/// Option flag set for a compiled pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternFlags(u8);

impl PatternFlags {
    pub const EMPTY: PatternFlags = PatternFlags(0);
    pub const EXTENDED: PatternFlags = PatternFlags(1);
    pub const CASELESS: PatternFlags = PatternFlags(1 << 1);
    pub const MULTILINE: PatternFlags = PatternFlags(1 << 2);
    pub const DOTALL: PatternFlags = PatternFlags(1 << 3);

    /// Raw bit representation
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Flag set from raw bits; unknown bits are dropped
    pub fn from_bits_truncate(bits: u8) -> Self {
        PatternFlags(bits & 0b1111)
    }

    pub fn contains(self, other: PatternFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: PatternFlags) {
        self.0 |= other.0;
    }
}

impl BitOr for PatternFlags {
    type Output = PatternFlags;

    fn bitor(self, rhs: PatternFlags) -> PatternFlags {
        PatternFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PatternFlags {
    fn bitor_assign(&mut self, rhs: PatternFlags) {
        self.insert(rhs);
    }
}

/// Compiled pattern with its source and flags
#[derive(Clone)]
pub struct Pattern {
    source: String,
    flags: PatternFlags,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern
    ///
    /// # Arguments
    /// * `source` - Pattern source text
    /// * `flags` - Option flags
    ///
    /// # Returns
    /// * `Ok(Pattern)` - Compiled pattern
    /// * `Err(regex::Error)` - The source is not a valid pattern
    pub fn new(source: impl Into<String>, flags: PatternFlags) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = RegexBuilder::new(&source)
            .ignore_whitespace(flags.contains(PatternFlags::EXTENDED))
            .case_insensitive(flags.contains(PatternFlags::CASELESS))
            .multi_line(flags.contains(PatternFlags::MULTILINE))
            .dot_matches_new_line(flags.contains(PatternFlags::DOTALL))
            .build()?;
        Ok(Self {
            source,
            flags,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .finish()
    }
}

// Identity is (source, flags); the compiled automaton is derived from them.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.flags.cmp(&other.flags))
    }
}
