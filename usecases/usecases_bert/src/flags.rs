//! Pattern Option Module
//!
//! Provides the fixed mapping between BERT regex option atoms and pattern
//! flag bits. The table order is the order options are written on encode.

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

use entities_data_handling::{PatternFlags, Term};

/// Option atom name for each flag, in wire order
pub const OPTION_TABLE: [(&str, PatternFlags); 4] = [
    ("extended", PatternFlags::EXTENDED),
    ("caseless", PatternFlags::CASELESS),
    ("multiline", PatternFlags::MULTILINE),
    ("dotall", PatternFlags::DOTALL),
];

/// Flag bit for an option atom name
pub fn flag_for_option(name: &str) -> Option<PatternFlags> {
    OPTION_TABLE
        .iter()
        .find(|(option, _)| *option == name)
        .map(|&(_, flag)| flag)
}

/// Collect flags from option terms; terms that are not known option atoms are ignored
pub fn options_to_flags<'a>(options: impl IntoIterator<Item = &'a Term>) -> PatternFlags {
    options
        .into_iter()
        .filter_map(Term::as_atom)
        .filter_map(flag_for_option)
        .fold(PatternFlags::EMPTY, |flags, flag| flags | flag)
}

/// Option atoms for the set flags, in table order
pub fn flags_to_options(flags: PatternFlags) -> Vec<Term> {
    OPTION_TABLE
        .iter()
        .filter(|(_, flag)| flags.contains(*flag))
        .map(|(option, _)| Term::atom(*option))
        .collect()
}
