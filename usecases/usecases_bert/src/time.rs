//! Time Conversion Module
//!
//! Provides the conversion between UTC timestamps and the BERT
//! `(megaseconds, seconds, microseconds)` triple.
//!
//! `megaseconds * 1_000_000 + seconds` is the Unix second count. Splitting
//! uses floor division, so instants before the epoch have negative
//! megaseconds and seconds in `0..1_000_000`.

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

use chrono::{DateTime, Utc};

use crate::error::BertError;

const MEGA: i64 = 1_000_000;

/// Timestamp split into its BERT fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub megaseconds: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

/// Split a timestamp into BERT fields
pub fn utc_to_parts(time: &DateTime<Utc>) -> TimeParts {
    let total = time.timestamp();
    // A leap second reports 1_000_000 or more; clamp it into the last microsecond
    let microseconds = i64::from(time.timestamp_subsec_micros()).min(MEGA - 1);
    TimeParts {
        megaseconds: total.div_euclid(MEGA),
        seconds: total.rem_euclid(MEGA),
        microseconds,
    }
}

/// Rebuild a timestamp from BERT fields
///
/// # Returns
/// * `Ok(DateTime<Utc>)` - The instant
/// * `Err(BertError::InvalidTimestamp)` - Microseconds outside `0..1_000_000`
///   or an instant chrono cannot represent
pub fn utc_from_parts(parts: TimeParts) -> Result<DateTime<Utc>, BertError> {
    let invalid = || BertError::InvalidTimestamp {
        megaseconds: parts.megaseconds,
        seconds: parts.seconds,
        microseconds: parts.microseconds,
    };

    if !(0..MEGA).contains(&parts.microseconds) {
        return Err(invalid());
    }
    let total = parts
        .megaseconds
        .checked_mul(MEGA)
        .and_then(|mega| mega.checked_add(parts.seconds))
        .ok_or_else(invalid)?;
    let nanos = u32::try_from(parts.microseconds * 1_000).map_err(|_| invalid())?;

    DateTime::from_timestamp(total, nanos).ok_or_else(invalid)
}
