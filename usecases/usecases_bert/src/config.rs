//! Configuration Module
//!
//! Provides `BertConfig` and the text encodings it can name.
//!
//! The encoding is fixed when a decoder or encoder is built. The encoder uses
//! it to pick the bytes and the tag atom for non-ASCII text; the decoder uses
//! it only when a `string` payload names an encoding it cannot resolve.
//!
//! UTF-8, Latin-1 and ASCII are handled directly with their strict meanings.
//! Every other name is looked up as a WHATWG encoding label through
//! `encoding_rs` (`utf-16le`, `windows-1252`, `shift_jis`, ...).

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

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::BertError;

/// Default encoding name
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Supported text encodings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1; every byte is the code point of the same value
    Latin1,
    Ascii,
    /// Any other encoding resolved from a WHATWG label
    Labelled(&'static Encoding),
}

impl TextEncoding {
    /// Canonical upper-case name, used as the tag atom on the wire
    pub fn name(self) -> Cow<'static, str> {
        match self {
            TextEncoding::Utf8 => Cow::Borrowed("UTF-8"),
            TextEncoding::Latin1 => Cow::Borrowed("LATIN-1"),
            TextEncoding::Ascii => Cow::Borrowed("ASCII"),
            TextEncoding::Labelled(encoding) => Cow::Owned(encoding.name().to_ascii_uppercase()),
        }
    }

    /// Look up an encoding by name
    ///
    /// UTF-8, Latin-1 and ASCII aliases are matched ignoring case, `-` and `_`.
    /// Other names go through the WHATWG label table, so `latin-1` here means
    /// ISO-8859-1 even though the label table maps it to windows-1252.
    pub fn from_name(name: &str) -> Option<Self> {
        let compact: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match compact.as_str() {
            "utf8" => return Some(TextEncoding::Utf8),
            "latin1" | "iso88591" | "l1" => return Some(TextEncoding::Latin1),
            "ascii" | "usascii" => return Some(TextEncoding::Ascii),
            "utf16" | "utf16le" => return Some(TextEncoding::Labelled(UTF_16LE)),
            "utf16be" => return Some(TextEncoding::Labelled(UTF_16BE)),
            _ => {}
        }
        let label = name.trim().replace('_', "-");
        Encoding::for_label_no_replacement(name.trim().as_bytes())
            .or_else(|| Encoding::for_label_no_replacement(label.as_bytes()))
            .map(TextEncoding::from_encoding)
    }

    /// Wrap an `encoding_rs` encoding
    pub fn from_encoding(encoding: &'static Encoding) -> Self {
        if encoding == UTF_8 {
            TextEncoding::Utf8
        } else {
            TextEncoding::Labelled(encoding)
        }
    }

    /// Encode text into bytes
    ///
    /// # Returns
    /// * `Ok(bytes)` - Encoded text
    /// * `Err(BertError::Text)` - A character has no representation in this encoding
    pub fn encode(self, text: &str) -> Result<Vec<u8>, BertError> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Latin1 => self.encode_narrow(text, 0xff),
            TextEncoding::Ascii => self.encode_narrow(text, 0x7f),
            TextEncoding::Labelled(encoding) if encoding == UTF_16LE => {
                Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect())
            }
            TextEncoding::Labelled(encoding) if encoding == UTF_16BE => {
                Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect())
            }
            TextEncoding::Labelled(encoding) => {
                let (bytes, _, unmappable) = encoding.encode(text);
                if unmappable {
                    Err(self.error("text has characters that are not representable"))
                } else {
                    Ok(bytes.into_owned())
                }
            }
        }
    }

    /// Decode bytes into text
    ///
    /// # Returns
    /// * `Ok(String)` - Decoded text
    /// * `Err(BertError::Text)` - The bytes are not valid in this encoding
    pub fn decode(self, bytes: &[u8]) -> Result<String, BertError> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| self.error(e)),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(pos) => Err(self.error(format!("byte 0x{:02x} at {}", bytes[pos], pos))),
                None => Ok(bytes.iter().map(|&b| b as char).collect()),
            },
            TextEncoding::Labelled(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned)
                .ok_or_else(|| self.error("malformed byte sequence")),
        }
    }

    fn encode_narrow(self, text: &str, max: u32) -> Result<Vec<u8>, BertError> {
        text.chars()
            .map(|c| {
                u8::try_from(c as u32)
                    .ok()
                    .filter(|&b| u32::from(b) <= max)
                    .ok_or_else(|| self.error(format!("character {:?} is not representable", c)))
            })
            .collect()
    }

    fn error(self, reason: impl fmt::Display) -> BertError {
        BertError::Text {
            encoding: self.name().into_owned(),
            reason: reason.to_string(),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = BertError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        TextEncoding::from_name(name).ok_or_else(|| BertError::UnknownEncoding(name.to_string()))
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Conversion configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BertConfig {
    pub encoding: TextEncoding,
}

impl BertConfig {
    pub fn new(encoding: TextEncoding) -> Self {
        Self { encoding }
    }

    /// Configuration for a named encoding such as `"utf-8"` or `"shift_jis"`
    pub fn with_encoding_name(name: &str) -> Result<Self, BertError> {
        Ok(Self::new(name.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, WINDOWS_1252};

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(BertConfig::default().encoding, TextEncoding::Utf8);
        assert_eq!(
            BertConfig::with_encoding_name(DEFAULT_ENCODING).unwrap(),
            BertConfig::default()
        );
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(TextEncoding::from_name("UTF-8"), Some(TextEncoding::Utf8));
        assert_eq!(TextEncoding::from_name("utf8"), Some(TextEncoding::Utf8));
        assert_eq!(TextEncoding::from_name("ISO-8859-1"), Some(TextEncoding::Latin1));
        assert_eq!(TextEncoding::from_name("latin_1"), Some(TextEncoding::Latin1));
        assert_eq!(TextEncoding::from_name("US-ASCII"), Some(TextEncoding::Ascii));
        assert_eq!(TextEncoding::from_name("ebcdic"), None);
    }

    #[test]
    fn test_from_name_labels() {
        assert_eq!(
            TextEncoding::from_name("UTF-16-LE"),
            Some(TextEncoding::Labelled(UTF_16LE))
        );
        assert_eq!(
            TextEncoding::from_name("utf_16_be"),
            Some(TextEncoding::Labelled(UTF_16BE))
        );
        assert_eq!(
            TextEncoding::from_name("CP1252"),
            Some(TextEncoding::Labelled(WINDOWS_1252))
        );
        assert_eq!(
            TextEncoding::from_name("shift_jis"),
            Some(TextEncoding::Labelled(SHIFT_JIS))
        );
        assert_eq!(
            TextEncoding::from_name("unicode-1-1-utf-8"),
            Some(TextEncoding::Utf8)
        );
    }

    #[test]
    fn test_unknown_encoding_name() {
        let err = BertConfig::with_encoding_name("ebcdic").unwrap_err();
        assert!(matches!(err, BertError::UnknownEncoding(name) if name == "ebcdic"));
    }

    #[test]
    fn test_names_round_trip() {
        for encoding in [
            TextEncoding::Utf8,
            TextEncoding::Latin1,
            TextEncoding::Ascii,
            TextEncoding::Labelled(UTF_16LE),
            TextEncoding::Labelled(WINDOWS_1252),
            TextEncoding::Labelled(SHIFT_JIS),
        ] {
            assert_eq!(TextEncoding::from_name(&encoding.name()), Some(encoding));
        }
    }

    #[test]
    fn test_labelled_name_is_upper_case() {
        assert_eq!(TextEncoding::Labelled(UTF_16LE).name(), "UTF-16LE");
        assert_eq!(TextEncoding::Labelled(WINDOWS_1252).to_string(), "WINDOWS-1252");
    }

    #[test]
    fn test_utf8() {
        let bytes = TextEncoding::Utf8.encode("h\u{e9}").unwrap();
        assert_eq!(bytes, vec![b'h', 0xc3, 0xa9]);
        assert_eq!(TextEncoding::Utf8.decode(&bytes).unwrap(), "h\u{e9}");
        assert!(TextEncoding::Utf8.decode(&[0xff]).is_err());
    }

    #[test]
    fn test_latin1() {
        let bytes = TextEncoding::Latin1.encode("h\u{e9}").unwrap();
        assert_eq!(bytes, vec![b'h', 0xe9]);
        assert_eq!(TextEncoding::Latin1.decode(&bytes).unwrap(), "h\u{e9}");
        assert_eq!(TextEncoding::Latin1.decode(&[0x80]).unwrap(), "\u{80}");
        assert!(TextEncoding::Latin1.encode("\u{20ac}").is_err());
    }

    #[test]
    fn test_ascii() {
        assert_eq!(TextEncoding::Ascii.encode("ok").unwrap(), b"ok".to_vec());
        assert!(TextEncoding::Ascii.encode("\u{e9}").is_err());
        assert!(TextEncoding::Ascii.decode(&[0x80]).is_err());
    }

    #[test]
    fn test_utf16() {
        let le = TextEncoding::Labelled(UTF_16LE);
        assert_eq!(le.decode(&[0x68, 0, 0x69, 0]).unwrap(), "hi");
        assert_eq!(le.encode("h\u{e9}").unwrap(), vec![0x68, 0, 0xe9, 0]);
        assert!(le.decode(&[0x68]).is_err());

        let be = TextEncoding::Labelled(UTF_16BE);
        assert_eq!(be.encode("\u{1f600}").unwrap(), vec![0xd8, 0x3d, 0xde, 0x00]);
        assert_eq!(be.decode(&[0xd8, 0x3d, 0xde, 0x00]).unwrap(), "\u{1f600}");
    }

    #[test]
    fn test_windows_1252() {
        let cp1252 = TextEncoding::Labelled(WINDOWS_1252);
        assert_eq!(cp1252.decode(&[0x80]).unwrap(), "\u{20ac}");
        assert_eq!(cp1252.encode("\u{20ac}").unwrap(), vec![0x80]);
        assert!(matches!(
            cp1252.encode("\u{4e2d}"),
            Err(BertError::Text { encoding, .. }) if encoding == "WINDOWS-1252"
        ));
    }

    #[test]
    fn test_shift_jis() {
        let sjis = TextEncoding::Labelled(SHIFT_JIS);
        let bytes = sjis.encode("\u{65e5}\u{672c}").unwrap();
        assert_eq!(bytes, vec![0x93, 0xfa, 0x96, 0x7b]);
        assert_eq!(sjis.decode(&bytes).unwrap(), "\u{65e5}\u{672c}");
    }
}
