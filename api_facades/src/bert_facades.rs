//! BERT API Facades
//!
//! Binds the BERT decoder and encoder to the ETF codec so callers can go
//! straight between bytes and native values.

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

use entities_data_handling::Value;
use infrastructure_external_format::EtfCodec;
use usecases_bert::{BertConfig, BertError, TermDecoder, TermEncoder};

/// BERT decoder reading ETF bytes
pub type BertDecoder = TermDecoder<EtfCodec>;

/// BERT encoder writing ETF bytes
pub type BertEncoder = TermEncoder<EtfCodec>;

/// Decoder with the given text configuration
pub fn decoder(config: BertConfig) -> BertDecoder {
    TermDecoder::with_config(EtfCodec::new(), config)
}

/// Encoder with the given text configuration and optional zlib level
pub fn encoder(config: BertConfig, compression: Option<u32>) -> BertEncoder {
    let codec = match compression {
        Some(level) => EtfCodec::with_compression(level),
        None => EtfCodec::new(),
    };
    TermEncoder::with_config(codec, config)
}

/// Decode ETF bytes into a native value using UTF-8 for text
///
/// # Arguments
/// * `bytes` - Bytes starting with the ETF version byte
///
/// # Returns
/// * `Ok(Value)` - Decoded value
/// * `Err(BertError)` - Malformed bytes or BERT payload
pub fn decode(bytes: &[u8]) -> Result<Value, BertError> {
    BertDecoder::default().decode(bytes, 0)
}

/// Encode a native value into ETF bytes using UTF-8 for text
pub fn encode(value: &Value) -> Result<Vec<u8>, BertError> {
    BertEncoder::default().encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use usecases_bert::TextEncoding;

    #[test]
    fn test_encode_true_bytes() {
        let bytes = encode(&Value::Bool(true)).unwrap();
        assert_eq!(
            bytes,
            vec![131, 104, 2, 119, 4, b'b', b'e', b'r', b't', 119, 4, b't', b'r', b'u', b'e']
        );
    }

    #[test]
    fn test_decode_round_trip() {
        let value = Value::List(vec![Value::Null, Value::from("\u{fc}ber"), Value::Integer(9)]);
        assert_eq!(decode(&encode(&value).unwrap()).unwrap(), value);
    }

    #[test]
    fn test_configured_pair() {
        let config = BertConfig::new(TextEncoding::Latin1);
        let bytes = encoder(config, Some(9)).encode(&Value::from("\u{e9}")).unwrap();
        assert_eq!(decoder(config).decode(&bytes, 0).unwrap(), Value::from("\u{e9}"));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode(&[1, 2, 3]), Err(BertError::Codec(_))));
    }
}
