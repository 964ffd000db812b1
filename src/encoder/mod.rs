//! Lowercase hex encoding of octet strings.


use crate::{
    constants::OCTET_STRING,
    error::EncodeError,
    logs::{log, DEBUG, INFO},
    types::{EncoderConfig, LogFilter},
};
use octet_hex_types::{HexString, InitArgs, OctetInput, WideCharPolicy};
use std::borrow::Cow;

#[derive(Clone, Debug, Default)]
pub struct Encoder {
    config: EncoderConfig,
    log_filter: LogFilter,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            log_filter: LogFilter::default(),
        }
    }

    pub fn with_log_filter(mut self, log_filter: LogFilter) -> Self {
        self.log_filter = log_filter;
        self
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes a single octet string, or each element of a list joined by the separator.
    pub fn to_hex(&self, value: &OctetInput) -> Result<String, EncodeError> {
        match value {
            OctetInput::List(items) => {
                let mut hex = String::new();
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        hex.push_str(&self.config.separator);
                    }
                    self.write_octet_string(item, &mut hex)?;
                }
                Ok(hex)
            }
            _ => self.to_hex_string(value),
        }
    }

    /// Encodes a single octet string. Lists are rejected.
    pub fn to_hex_string(&self, value: &OctetInput) -> Result<String, EncodeError> {
        let mut hex = String::new();
        self.write_octet_string(value, &mut hex)?;
        Ok(hex)
    }

    /// Inverse of [`Encoder::to_hex_string`] on byte input.
    pub fn from_hex(&self, hex: &str) -> Result<Vec<u8>, EncodeError> {
        hex.parse::<HexString>()
            .map(|hex| hex.to_bytes())
            .map_err(EncodeError::InvalidHex)
    }

    /// Splits on the separator and decodes every element. Empty input yields no elements.
    pub fn from_hex_list(&self, hex: &str) -> Result<Vec<Vec<u8>>, EncodeError> {
        if hex.is_empty() {
            return Ok(vec![]);
        }
        hex.split(self.config.separator.as_str())
            .map(|element| self.from_hex(element))
            .collect()
    }

    fn write_octet_string(&self, value: &OctetInput, out: &mut String) -> Result<(), EncodeError> {
        match value {
            OctetInput::Text(text) => self.write_text(text, out),
            OctetInput::Bytes(bytes) => {
                out.push_str(&hex::encode(bytes));
                Ok(())
            }
            OctetInput::List(_) => {
                log!(
                    self.log_filter,
                    DEBUG,
                    "rejected {} where {} was expected",
                    value.kind(),
                    OCTET_STRING
                );
                Err(type_mismatch(value))
            }
        }
    }

    fn write_text(&self, text: &str, out: &mut String) -> Result<(), EncodeError> {
        // Octets of the current run of characters that fit in one octet.
        let mut octets = Vec::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            let codepoint = u32::from(character);
            match (u8::try_from(codepoint), self.config.wide_chars) {
                (Ok(octet), _) => octets.push(octet),
                (Err(_), WideCharPolicy::Widen) => {
                    out.push_str(&hex::encode(&octets));
                    octets.clear();
                    out.push_str(&format!("{:02x}", codepoint));
                }
                (Err(_), WideCharPolicy::Reject) => {
                    log!(
                        self.log_filter,
                        DEBUG,
                        "rejected character U+{:04X} at position {}",
                        codepoint,
                        position
                    );
                    return Err(EncodeError::WideCharacter {
                        character,
                        position,
                    });
                }
            }
        }
        out.push_str(&hex::encode(&octets));
        Ok(())
    }
}

impl TryFrom<InitArgs> for Encoder {
    type Error = EncodeError;

    fn try_from(args: InitArgs) -> Result<Self, Self::Error> {
        let config = EncoderConfig::try_from(&args)?;
        let log_filter = args
            .log_filter
            .map(LogFilter::try_from)
            .transpose()?
            .unwrap_or_default();
        let encoder = Encoder::new(config).with_log_filter(log_filter);
        log!(
            encoder.log_filter,
            INFO,
            "configured separator {:?}, wide characters {}",
            encoder.config.separator,
            encoder.config.wide_chars
        );
        Ok(encoder)
    }
}

/// UTF-8 bytes of text input. Byte input is borrowed as is.
pub fn to_bytes(value: &OctetInput) -> Result<Cow<'_, [u8]>, EncodeError> {
    match value {
        OctetInput::Bytes(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
        OctetInput::Text(text) => Ok(Cow::Borrowed(text.as_bytes())),
        OctetInput::List(_) => Err(type_mismatch(value)),
    }
}

fn type_mismatch(value: &OctetInput) -> EncodeError {
    EncodeError::TypeMismatch {
        expected: OCTET_STRING,
        found: value.kind(),
    }
}
