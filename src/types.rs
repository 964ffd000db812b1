use crate::constants::DEFAULT_SEPARATOR;
use crate::error::EncodeError;
use crate::validate::{validate_log_pattern, validate_separator};
use octet_hex_types::{InitArgs, WideCharPolicy};
use regex::Regex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Placed between the encodings of list elements.
    pub separator: String,
    pub wide_chars: WideCharPolicy,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            wide_chars: WideCharPolicy::default(),
        }
    }
}

impl TryFrom<&InitArgs> for EncoderConfig {
    type Error = EncodeError;

    fn try_from(args: &InitArgs) -> Result<Self, Self::Error> {
        let separator = args
            .separator
            .clone()
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        validate_separator(&separator)?;
        Ok(Self {
            separator,
            wide_chars: args.wide_chars.unwrap_or_default(),
        })
    }
}

/// Decides which log lines are recorded, with patterns already compiled.
#[derive(Clone, Debug, Default)]
pub enum LogFilter {
    #[default]
    ShowAll,
    HideAll,
    ShowPattern(Regex),
    HidePattern(Regex),
}

impl TryFrom<octet_hex_types::LogFilter> for LogFilter {
    type Error = EncodeError;

    fn try_from(value: octet_hex_types::LogFilter) -> Result<Self, Self::Error> {
        Ok(match value {
            octet_hex_types::LogFilter::ShowAll => LogFilter::ShowAll,
            octet_hex_types::LogFilter::HideAll => LogFilter::HideAll,
            octet_hex_types::LogFilter::ShowPattern(regex) => {
                LogFilter::ShowPattern(validate_log_pattern(&regex.0)?)
            }
            octet_hex_types::LogFilter::HidePattern(regex) => {
                LogFilter::HidePattern(validate_log_pattern(&regex.0)?)
            }
        })
    }
}

impl LogFilter {
    pub fn is_match(&self, message: &str) -> bool {
        match self {
            Self::ShowAll => true,
            Self::HideAll => false,
            Self::ShowPattern(regex) => regex.is_match(message),
            Self::HidePattern(regex) => !regex.is_match(message),
        }
    }
}
