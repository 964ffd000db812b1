use candid::CandidType;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct InitArgs {
    pub separator: Option<String>,
    #[serde(rename = "wideChars")]
    pub wide_chars: Option<WideCharPolicy>,
    #[serde(rename = "logFilter")]
    pub log_filter: Option<LogFilter>,
}

/// How text characters whose codepoint does not fit in one octet are encoded.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    CandidType,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WideCharPolicy {
    /// Fail with an error naming the offending character.
    #[default]
    Reject,
    /// Emit the full codepoint with at least two digits, e.g. `3b1` for `α`.
    Widen,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub enum LogFilter {
    #[default]
    ShowAll,
    HideAll,
    ShowPattern(RegexString),
    HidePattern(RegexString),
}

#[derive(Clone, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct RegexString(pub String);

impl From<&str> for RegexString {
    fn from(value: &str) -> Self {
        RegexString(value.to_string())
    }
}
