use candid::CandidType;
use serde::{Deserialize, Serialize};

/// Value accepted by the hex encoder.
///
/// `Text` and `Bytes` are octet strings. `List` is an ordered sequence of
/// octet strings; the encoders reject lists nested inside a list.
#[derive(Clone, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub enum OctetInput {
    Text(String),
    Bytes(Vec<u8>),
    List(Vec<OctetInput>),
}

impl OctetInput {
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OctetInput>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Whether this value is a single octet string, i.e. text or bytes.
    pub fn is_octet_string(&self) -> bool {
        !matches!(self, Self::List(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
        }
    }
}

impl From<&str> for OctetInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OctetInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&[u8]> for OctetInput {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for OctetInput {
    fn from(value: &[u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for OctetInput {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<OctetInput>> for OctetInput {
    fn from(value: Vec<OctetInput>) -> Self {
        Self::List(value)
    }
}
