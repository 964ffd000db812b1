
use candid::types::{Serializer, Type};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod input;
mod lifecycle;

pub use input::OctetInput;
pub use lifecycle::{InitArgs, LogFilter, RegexString, WideCharPolicy};

/// Lowercase hexadecimal text with two digits per byte and no separators.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexString(String);

impl HexString {
    pub fn encode<T: AsRef<[u8]>>(bytes: T) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bytes represented by this string.
    pub fn num_bytes(&self) -> usize {
        self.0.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        hex::decode(&self.0).expect("BUG: HexString should only contain valid hex")
    }
}

impl Display for HexString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl CandidType for HexString {
    fn _ty() -> Type {
        String::_ty()
    }

    fn idl_serialize<S>(&self, serializer: S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_text(&self.0)
    }
}

impl FromStr for HexString {
    type Err = String;

    /// Positions in error messages count characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((position, c)) = s
            .chars()
            .enumerate()
            .find(|(_, c)| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(format!(
                "Invalid hex string: unexpected character {:?} at position {}",
                c, position
            ));
        }
        // Only ASCII digits remain, so the byte length is the character count.
        if s.len() % 2 != 0 {
            return Err(format!(
                "Invalid hex string: expected an even number of characters, got {}",
                s.len()
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for HexString {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexString> for String {
    fn from(value: HexString) -> Self {
        value.0
    }
}

impl From<HexString> for Vec<u8> {
    fn from(value: HexString) -> Self {
        value.to_bytes()
    }
}
