use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Text character whose codepoint is above 255. `position` counts characters, not bytes.
    #[error("character {character:?} at position {position} does not fit in a single octet")]
    WideCharacter { character: char, position: usize },
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
