use crate::error::EncodeError;
use regex::Regex;

pub fn validate_separator(separator: &str) -> Result<(), EncodeError> {
    if separator.is_empty() {
        Err(EncodeError::InvalidConfig("separator is empty".to_string()))
    } else if separator.chars().any(|c| c.is_ascii_hexdigit()) {
        Err(EncodeError::InvalidConfig(format!(
            "separator {:?} contains a hex digit",
            separator
        )))
    } else {
        Ok(())
    }
}

pub fn validate_log_pattern(pattern: &str) -> Result<Regex, EncodeError> {
    Regex::new(pattern)
        .map_err(|e| EncodeError::InvalidConfig(format!("invalid log filter pattern: {}", e)))
}

#[cfg(test)]
mod test {
    use crate::validate::{validate_log_pattern, validate_separator};
    use assert_matches::assert_matches;
    use crate::EncodeError;

    #[test]
    fn test_validate_separator() {
        for separator in [",", ";", " ", ", ", "\n", "g", "é", "::"] {
            assert_eq!(validate_separator(separator), Ok(()));
        }
        for separator in ["0", "9", "a", "f", "A", "F", ",a", "x0"] {
            assert_matches!(
                validate_separator(separator),
                Err(EncodeError::InvalidConfig(msg)) if msg.contains("contains a hex digit")
            );
        }
        assert_eq!(
            validate_separator(""),
            Err(EncodeError::InvalidConfig("separator is empty".to_string()))
        );
    }

    #[test]
    fn test_validate_log_pattern() {
        assert!(validate_log_pattern("^INFO [^ ]* 123").is_ok());
        assert_matches!(
            validate_log_pattern("(unclosed"),
            Err(EncodeError::InvalidConfig(msg)) if msg.starts_with("invalid log filter pattern")
        );
    }
}
