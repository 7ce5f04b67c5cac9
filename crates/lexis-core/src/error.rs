use crate::language::is_supported;

/// Input rejected at the CLI / web boundary before any lookup
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty text")]
    EmptyInput,

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Source and target language are the same: {0}")]
    SameLanguage(String),
}

/// Trimmed text, or an error when nothing is left
pub fn validate_text(text: &str) -> Result<&str, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyInput);
    }
    Ok(trimmed)
}

pub fn validate_direction(src: &str, tgt: &str) -> Result<(), InputError> {
    for code in [src, tgt] {
        if !is_supported(code) {
            return Err(InputError::UnsupportedLanguage(code.to_string()));
        }
    }
    if src == tgt {
        return Err(InputError::SameLanguage(src.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text("  Haus "), Ok("Haus"));
        assert_eq!(validate_text("   "), Err(InputError::EmptyInput));
    }

    #[test]
    fn test_validate_direction() {
        assert!(validate_direction("de", "fr").is_ok());
        assert_eq!(
            validate_direction("de", "xx"),
            Err(InputError::UnsupportedLanguage("xx".into()))
        );
        assert_eq!(
            validate_direction("fr", "fr"),
            Err(InputError::SameLanguage("fr".into()))
        );
    }
}
