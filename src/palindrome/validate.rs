use super::types::PalindromeError;

/// Check that every code point is a Unicode letter or digit.
///
/// Reports the first offending character with its code point index.
pub fn validate_letters_or_digits(text: &str) -> Result<(), PalindromeError> {
    match text.chars().enumerate().find(|(_, ch)| !ch.is_alphanumeric()) {
        Some((index, character)) => Err(PalindromeError::InvalidCharacter { index, character }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_and_digits() {
        assert!(validate_letters_or_digits("").is_ok());
        assert!(validate_letters_or_digits("abc123XYZ").is_ok());
        assert!(validate_letters_or_digits("ąśćśą").is_ok());
        assert!(validate_letters_or_digits("日本語").is_ok());
    }

    #[test]
    fn test_reports_first_invalid_index() {
        assert_eq!(
            validate_letters_or_digits("abc-def"),
            Err(PalindromeError::InvalidCharacter {
                index: 3,
                character: '-'
            })
        );
        assert_eq!(
            validate_letters_or_digits("a b_c"),
            Err(PalindromeError::InvalidCharacter {
                index: 1,
                character: ' '
            })
        );
    }

    #[test]
    fn test_index_counts_code_points_not_bytes() {
        // 'ą' and 'ś' are two bytes each in UTF-8
        assert_eq!(
            validate_letters_or_digits("ąś!"),
            Err(PalindromeError::InvalidCharacter {
                index: 2,
                character: '!'
            })
        );
    }

    #[test]
    fn test_rejects_whitespace_controls() {
        for input in ["tab\tchar", "new\nline", "abc!"] {
            assert!(validate_letters_or_digits(input).is_err(), "{input:?}");
        }
    }
}
