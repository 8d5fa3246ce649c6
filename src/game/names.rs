//! Player name rules

use super::player::PlayerId;
use thiserror::Error;

/// Shortest accepted name, in characters
pub const MIN_NAME_LEN: usize = 2;
/// Longest accepted name, in characters
pub const MAX_NAME_LEN: usize = 20;

/// Why `start_game` refused the supplied names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} name is required")]
    Empty(PlayerId),

    #[error("{0} name must be at least {min} characters", min = MIN_NAME_LEN)]
    TooShort(PlayerId),

    #[error("{0} name must be {max} characters or less", max = MAX_NAME_LEN)]
    TooLong(PlayerId),

    #[error("player names must be different")]
    Duplicate,
}

/// Trims both names and checks them against the lobby rules
///
/// # Errors
/// Returns the first violated rule, checking player 1 before player 2.
pub fn validate_names(name1: &str, name2: &str) -> Result<(String, String), ValidationError> {
    let name1 = validate_one(PlayerId::Player1, name1)?;
    let name2 = validate_one(PlayerId::Player2, name2)?;

    if name1.to_lowercase() == name2.to_lowercase() {
        return Err(ValidationError::Duplicate);
    }

    Ok((name1, name2))
}

fn validate_one(player: PlayerId, name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    match name.chars().count() {
        0 => Err(ValidationError::Empty(player)),
        n if n < MIN_NAME_LEN => Err(ValidationError::TooShort(player)),
        n if n > MAX_NAME_LEN => Err(ValidationError::TooLong(player)),
        _ => Ok(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims() {
        assert_eq!(
            validate_names("  Ada ", "Grace"),
            Ok(("Ada".to_string(), "Grace".to_string()))
        );
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(
            validate_names("   ", "Grace"),
            Err(ValidationError::Empty(PlayerId::Player1))
        );
        assert_eq!(
            validate_names("Ada", ""),
            Err(ValidationError::Empty(PlayerId::Player2))
        );
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(
            validate_names("A", "Grace"),
            Err(ValidationError::TooShort(PlayerId::Player1))
        );
        assert_eq!(
            validate_names("Ada", &"x".repeat(21)),
            Err(ValidationError::TooLong(PlayerId::Player2))
        );
        assert!(validate_names("Ada", &"x".repeat(20)).is_ok());
    }

    #[test]
    fn rejects_case_insensitive_duplicates() {
        assert_eq!(
            validate_names("ada", "ADA "),
            Err(ValidationError::Duplicate)
        );
    }

    #[test]
    fn message_names_the_rule() {
        let err = validate_names("A", "Grace").unwrap_err();
        assert_eq!(err.to_string(), "Player 1 name must be at least 2 characters");
    }
}
