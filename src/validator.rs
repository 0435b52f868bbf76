use crate::error::{RaceError, Result};

pub const RACER_INPUT_MAX_LENGTH: usize = 599;
pub const TURN_INPUT_MAX_LENGTH: usize = 5;
pub const NAME_DELIMITER: char = ',';

/// # Errors
///
/// Returns [`RaceError::InvalidInputLength`] when the character count is
/// outside `min..=max`.
pub fn validate_length(input: &str, min: usize, max: usize) -> Result<()> {
    let len = input.chars().count();
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(RaceError::InvalidInputLength { len, min, max })
    }
}

/// # Errors
///
/// Returns [`RaceError::BlankInput`] for empty or whitespace-only input.
pub fn validate_has_text(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(RaceError::BlankInput);
    }
    Ok(())
}

/// # Errors
///
/// Returns [`RaceError::InvalidNumericInput`] unless every character is an
/// ASCII digit.
pub fn validate_numeric(input: &str) -> Result<()> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(RaceError::InvalidNumericInput(input.to_owned()));
    }
    Ok(())
}

/// Checks the raw car-name line and splits it into candidate names.
///
/// Empty segments after the last name are dropped; empty segments before it
/// are kept so that the name check reports them.
///
/// # Errors
///
/// Fails when the line is blank or longer than [`RACER_INPUT_MAX_LENGTH`].
pub fn parse_racer_names(input: &str) -> Result<Vec<&str>> {
    validate_length(input, 0, RACER_INPUT_MAX_LENGTH)?;
    validate_has_text(input)?;

    let mut names: Vec<&str> = input.split(NAME_DELIMITER).collect();
    while names.last().is_some_and(|name| name.is_empty()) {
        names.pop();
    }
    Ok(names)
}

/// # Errors
///
/// Fails when the line is blank, longer than [`TURN_INPUT_MAX_LENGTH`] or not
/// all digits.
pub fn parse_turn_count(input: &str) -> Result<u32> {
    validate_length(input, 0, TURN_INPUT_MAX_LENGTH)?;
    validate_has_text(input)?;
    validate_numeric(input)?;

    input
        .parse()
        .map_err(|_| RaceError::InvalidNumericInput(input.to_owned()))
}
