use serde::Serialize;

use crate::error::{RaceError, Result};

pub const MAX_RACER_NAME_LENGTH: usize = 5;

/// A single car taking part in a race.
///
/// Cars compare equal by name only; the position is race state, not identity.
#[derive(Debug, Clone, Serialize)]
pub struct Car {
    name: String,
    position: u32,
}

impl Car {
    /// # Errors
    ///
    /// Returns [`RaceError::InvalidNameLength`] for blank or overlong names
    /// and [`RaceError::InvalidNameFormat`] for anything but ASCII letters
    /// and digits.
    pub fn name_of(raw_name: &str) -> Result<Self> {
        let length = raw_name.chars().count();
        if length == 0 || length > MAX_RACER_NAME_LENGTH {
            return Err(RaceError::InvalidNameLength(raw_name.to_owned()));
        }
        if !raw_name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RaceError::InvalidNameFormat(raw_name.to_owned()));
        }

        Ok(Self {
            name: raw_name.to_owned(),
            position: 0,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    pub(crate) fn advance(&mut self) {
        self.position += 1;
    }
}

impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Car {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_of_accepts_alphanumeric_names_up_to_max_length() {
        for name in ["a", "pobi", "crong", "A1b2C", "12345"] {
            let car = Car::name_of(name).unwrap();
            assert_eq!(car.name(), name);
            assert_eq!(car.position(), 0);
        }
    }

    #[test]
    fn name_of_rejects_blank_and_long_names() {
        assert!(matches!(
            Car::name_of(""),
            Err(RaceError::InvalidNameLength(_))
        ));
        assert!(matches!(
            Car::name_of("abcdef"),
            Err(RaceError::InvalidNameLength(name)) if name == "abcdef"
        ));
    }

    #[test]
    fn name_of_rejects_non_alphanumeric_names() {
        for name in [" ", "a b", "po-b", "자동차", "x!"] {
            assert!(
                matches!(Car::name_of(name), Err(RaceError::InvalidNameFormat(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn advance_moves_exactly_one_step() {
        let mut car = Car::name_of("pobi").unwrap();
        car.advance();
        car.advance();
        assert_eq!(car.position(), 2);
    }

    #[test]
    fn equality_ignores_position() {
        let mut moved = Car::name_of("pobi").unwrap();
        moved.advance();
        assert_eq!(moved, Car::name_of("pobi").unwrap());
        assert_ne!(moved, Car::name_of("Pobi").unwrap());
    }
}
