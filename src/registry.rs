use std::collections::HashSet;

use tracing::debug;

use crate::car::Car;
use crate::error::{RaceError, Result};

pub const MAX_RACER_SIZE: usize = 10;

/// Cars entered into one race, kept in registration order.
///
/// Display order, evaluation order and winner order all follow this order.
#[derive(Debug, Default, Clone)]
pub struct RacerRegistry {
    cars: Vec<Car>,
}

impl RacerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `cars` after every car already in the registry.
    ///
    /// # Errors
    ///
    /// Fails without registering anything if a name repeats, if the registry
    /// would end up empty, or if it would exceed [`MAX_RACER_SIZE`].
    pub fn add_all(&mut self, cars: Vec<Car>) -> Result<()> {
        let mut seen: HashSet<&str> = self.cars.iter().map(Car::name).collect();
        if let Some(duplicate) = cars.iter().find(|car| !seen.insert(car.name())) {
            return Err(RaceError::DuplicateName(duplicate.name().to_owned()));
        }

        let size = self.cars.len() + cars.len();
        if size == 0 {
            return Err(RaceError::NoRacers);
        }
        if size > MAX_RACER_SIZE {
            return Err(RaceError::TooManyRacers(size));
        }

        debug!(added = cars.len(), size, "registered cars");
        self.cars.extend(cars);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    #[must_use = "iterators are lazy"]
    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Car> {
        self.cars.iter_mut()
    }
}
