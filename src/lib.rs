//! Turn-based car race: cars register by name, every round each car draws a
//! number and moves one step on a high enough draw, and whoever is furthest
//! ahead after the last round wins.
#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]

pub mod car;
pub mod error;
pub mod game;
pub mod log;
pub mod manager;
pub mod policy;
pub mod registry;
pub mod screen;
pub mod validator;

pub use car::Car;
pub use error::{RaceError, Result};
pub use game::{Game, RoundEngine, State};
pub use log::{RaceResult, RacerPosition, RoundSnapshot};
pub use manager::RacingGameManager;
pub use policy::{AdvancementPolicy, NumberGenerator, RandomNumberGenerator};
pub use registry::RacerRegistry;
pub use screen::RacingGameScreen;
