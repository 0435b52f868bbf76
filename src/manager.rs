use std::io::{BufRead, Write};

use tracing::debug;

use crate::car::Car;
use crate::error::Result;
use crate::game::{Game, RoundEngine};
use crate::log::RaceResult;
use crate::policy::{AdvancementPolicy, NumberGenerator};
use crate::registry::RacerRegistry;
use crate::screen::RacingGameScreen;
use crate::validator;

/// Drives one full race from the console: registration, turn count, rounds
/// and the winner announcement.
pub struct RacingGameManager<R, W, G> {
    screen: RacingGameScreen<R, W>,
    generator: G,
}

impl<R: BufRead, W: Write, G: NumberGenerator> RacingGameManager<R, W, G> {
    #[must_use]
    pub const fn new(screen: RacingGameScreen<R, W>, generator: G) -> Self {
        Self { screen, generator }
    }

    /// # Errors
    ///
    /// Stops at the first invalid input or registration and propagates it,
    /// along with any console I/O failure.
    pub fn run(self) -> Result<RaceResult> {
        let Self {
            mut screen,
            generator,
        } = self;

        let registry = register_racing_cars(&mut screen)?;
        let turns = input_number_of_turns(&mut screen)?;

        let engine = RoundEngine::new(AdvancementPolicy::new(generator));
        let result = Game::new(registry, engine).race(turns)?;

        screen.start_show_game_result()?;
        for snapshot in &result.snapshots {
            screen.show_turn_result(snapshot)?;
        }
        screen.show_final_winner(&result.winners)?;

        Ok(result)
    }
}

fn register_racing_cars<R: BufRead, W: Write>(
    screen: &mut RacingGameScreen<R, W>,
) -> Result<RacerRegistry> {
    let input = screen.input_racer()?;
    let cars = validator::parse_racer_names(&input)?
        .into_iter()
        .map(Car::name_of)
        .collect::<Result<Vec<_>>>()?;
    debug!(count = cars.len(), "parsed car names");

    let mut registry = RacerRegistry::new();
    registry.add_all(cars)?;
    Ok(registry)
}

fn input_number_of_turns<R: BufRead, W: Write>(screen: &mut RacingGameScreen<R, W>) -> Result<u32> {
    let input = screen.input_number_of_turns()?;
    validator::parse_turn_count(&input)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::RaceError;
    use crate::policy::ScriptedNumbers;

    fn run(input: &str, draws: &[u8]) -> (Result<RaceResult>, String) {
        let mut output = Vec::new();
        let screen = RacingGameScreen::new(Cursor::new(input.as_bytes()), &mut output);
        let result = RacingGameManager::new(screen, ScriptedNumbers::new(draws.to_vec())).run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn full_race_renders_every_round_and_the_winners() {
        let (result, output) = run("A,B\n3\n", &[5, 1, 2, 8, 7, 9]);

        assert_eq!(result.unwrap().winners, ["A", "B"]);
        assert!(output.ends_with(
            "\nRace results\n\
             A : -\nB : \n\n\
             A : -\nB : -\n\n\
             A : --\nB : --\n\n\
             Final winner : A,B\n"
        ));
    }

    #[test]
    fn invalid_name_stops_before_asking_for_turns() {
        let (result, output) = run("pobi,toolong\n3\n", &[]);

        assert!(matches!(result, Err(RaceError::InvalidNameLength(name)) if name == "toolong"));
        assert!(!output.contains("How many turns"));
    }

    #[test]
    fn name_line_of_only_commas_fails_before_asking_for_turns() {
        let (result, output) = run(",,,\n3\n", &[]);

        assert!(matches!(result, Err(RaceError::NoRacers)));
        assert!(!output.contains("How many turns"));
    }

    #[test]
    fn duplicate_names_are_reported() {
        let (result, _) = run("pobi,pobi\n3\n", &[]);
        assert!(matches!(result, Err(RaceError::DuplicateName(_))));
    }

    #[test]
    fn zero_turns_is_rejected_by_the_race() {
        let (result, output) = run("pobi\n0\n", &[]);

        assert!(matches!(result, Err(RaceError::InvalidTurnCount(0))));
        assert!(!output.contains("Race results"));
    }

    #[test]
    fn non_numeric_turn_count_is_rejected() {
        let (result, _) = run("pobi\nten\n", &[]);
        assert!(matches!(result, Err(RaceError::InvalidNumericInput(_))));
    }

    #[test]
    fn missing_input_is_blank() {
        let (result, _) = run("", &[]);
        assert!(matches!(result, Err(RaceError::BlankInput)));
    }
}
