use std::io::{self, BufRead, Write};

use crate::log::RoundSnapshot;

const INPUT_RACER: &str = "Enter the names of the cars to race (separated by commas).";
const INPUT_NUMBER_OF_TURNS: &str = "How many turns will the race run?";
const START_SHOW_GAME_RESULT: &str = "Race results";
const FINAL_WINNER: &str = "Final winner";

const DISTANCE_CHARACTER: &str = "-";
const WINNER_DELIMITER: &str = ",";

/// Console prompts and race rendering over any reader/writer pair.
pub struct RacingGameScreen<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> RacingGameScreen<R, W> {
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// # Errors
    ///
    /// Propagates reader or writer failures.
    pub fn input_racer(&mut self) -> io::Result<String> {
        writeln!(self.writer, "{INPUT_RACER}")?;
        self.read_line()
    }

    /// # Errors
    ///
    /// Propagates reader or writer failures.
    pub fn input_number_of_turns(&mut self) -> io::Result<String> {
        writeln!(self.writer, "{INPUT_NUMBER_OF_TURNS}")?;
        self.read_line()
    }

    /// # Errors
    ///
    /// Propagates reader or writer failures.
    pub fn start_show_game_result(&mut self) -> io::Result<()> {
        writeln!(self.writer, "\n{START_SHOW_GAME_RESULT}")
    }

    /// # Errors
    ///
    /// Propagates reader or writer failures.
    pub fn show_turn_result(&mut self, snapshot: &RoundSnapshot) -> io::Result<()> {
        for racer in snapshot.positions() {
            let distance = DISTANCE_CHARACTER.repeat(racer.position as usize);
            writeln!(self.writer, "{} : {}", racer.name, distance)?;
        }
        writeln!(self.writer)
    }

    /// # Errors
    ///
    /// Propagates reader or writer failures.
    pub fn show_final_winner(&mut self, winners: &[String]) -> io::Result<()> {
        writeln!(
            self.writer,
            "{FINAL_WINNER} : {}",
            winners.join(WINNER_DELIMITER)
        )?;
        self.writer.flush()
    }

    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
