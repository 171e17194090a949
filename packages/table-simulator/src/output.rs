//! JSON-lines output for simulation results.

use std::io::Write;

use hearts_engine::domain::Seat;
use hearts_engine::GameOutcome;
use serde::Serialize;

/// One line of output per simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game: u32,
    pub seed: u64,
    pub deals_played: u32,
    pub final_scores: [u16; 4],
    pub losers: Vec<Seat>,
    /// Seat that shot the moon, once per such deal.
    pub moon_shooters: Vec<Seat>,
}

impl GameRecord {
    pub fn new(game: u32, seed: u64, outcome: &GameOutcome) -> Self {
        Self {
            game,
            seed,
            deals_played: outcome.deals_played,
            final_scores: outcome.final_scores,
            losers: outcome.losers.clone(),
            moon_shooters: outcome
                .deal_history
                .iter()
                .filter_map(|deal| deal.moon_shooter)
                .collect(),
        }
    }
}

pub struct OutputWriter<W: Write> {
    out: W,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_game(&mut self, record: &GameRecord) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.out.flush()?;
        Ok(())
    }
}
