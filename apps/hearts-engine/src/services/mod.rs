pub mod game_flow;

pub use game_flow::{GameFlow, GameFlowError, GameOutcome, TablePort};
