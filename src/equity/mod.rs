pub mod equity;
pub use equity::*;

pub mod player;
pub use player::*;

pub mod simulation;
pub use simulation::*;

pub mod tally;
pub use tally::*;
