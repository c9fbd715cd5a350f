pub mod action;
pub use action::*;

pub mod classifier;
pub use classifier::*;

pub mod decision;
pub use decision::*;

pub mod engine;
pub use engine::*;

pub mod network;
pub use network::*;

pub mod position;
pub use position::*;

pub mod rule;
pub use rule::*;

pub mod table;
pub use table::*;
