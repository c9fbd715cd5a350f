pub mod draws;
pub use draws::*;

pub mod features;
pub use features::*;
