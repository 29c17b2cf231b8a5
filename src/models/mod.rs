pub mod environment;
pub mod farm;
pub mod plant;

pub use environment::*;
pub use farm::*;
pub use plant::*;
