pub mod calculations;
pub mod summary;

pub use calculations::FarmCalculator;
pub use summary::{CropSummary, FarmSummary};
