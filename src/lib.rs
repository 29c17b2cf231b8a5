//! Crop yield, cost, revenue and profit calculations.
//!
//! Plants carry a base yield and optional per-environment percentage
//! modifiers. Given an optional [`EnvironmentFactors`], the functions in
//! [`logic::calculations`] derive figures for a single planting or a whole
//! [`Farm`].

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use config::{CalculationConfig, Config, UnknownLevelPolicy};
pub use error::{FarmError, Result};
pub use logic::calculations::{
    crop_cost, crop_profit, crop_revenue, crop_yield, plant_yield, total_cost, total_profit,
    total_revenue, total_yield,
};
pub use logic::summary::summarize;
pub use logic::{CropSummary, FarmCalculator, FarmSummary};
pub use models::{CropEntry, EnvironmentFactors, Farm, ModifierKind, Plant};
