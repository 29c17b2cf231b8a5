use crate::config::{CalculationConfig, UnknownLevelPolicy};
use crate::error::{FarmError, Result};
use crate::models::{CropEntry, EnvironmentFactors, Farm, LevelLookup, Plant};

/// Yield, cost, revenue and profit calculations under a fixed configuration.
///
/// Every method is a pure function of its arguments. The environment is
/// optional: `None` leaves a plant's base yield untouched regardless of its
/// factor table.
#[derive(Debug, Clone, Default)]
pub struct FarmCalculator {
    config: CalculationConfig,
}

impl FarmCalculator {
    pub fn new(config: CalculationConfig) -> Self {
        Self { config }
    }

    /// Adjusted percentage for a plant, starting from the configured baseline
    fn percentage(&self, plant: &Plant, env: &EnvironmentFactors) -> Result<f64> {
        let mut percentage = self.config.baseline_percentage;

        for (kind, level) in env.levels() {
            match plant.modifier(kind, level) {
                LevelLookup::Unaffected => {}
                LevelLookup::Delta(delta) => percentage += delta,
                LevelLookup::Unknown => match self.config.unknown_level {
                    UnknownLevelPolicy::Error => {
                        return Err(FarmError::UnknownLevel {
                            plant: plant.display_name().to_string(),
                            kind,
                            level: level.to_string(),
                        });
                    }
                    UnknownLevelPolicy::Propagate => {
                        tracing::warn!(
                            "No {} level '{}' for plant {}, yield is undefined",
                            kind,
                            level,
                            plant.display_name()
                        );
                        percentage += f64::NAN;
                    }
                },
            }
        }

        Ok(percentage)
    }

    /// Yield of a single plant
    pub fn plant_yield(&self, plant: &Plant, env: Option<&EnvironmentFactors>) -> Result<f64> {
        let Some(env) = env else {
            return Ok(plant.base_yield);
        };

        let percentage = self.percentage(plant, env)?;
        tracing::trace!(
            plant = plant.display_name(),
            percentage,
            "Applied environment factors"
        );

        Ok((plant.base_yield / 100.0) * percentage)
    }

    /// Yield of a planting: per-plant yield times count
    pub fn crop_yield(&self, entry: &CropEntry, env: Option<&EnvironmentFactors>) -> Result<f64> {
        Ok(self.plant_yield(&entry.crop, env)? * f64::from(entry.num_crops))
    }

    pub fn total_yield(&self, farm: &Farm, env: Option<&EnvironmentFactors>) -> Result<f64> {
        let total = farm
            .crops
            .iter()
            .map(|entry| self.crop_yield(entry, env))
            .sum::<Result<f64>>()?;

        tracing::debug!(crops = farm.crops.len(), total, "Calculated total yield");
        Ok(total)
    }

    /// Cost of a planting. Environment independent.
    pub fn crop_cost(&self, entry: &CropEntry) -> f64 {
        f64::from(entry.num_crops) * entry.crop.unit_cost()
    }

    pub fn total_cost(&self, farm: &Farm) -> f64 {
        farm.crops.iter().map(|entry| self.crop_cost(entry)).sum()
    }

    pub fn crop_revenue(&self, entry: &CropEntry, env: Option<&EnvironmentFactors>) -> Result<f64> {
        Ok(self.crop_yield(entry, env)? * entry.crop.unit_price())
    }

    pub fn total_revenue(&self, farm: &Farm, env: Option<&EnvironmentFactors>) -> Result<f64> {
        farm.crops
            .iter()
            .map(|entry| self.crop_revenue(entry, env))
            .sum()
    }

    pub fn crop_profit(&self, entry: &CropEntry, env: Option<&EnvironmentFactors>) -> Result<f64> {
        Ok(self.crop_revenue(entry, env)? - self.crop_cost(entry))
    }

    pub fn total_profit(&self, farm: &Farm, env: Option<&EnvironmentFactors>) -> Result<f64> {
        let total = farm
            .crops
            .iter()
            .map(|entry| self.crop_profit(entry, env))
            .sum::<Result<f64>>()?;

        tracing::debug!(crops = farm.crops.len(), total, "Calculated total profit");
        Ok(total)
    }
}

pub fn plant_yield(plant: &Plant, env: Option<&EnvironmentFactors>) -> Result<f64> {
    FarmCalculator::default().plant_yield(plant, env)
}

pub fn crop_yield(entry: &CropEntry, env: Option<&EnvironmentFactors>) -> Result<f64> {
    FarmCalculator::default().crop_yield(entry, env)
}

pub fn total_yield(farm: &Farm, env: Option<&EnvironmentFactors>) -> Result<f64> {
    FarmCalculator::default().total_yield(farm, env)
}

pub fn crop_cost(entry: &CropEntry) -> f64 {
    FarmCalculator::default().crop_cost(entry)
}

pub fn total_cost(farm: &Farm) -> f64 {
    FarmCalculator::default().total_cost(farm)
}

pub fn crop_revenue(entry: &CropEntry, env: Option<&EnvironmentFactors>) -> Result<f64> {
    FarmCalculator::default().crop_revenue(entry, env)
}

pub fn total_revenue(farm: &Farm, env: Option<&EnvironmentFactors>) -> Result<f64> {
    FarmCalculator::default().total_revenue(farm, env)
}

pub fn crop_profit(entry: &CropEntry, env: Option<&EnvironmentFactors>) -> Result<f64> {
    FarmCalculator::default().crop_profit(entry, env)
}

pub fn total_profit(farm: &Farm, env: Option<&EnvironmentFactors>) -> Result<f64> {
    FarmCalculator::default().total_profit(farm, env)
}
