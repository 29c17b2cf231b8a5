use super::calculations::FarmCalculator;
use crate::error::Result;
use crate::models::{CropEntry, EnvironmentFactors, Farm};
use serde::Serialize;

/// Per-planting breakdown of a farm calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropSummary {
    pub name: String,
    pub num_crops: u32,
    pub yield_per_plant: f64,
    pub total_yield: f64,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FarmSummary {
    pub crops: Vec<CropSummary>,
    pub total_yield: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
}

impl FarmSummary {
    /// Highest-profit planting. NaN profits never win.
    pub fn most_profitable(&self) -> Option<&CropSummary> {
        self.crops
            .iter()
            .filter(|c| !c.profit.is_nan())
            .max_by(|a, b| a.profit.total_cmp(&b.profit))
    }

    pub fn unprofitable(&self) -> impl Iterator<Item = &CropSummary> {
        self.crops.iter().filter(|c| c.profit < 0.0)
    }
}

impl FarmCalculator {
    pub fn summarize_crop(
        &self,
        entry: &CropEntry,
        env: Option<&EnvironmentFactors>,
    ) -> Result<CropSummary> {
        // Environment factors are applied once per entry
        let yield_per_plant = self.plant_yield(&entry.crop, env)?;
        let total_yield = yield_per_plant * f64::from(entry.num_crops);
        let cost = self.crop_cost(entry);
        let revenue = total_yield * entry.crop.unit_price();

        Ok(CropSummary {
            name: entry.crop.display_name().to_string(),
            num_crops: entry.num_crops,
            yield_per_plant,
            total_yield,
            cost,
            revenue,
            profit: revenue - cost,
        })
    }

    /// Full breakdown of a farm. Totals are summed in planting order, the
    /// same way `total_yield` and `total_profit` sum them.
    pub fn summarize(&self, farm: &Farm, env: Option<&EnvironmentFactors>) -> Result<FarmSummary> {
        let crops = farm
            .crops
            .iter()
            .map(|entry| self.summarize_crop(entry, env))
            .collect::<Result<Vec<_>>>()?;

        let summary = FarmSummary {
            total_yield: crops.iter().map(|c| c.total_yield).sum(),
            total_cost: crops.iter().map(|c| c.cost).sum(),
            total_revenue: crops.iter().map(|c| c.revenue).sum(),
            total_profit: crops.iter().map(|c| c.profit).sum(),
            crops,
        };

        tracing::debug!(
            crops = summary.crops.len(),
            total_profit = summary.total_profit,
            "Summarized farm"
        );
        Ok(summary)
    }
}

pub fn summarize(farm: &Farm, env: Option<&EnvironmentFactors>) -> Result<FarmSummary> {
    FarmCalculator::default().summarize(farm, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::calculations::{total_cost, total_profit, total_revenue, total_yield};
    use crate::config::{CalculationConfig, UnknownLevelPolicy};
    use crate::models::{ModifierKind, Plant};
    use approx::assert_relative_eq;

    fn farm() -> Farm {
        Farm::default()
            .with_crop(
                Plant::new(3.0)
                    .with_name("corn")
                    .with_cost(1.0)
                    .with_price(4.0)
                    .with_factor(
                        ModifierKind::Sun,
                        [("low", -50.0), ("medium", 0.0), ("high", 50.0)],
                    ),
                5,
            )
            .with_crop(
                Plant::new(5.0)
                    .with_name("pumpkin")
                    .with_cost(1.0)
                    .with_price(3.0),
                2,
            )
            .with_crop(
                Plant::new(1.0)
                    .with_name("saffron")
                    .with_cost(10.0)
                    .with_price(2.0),
                3,
            )
    }

    #[test]
    fn summary_matches_totals() {
        let farm = farm();
        let env = EnvironmentFactors::new().with_sun("high");
        let summary = summarize(&farm, Some(&env)).unwrap();

        assert_eq!(summary.crops.len(), 3);
        assert_eq!(summary.total_yield, total_yield(&farm, Some(&env)).unwrap());
        assert_eq!(summary.total_cost, total_cost(&farm));
        assert_eq!(
            summary.total_revenue,
            total_revenue(&farm, Some(&env)).unwrap()
        );
        assert_eq!(
            summary.total_profit,
            total_profit(&farm, Some(&env)).unwrap()
        );
    }

    #[test]
    fn crop_summary_matches_crop_operations() {
        let calculator = FarmCalculator::default();
        let env = EnvironmentFactors::new().with_sun("high");

        for entry in &farm().crops {
            let summary = calculator.summarize_crop(entry, Some(&env)).unwrap();
            assert_eq!(
                summary.total_yield,
                calculator.crop_yield(entry, Some(&env)).unwrap()
            );
            assert_eq!(
                summary.revenue,
                calculator.crop_revenue(entry, Some(&env)).unwrap()
            );
            assert_eq!(
                summary.profit,
                calculator.crop_profit(entry, Some(&env)).unwrap()
            );
        }
    }

    #[test]
    fn crop_summary_propagates_unknown_level() {
        let calculator = FarmCalculator::new(CalculationConfig {
            unknown_level: UnknownLevelPolicy::Propagate,
            ..CalculationConfig::default()
        });
        let env = EnvironmentFactors::new().with_sun("eclipse");

        let summary = calculator.summarize_crop(&farm().crops[0], Some(&env)).unwrap();
        assert!(summary.yield_per_plant.is_nan());
        assert!(summary.total_yield.is_nan());
        assert!(summary.profit.is_nan());
    }

    #[test]
    fn crop_breakdown() {
        let summary = summarize(&farm(), None).unwrap();
        let corn = &summary.crops[0];

        assert_eq!(corn.name, "corn");
        assert_eq!(corn.num_crops, 5);
        assert_eq!(corn.yield_per_plant, 3.0);
        assert_eq!(corn.total_yield, 15.0);
        assert_eq!(corn.cost, 5.0);
        assert_eq!(corn.revenue, 60.0);
        assert_eq!(corn.profit, 55.0);
    }

    #[test]
    fn most_profitable_and_unprofitable() {
        let env = EnvironmentFactors::new().with_sun("low");
        let summary = summarize(&farm(), Some(&env)).unwrap();

        // corn at 50%: 7.5 * 4 - 5 = 25, pumpkin: 30 - 2 = 28
        assert_relative_eq!(summary.crops[0].profit, 25.0);
        assert_eq!(summary.most_profitable().unwrap().name, "pumpkin");

        let losers: Vec<_> = summary.unprofitable().map(|c| c.name.as_str()).collect();
        assert_eq!(losers, vec!["saffron"]);
    }

    #[test]
    fn empty_farm_summary() {
        let summary = summarize(&Farm::default(), None).unwrap();
        assert!(summary.crops.is_empty());
        assert_eq!(summary.total_profit, 0.0);
        assert!(summary.most_profitable().is_none());
    }

    #[test]
    fn summary_fails_on_unknown_level() {
        let env = EnvironmentFactors::new().with_sun("eclipse");
        assert!(summarize(&farm(), Some(&env)).is_err());
    }

    #[test]
    fn summary_serializes() {
        let summary = summarize(&farm(), None).unwrap();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["crops"][1]["name"], "pumpkin");
        assert_eq!(value["total_cost"], 37.0);
    }
}
