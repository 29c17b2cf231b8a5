use super::plant::ModifierKind;
use serde::{Deserialize, Serialize};

/// Active environmental levels applied to yield calculations.
///
/// Each present field holds a level label that is looked up in a plant's
/// factor table. Absent fields do not adjust yield.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
}

impl EnvironmentFactors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sun(mut self, level: impl Into<String>) -> Self {
        self.sun = Some(level.into());
        self
    }

    pub fn with_wind(mut self, level: impl Into<String>) -> Self {
        self.wind = Some(level.into());
        self
    }

    pub fn with_temperature(mut self, level: impl Into<String>) -> Self {
        self.temperature = Some(level.into());
        self
    }

    pub fn level(&self, kind: ModifierKind) -> Option<&str> {
        match kind {
            ModifierKind::Sun => self.sun.as_deref(),
            ModifierKind::Wind => self.wind.as_deref(),
            ModifierKind::Temperature => self.temperature.as_deref(),
        }
    }

    /// Present levels, in sun, wind, temperature order
    pub fn levels(&self) -> impl Iterator<Item = (ModifierKind, &str)> + '_ {
        ModifierKind::all()
            .iter()
            .filter_map(move |kind| self.level(*kind).map(|level| (*kind, level)))
    }
}
