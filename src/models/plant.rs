use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category of environmental influence on a plant's yield
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKind {
    Sun,
    Wind,
    Temperature,
}

impl ModifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifierKind::Sun => "sun",
            ModifierKind::Wind => "wind",
            ModifierKind::Temperature => "temperature",
        }
    }

    pub fn all() -> &'static [ModifierKind] {
        &[
            ModifierKind::Sun,
            ModifierKind::Wind,
            ModifierKind::Temperature,
        ]
    }
}

impl std::fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Level label (`low`, `medium`, `high`, ...) to signed percentage delta
pub type LevelTable = BTreeMap<String, f64>;

/// Modifier kind name to level table. Keyed by name so that kinds this
/// crate does not model still deserialize; they never affect yield.
pub type FactorTable = BTreeMap<String, LevelTable>;

/// Result of looking up a plant's sensitivity to one environmental level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LevelLookup {
    /// The plant has no table for this modifier kind
    Unaffected,
    Delta(f64),
    /// The plant has a table for this kind, but not for the requested level
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "yield", default)]
    pub base_yield: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<FactorTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Plant {
    pub fn new(base_yield: f64) -> Self {
        Self {
            base_yield,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Add a modifier table, e.g. `with_factor(Sun, [("low", -50.0), ("high", 50.0)])`
    pub fn with_factor<I, S>(mut self, kind: ModifierKind, levels: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let table = levels.into_iter().map(|(l, d)| (l.into(), d)).collect();
        self.factor.get_or_insert_with(FactorTable::new).insert(kind.as_str().to_string(), table);
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    pub fn modifier(&self, kind: ModifierKind, level: &str) -> LevelLookup {
        match self.factor.as_ref().and_then(|f| f.get(kind.as_str())) {
            None => LevelLookup::Unaffected,
            Some(levels) => match levels.get(level) {
                Some(delta) => LevelLookup::Delta(*delta),
                None => LevelLookup::Unknown,
            },
        }
    }

    /// Unit cost, zero when the plant carries none
    pub fn unit_cost(&self) -> f64 {
        self.cost.unwrap_or(0.0)
    }

    /// Unit sale price, zero when the plant carries none
    pub fn unit_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}
