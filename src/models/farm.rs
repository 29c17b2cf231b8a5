use super::plant::Plant;
use serde::{Deserialize, Serialize};

/// A planting of one plant type at a given count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropEntry {
    #[serde(alias = "plant")]
    pub crop: Plant,
    pub num_crops: u32,
}

impl CropEntry {
    pub fn new(crop: Plant, num_crops: u32) -> Self {
        Self { crop, num_crops }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    #[serde(default)]
    pub crops: Vec<CropEntry>,
}

impl Farm {
    pub fn new(crops: Vec<CropEntry>) -> Self {
        Self { crops }
    }

    pub fn with_crop(mut self, crop: Plant, num_crops: u32) -> Self {
        self.crops.push(CropEntry::new(crop, num_crops));
        self
    }
}
