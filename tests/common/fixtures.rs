#![allow(dead_code)]

use regionmap::{Catalog, RegionRecord, RegionStore};

/// Catalog with the single region used by the walkthrough scenario.
pub fn single_region_catalog() -> Catalog {
    Catalog::new(vec![RegionRecord::new("X-01", "Test Region", "UTC+0")])
        .expect("Failed to build single-region catalog")
}

/// Small catalog with mixed timezones.
pub fn small_catalog() -> Catalog {
    Catalog::new(vec![
        RegionRecord::new("RU-MOW", "Москва", "UTC+3 (MSK)"),
        RegionRecord::new("RU-SPE", "Санкт-Петербург", "UTC+3 (MSK)"),
        RegionRecord::new("RU-KGD", "Калининградская область", "UTC+2 (MSK-1)"),
        RegionRecord::new("RU-NVS", "Новосибирская область", "UTC+7 (MSK+4)"),
        RegionRecord::new("RU-KAM", "Камчатский край", "UTC+12 (MSK+9)"),
    ])
    .expect("Failed to build small catalog")
}

pub fn russia_store() -> RegionStore {
    RegionStore::new(Catalog::russia().expect("Failed to load built-in catalog"))
}

/// Color constants for tests
pub const BLUE: &str = "#3B82F6";
pub const GREEN: &str = "#10B981";
pub const RED: &str = "#EF4444";
