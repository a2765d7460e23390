mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from regionmap for tests
#[allow(unused_imports)]
pub use regionmap::{
    AssignmentError, Catalog, RegionRecord, RegionState, RegionStore, RegionUpdate,
    SelectedRegion, Session, Stats,
};
