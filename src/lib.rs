pub mod catalog;
pub mod config;
pub mod error;
pub mod selection;
pub mod session;
pub mod state;
pub mod store;
pub mod surface;
pub mod views;

pub use catalog::{Catalog, RegionName, RegionRecord};
pub use config::{AppConfig, SurfaceSettings};
pub use error::{AssignmentError, CatalogError, ConfigError, RenderError};
pub use selection::{Selection, SelectionController};
pub use session::{Action, FormDraft, Notice, Session};
pub use state::{RegionState, RegionUpdate};
pub use store::RegionStore;
pub use surface::{MapSurface, SurfaceEvent, SurfaceFrame, TileSurface};
pub use views::{RegionTooltip, SelectedRegion, Stats};
