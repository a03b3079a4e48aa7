//! techroad-catalog: the technology catalog behind the /technologies views.
//!
//! Provides:
//!   - the static dataset of technology records
//!   - the filter/sort engine (pure function of records + FilterState)
//!   - query-string synchronisation for FilterState
//!   - roadmap progress tracking for the detail overlay

pub mod dataset;
pub mod filter;
pub mod params;
pub mod record;
pub mod roadmap;

pub use dataset::{Catalog, StaticCatalog};
pub use filter::{apply, CategoryFilter, FilterState, LevelFilter, SortKey};
pub use record::{Category, Level, Stage, TechnologyRecord};
pub use roadmap::{OverlayTab, RoadmapProgress, TopicId};
