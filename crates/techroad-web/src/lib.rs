//! techroad-web: the TechRoad marketing site.
//! Server-rendered views:
//!   - Home, About and Services pages
//!   - Technology catalog with search, tag/level filters and sorting
//!   - Roadmap overlay with per-topic progress
//!   - Feedback form with inline validation

pub mod content;
pub mod error;
pub mod feedback;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;
