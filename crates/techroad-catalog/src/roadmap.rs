//! Roadmap detail overlay: per-topic completion for one technology.
//!
//! Progress is transient. It travels in the overlay URL (`done=` parameter)
//! and starts empty whenever the overlay is opened afresh.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::record::{Level, TechnologyRecord};

/// A topic within a stage, written `<stage>-<index>` (e.g. `beginner-0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TopicId {
    pub stage: Level,
    pub index: usize,
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.id(), self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid topic id: {0}")]
pub struct InvalidTopicId(pub String);

impl FromStr for TopicId {
    type Err = InvalidTopicId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTopicId(s.to_string());
        let (stage, index) = s.rsplit_once('-').ok_or_else(invalid)?;
        let stage = Level::from_id(stage).ok_or_else(invalid)?;
        let index = index.parse().map_err(|_| invalid())?;
        Ok(TopicId { stage, index })
    }
}

impl TopicId {
    pub fn exists_in(&self, record: &TechnologyRecord) -> bool {
        self.index < record.stage(self.stage).topics.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadmapProgress {
    completed: BTreeSet<TopicId>,
}

impl RoadmapProgress {
    /// Parse a comma-separated list of topic ids, keeping only ids that exist
    /// in `record`.
    pub fn from_param(record: &TechnologyRecord, raw: &str) -> Self {
        let completed = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match s.parse::<TopicId>() {
                Ok(id) if id.exists_in(record) => Some(id),
                Ok(id) => {
                    tracing::debug!(record = record.name, topic = %id, "Dropping out-of-range topic");
                    None
                }
                Err(e) => {
                    tracing::debug!(record = record.name, "{}", e);
                    None
                }
            })
            .collect();
        Self { completed }
    }

    /// Canonical form: stage order, then index.
    pub fn to_param(&self) -> String {
        self.completed
            .iter()
            .map(TopicId::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn is_completed(&self, id: TopicId) -> bool {
        self.completed.contains(&id)
    }

    pub(crate) fn toggle(&mut self, id: TopicId) {
        if !self.completed.remove(&id) {
            self.completed.insert(id);
        }
    }

    /// Copy of this progress with `id` toggled; used to build checkbox links.
    pub fn toggled(&self, id: TopicId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn completed_in_stage(&self, stage: Level) -> usize {
        self.completed.iter().filter(|id| id.stage == stage).count()
    }

    pub fn percentage(&self, record: &TechnologyRecord) -> f64 {
        let total = record.topic_count();
        if total == 0 {
            return 0.0;
        }
        self.completed_count() as f64 / total as f64 * 100.0
    }

    pub fn rounded_percentage(&self, record: &TechnologyRecord) -> u32 {
        self.percentage(record).round() as u32
    }
}

/// Tabs of the roadmap overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayTab {
    #[default]
    Roadmap,
    Resources,
    Community,
}

impl OverlayTab {
    pub const ALL: [OverlayTab; 3] = [OverlayTab::Roadmap, OverlayTab::Resources, OverlayTab::Community];

    pub fn id(self) -> &'static str {
        match self {
            OverlayTab::Roadmap   => "roadmap",
            OverlayTab::Resources => "resources",
            OverlayTab::Community => "community",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OverlayTab::Roadmap   => "Roadmap",
            OverlayTab::Resources => "Resources",
            OverlayTab::Community => "Community",
        }
    }

    /// Unknown or missing tabs open the roadmap.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|id| Self::ALL.into_iter().find(|t| t.id() == id))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::find;

    fn react() -> &'static TechnologyRecord {
        find(1).expect("React is in the dataset")
    }

    #[test]
    fn test_topic_id_format() {
        let id = TopicId { stage: Level::Intermediate, index: 3 };
        assert_eq!(id.to_string(), "intermediate-3");
        assert_eq!("intermediate-3".parse::<TopicId>(), Ok(id));
        assert!("expert-1".parse::<TopicId>().is_err());
        assert!("beginner-x".parse::<TopicId>().is_err());
        assert!("beginner".parse::<TopicId>().is_err());
    }

    #[test]
    fn test_invalid_topic_id_error() {
        let err = "expert-1".parse::<TopicId>().unwrap_err();
        assert_eq!(err, InvalidTopicId("expert-1".to_string()));
        assert_eq!(err.to_string(), "invalid topic id: expert-1");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_fresh_progress_is_zero() {
        let progress = RoadmapProgress::default();
        assert_eq!(progress.completed_count(), 0);
        assert_eq!(progress.percentage(react()), 0.0);
    }

    #[test]
    fn test_percentage_counts_all_stages() {
        let progress = RoadmapProgress::from_param(react(), "beginner-0,intermediate-1,advanced-4");
        assert_eq!(progress.completed_count(), 3);
        // 3 of 15 topics
        assert!((progress.percentage(react()) - 20.0).abs() < 1e-9);
        assert_eq!(progress.rounded_percentage(react()), 20);
        assert_eq!(progress.completed_in_stage(Level::Beginner), 1);
    }

    #[test]
    fn test_invalid_and_out_of_range_ids_dropped() {
        let progress = RoadmapProgress::from_param(react(), "beginner-0,beginner-99,bogus,,advanced-2");
        assert_eq!(progress.to_param(), "beginner-0,advanced-2");
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let id = TopicId { stage: Level::Advanced, index: 0 };
        let mut progress = RoadmapProgress::default();
        progress.toggle(id);
        assert!(progress.is_completed(id));
        progress.toggle(id);
        assert!(!progress.is_completed(id));
    }

    #[test]
    fn test_to_param_is_canonical_order() {
        let progress = RoadmapProgress::from_param(react(), "advanced-1, beginner-2 ,beginner-0");
        assert_eq!(progress.to_param(), "beginner-0,beginner-2,advanced-1");
        let toggled = progress.toggled(TopicId { stage: Level::Beginner, index: 2 });
        assert_eq!(toggled.to_param(), "beginner-0,advanced-1");
        assert_eq!(progress.completed_count(), 3);
    }

    #[test]
    fn test_overlay_tab_fallback() {
        assert_eq!(OverlayTab::from_param(Some("resources")), OverlayTab::Resources);
        assert_eq!(OverlayTab::from_param(Some("nope")), OverlayTab::Roadmap);
        assert_eq!(OverlayTab::from_param(None), OverlayTab::Roadmap);
    }
}
