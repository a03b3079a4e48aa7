//! Catalog record types.

use serde::Serialize;
use std::fmt;

/// Technology category. Doubles as the filter tag id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Dsa,
    Lang,
    Devops,
}

impl Category {
    /// Tag order used by the filter control.
    pub const ALL: [Category; 5] = [
        Category::Web,
        Category::Mobile,
        Category::Dsa,
        Category::Lang,
        Category::Devops,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Web    => "web",
            Category::Mobile => "mobile",
            Category::Dsa    => "dsa",
            Category::Lang   => "lang",
            Category::Devops => "devops",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Web    => "Web Development",
            Category::Mobile => "Mobile Development",
            Category::Dsa    => "Data Structures",
            Category::Lang   => "Programming Languages",
            Category::Devops => "DevOps",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Difficulty level. Ordering follows rank: Beginner < Intermediate < Advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn id(self) -> &'static str {
        match self {
            Level::Beginner     => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced     => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner     => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced     => "Advanced",
        }
    }

    /// Sort rank for the "level" sort key.
    pub fn rank(self) -> u8 {
        match self {
            Level::Beginner     => 1,
            Level::Intermediate => 2,
            Level::Advanced     => 3,
        }
    }

    /// Exact match on the lowercase id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.id() == id)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One stage of a technology's learning roadmap.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stage {
    pub level: Level,
    pub topics: &'static [&'static str],
}

impl Stage {
    pub fn id(&self) -> &'static str {
        self.level.id()
    }

    pub fn title(&self) -> &'static str {
        self.level.label()
    }
}

/// A static catalog entry describing a technology and its learning topics.
#[derive(Debug, Clone, Serialize)]
pub struct TechnologyRecord {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub level: Level,
    pub image: &'static str,
    pub beginner_topics: &'static [&'static str],
    pub intermediate_topics: &'static [&'static str],
    pub advanced_topics: &'static [&'static str],
    pub docs_url: &'static str,
    pub course_url: &'static str,
}

impl TechnologyRecord {
    pub fn stages(&self) -> [Stage; 3] {
        [
            Stage { level: Level::Beginner,     topics: self.beginner_topics },
            Stage { level: Level::Intermediate, topics: self.intermediate_topics },
            Stage { level: Level::Advanced,     topics: self.advanced_topics },
        ]
    }

    pub fn stage(&self, level: Level) -> Stage {
        let topics = match level {
            Level::Beginner     => self.beginner_topics,
            Level::Intermediate => self.intermediate_topics,
            Level::Advanced     => self.advanced_topics,
        };
        Stage { level, topics }
    }

    pub fn topic_count(&self) -> usize {
        self.stages().iter().map(|s| s.topics.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_id(c.id()), Some(c));
        }
        assert_eq!(Category::from_id("all"), None);
        assert_eq!(Category::from_id("Web"), None);
    }

    #[test]
    fn test_level_rank_matches_ordering() {
        assert!(Level::Beginner.rank() < Level::Intermediate.rank());
        assert!(Level::Intermediate.rank() < Level::Advanced.rank());
        assert!(Level::Beginner < Level::Advanced);
    }

    #[test]
    fn test_level_from_id_is_exact() {
        assert_eq!(Level::from_id("advanced"), Some(Level::Advanced));
        assert_eq!(Level::from_id("Advanced"), None);
    }

    #[test]
    fn test_serialized_category_is_tag_id() {
        assert_eq!(serde_json::to_string(&Category::Devops).unwrap(), "\"devops\"");
        assert_eq!(serde_json::to_string(&Level::Beginner).unwrap(), "\"Beginner\"");
    }
}
