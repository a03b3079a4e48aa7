//! Filter/sort engine for the technology catalog.
//!
//! `apply` is a pure function of the record slice and a `FilterState`:
//! neither input is mutated and the result borrows from the records.

use std::cmp::Ordering;

use crate::record::{Category, Level, TechnologyRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_ID: &'static str = "all";

    pub fn id(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_ID,
            CategoryFilter::Only(c) => c.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Recognises "all" and every category tag id.
    pub fn from_id(id: &str) -> Option<Self> {
        if id == Self::ALL_ID {
            Some(CategoryFilter::All)
        } else {
            Category::from_id(id).map(CategoryFilter::Only)
        }
    }

    /// "All" followed by each category, in filter-control order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LevelFilter {
    #[default]
    All,
    Only(Level),
}

impl LevelFilter {
    pub const ALL_ID: &'static str = "all";

    pub fn id(self) -> &'static str {
        match self {
            LevelFilter::All => Self::ALL_ID,
            LevelFilter::Only(l) => l.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LevelFilter::All => "All Levels",
            LevelFilter::Only(l) => l.label(),
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        if id == Self::ALL_ID {
            Some(LevelFilter::All)
        } else {
            Level::from_id(id).map(LevelFilter::Only)
        }
    }

    pub fn options() -> impl Iterator<Item = LevelFilter> {
        std::iter::once(LevelFilter::All).chain(Level::ALL.into_iter().map(LevelFilter::Only))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Level,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Name, SortKey::Level];

    pub fn id(self) -> &'static str {
        match self {
            SortKey::Name  => "name",
            SortKey::Level => "level",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name  => "Name",
            SortKey::Level => "Difficulty",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// The (query, category, level, sort) tuple driving catalog visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    pub level: LevelFilter,
    pub sort: SortKey,
}

impl FilterState {
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self { query: query.into(), ..self.clone() }
    }

    pub fn cleared_query(&self) -> Self {
        self.with_query(String::new())
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self { category, ..self.clone() }
    }

    pub fn with_level(&self, level: LevelFilter) -> Self {
        Self { level, ..self.clone() }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self { sort, ..self.clone() }
    }

    pub fn reset() -> Self {
        Self::default()
    }

    /// Message shown when no record passes the filters.
    pub fn empty_state_message(&self) -> String {
        let category = match self.category {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(c.label()),
        };
        match (self.query.is_empty(), category) {
            (false, Some(label)) => format!(
                "No results found for \"{}\" in the \"{}\" category",
                self.query, label
            ),
            (false, None) => format!("No results found for \"{}\"", self.query),
            (true, Some(label)) => format!("No results found in the \"{}\" category", label),
            (true, None) => "No technologies match the selected filters".to_string(),
        }
    }
}

pub fn matches_query(record: &TechnologyRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
}

pub fn matches_category(record: &TechnologyRecord, category: CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Only(c) => record.category == c,
    }
}

pub fn matches_level(record: &TechnologyRecord, level: LevelFilter) -> bool {
    match level {
        LevelFilter::All => true,
        LevelFilter::Only(l) => record.level == l,
    }
}

/// Logical AND of the three independent sub-predicates.
pub fn matches(record: &TechnologyRecord, state: &FilterState) -> bool {
    matches_query(record, &state.query)
        && matches_category(record, state.category)
        && matches_level(record, state.level)
}

/// Case-insensitive first, then exact, so "react" and "React" stay adjacent.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn compare(a: &TechnologyRecord, b: &TechnologyRecord, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Level => a
            .level
            .rank()
            .cmp(&b.level.rank())
            .then_with(|| compare_names(a.name, b.name)),
        SortKey::Name => compare_names(a.name, b.name),
    }
}

/// Produce the ordered visible subset of `records` for `state`.
pub fn apply<'a>(records: &'a [TechnologyRecord], state: &FilterState) -> Vec<&'a TechnologyRecord> {
    let mut visible: Vec<&TechnologyRecord> =
        records.iter().filter(|r| matches(r, state)).collect();
    visible.sort_by(|a, b| compare(a, b, state.sort));
    tracing::trace!(
        query = %state.query,
        category = state.category.id(),
        level = state.level.id(),
        sort = state.sort.id(),
        visible = visible.len(),
        "Applied catalog filters"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::technologies;
    use proptest::prelude::*;

    fn names(state: &FilterState) -> Vec<&'static str> {
        apply(technologies(), state).iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_query_react_matches_only_react() {
        let state = FilterState::default().with_query("react");
        assert_eq!(names(&state), vec!["React"]);
    }

    #[test]
    fn test_query_matches_description_case_insensitively() {
        // "JavaScript" appears only in descriptions
        let state = FilterState::default().with_query("JAVASCRIPT");
        assert_eq!(names(&state), vec!["Node.js", "React", "TypeScript"]);
    }

    #[test]
    fn test_devops_category_in_name_order() {
        let state = FilterState::default().with_category(CategoryFilter::Only(Category::Devops));
        assert_eq!(names(&state), vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn test_default_state_returns_everything_by_name() {
        assert_eq!(
            names(&FilterState::default()),
            vec![
                "Data Structures",
                "Docker",
                "Flutter",
                "Kubernetes",
                "Node.js",
                "Python",
                "React",
                "TypeScript",
            ]
        );
    }

    #[test]
    fn test_sort_by_level_groups_by_rank() {
        let state = FilterState::default().with_sort(SortKey::Level);
        let visible = apply(technologies(), &state);
        assert_eq!(visible.len(), technologies().len());
        let ranks: Vec<u8> = visible.iter().map(|r| r.level.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
        // Ties broken by name
        assert_eq!(visible[0].name, "Data Structures");
        assert_eq!(visible[1].name, "Python");
        assert_eq!(visible.last().map(|r| r.name), Some("Kubernetes"));
    }

    #[test]
    fn test_level_filter() {
        let state = FilterState::default().with_level(LevelFilter::Only(Level::Beginner));
        assert_eq!(names(&state), vec!["Data Structures", "Python"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        for category in CategoryFilter::options() {
            for level in LevelFilter::options() {
                let state = FilterState {
                    query: "zzz-no-match".to_string(),
                    category,
                    level,
                    sort: SortKey::Name,
                };
                assert!(apply(technologies(), &state).is_empty());
            }
        }
    }

    #[test]
    fn test_inputs_not_mutated() {
        let state = FilterState::default().with_sort(SortKey::Level);
        let before: Vec<u32> = technologies().iter().map(|r| r.id).collect();
        let snapshot = state.clone();
        let _ = apply(technologies(), &state);
        let after: Vec<u32> = technologies().iter().map(|r| r.id).collect();
        assert_eq!(before, after);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_empty_state_messages() {
        let q = FilterState::default().with_query("rust");
        assert_eq!(q.empty_state_message(), "No results found for \"rust\"");

        let qc = q.with_category(CategoryFilter::Only(Category::Mobile));
        assert_eq!(
            qc.empty_state_message(),
            "No results found for \"rust\" in the \"Mobile Development\" category"
        );

        let c = qc.cleared_query();
        assert_eq!(
            c.empty_state_message(),
            "No results found in the \"Mobile Development\" category"
        );
    }

    #[test]
    fn test_has_active_filters() {
        assert!(!FilterState::default().has_active_filters());
        assert!(FilterState::default().with_sort(SortKey::Level).has_active_filters());
        assert!(!FilterState::reset().has_active_filters());
    }

    fn arb_state() -> impl Strategy<Value = FilterState> {
        let queries = prop_oneof![
            Just(String::new()),
            Just("react".to_string()),
            Just("java".to_string()),
            Just("DATA".to_string()),
            Just("o".to_string()),
            "[a-zA-Z .]{0,6}",
        ];
        let categories = prop::sample::select(CategoryFilter::options().collect::<Vec<_>>());
        let levels = prop::sample::select(LevelFilter::options().collect::<Vec<_>>());
        let sorts = prop::sample::select(SortKey::ALL.to_vec());
        (queries, categories, levels, sorts).prop_map(|(query, category, level, sort)| {
            FilterState { query, category, level, sort }
        })
    }

    proptest! {
        #[test]
        fn prop_predicate_is_and_of_parts(state in arb_state()) {
            for r in technologies() {
                let expected = matches_query(r, &state.query)
                    && matches_category(r, state.category)
                    && matches_level(r, state.level);
                prop_assert_eq!(matches(r, &state), expected);
            }
        }

        #[test]
        fn prop_filters_commute(state in arb_state()) {
            let all: Vec<&TechnologyRecord> = technologies().iter().collect();

            let qcl: Vec<u32> = all.iter()
                .filter(|r| matches_query(r, &state.query))
                .filter(|r| matches_category(r, state.category))
                .filter(|r| matches_level(r, state.level))
                .map(|r| r.id).collect();
            let lcq: Vec<u32> = all.iter()
                .filter(|r| matches_level(r, state.level))
                .filter(|r| matches_category(r, state.category))
                .filter(|r| matches_query(r, &state.query))
                .map(|r| r.id).collect();
            prop_assert_eq!(&qcl, &lcq);

            let mut applied: Vec<u32> = apply(technologies(), &state).iter().map(|r| r.id).collect();
            applied.sort();
            prop_assert_eq!(applied, qcl);
        }

        #[test]
        fn prop_result_is_sorted(state in arb_state()) {
            let visible = apply(technologies(), &state);
            for pair in visible.windows(2) {
                prop_assert_ne!(compare(pair[0], pair[1], state.sort), Ordering::Greater);
            }
        }
    }
}
