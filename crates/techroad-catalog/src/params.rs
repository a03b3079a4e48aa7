//! Query-string synchronisation for `FilterState`.
//!
//! The URL is the source of truth for catalog filters. Parameters that equal
//! their default are omitted so URLs stay minimal, and any parameter the
//! catalog does not own is carried through untouched.

use url::form_urlencoded;

use crate::filter::{CategoryFilter, FilterState, LevelFilter, SortKey};

pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_QUERY: &str = "q";
pub const PARAM_LEVEL: &str = "level";
pub const PARAM_SORT: &str = "sort";

const FILTER_PARAMS: [&str; 4] = [PARAM_CATEGORY, PARAM_QUERY, PARAM_LEVEL, PARAM_SORT];

pub type QueryPairs = Vec<(String, String)>;

pub fn is_filter_param(key: &str) -> bool {
    FILTER_PARAMS.contains(&key)
}

/// Decode a raw (already split from the path) query string.
pub fn parse_query(raw: &str) -> QueryPairs {
    form_urlencoded::parse(raw.as_bytes()).into_owned().collect()
}

pub fn encode_query(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn first<'a, K, V>(pairs: &'a [(K, V)], key: &str) -> Option<&'a str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.as_ref())
}

impl FilterState {
    /// Seed a state from query parameters. Unrecognised or absent values fall
    /// back to the defaults; the first occurrence of a repeated key wins.
    pub fn from_query_pairs<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = FilterState::default();
        if let Some(category) = first(pairs, PARAM_CATEGORY).and_then(CategoryFilter::from_id) {
            state.category = category;
        }
        if let Some(query) = first(pairs, PARAM_QUERY).filter(|q| !q.is_empty()) {
            state.query = query.to_string();
        }
        if let Some(level) = first(pairs, PARAM_LEVEL).and_then(LevelFilter::from_id) {
            state.level = level;
        }
        if let Some(sort) = first(pairs, PARAM_SORT).and_then(SortKey::from_id) {
            state.sort = sort;
        }
        state
    }

    pub fn from_query_string(raw: &str) -> Self {
        Self::from_query_pairs(&parse_query(raw))
    }

    /// Parameters for this state merged over `existing`.
    ///
    /// Unrelated parameters keep their order and come first; filter
    /// parameters follow in a fixed order and only when non-default.
    pub fn to_query_pairs<K, V>(&self, existing: &[(K, V)]) -> QueryPairs
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pairs: QueryPairs = existing
            .iter()
            .filter(|(k, _)| !is_filter_param(k.as_ref()))
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();

        if self.category != CategoryFilter::All {
            pairs.push((PARAM_CATEGORY.to_string(), self.category.id().to_string()));
        }
        if !self.query.is_empty() {
            pairs.push((PARAM_QUERY.to_string(), self.query.clone()));
        }
        if self.level != LevelFilter::All {
            pairs.push((PARAM_LEVEL.to_string(), self.level.id().to_string()));
        }
        if self.sort != SortKey::Name {
            pairs.push((PARAM_SORT.to_string(), self.sort.id().to_string()));
        }
        pairs
    }

    pub fn to_query_string<K, V>(&self, existing: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        encode_query(&self.to_query_pairs(existing))
    }

    /// Link to `path` carrying this state, e.g. `/technologies?category=web`.
    pub fn href<K, V>(&self, path: &str, existing: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = self.to_query_string(existing);
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

/// Replace (or with `None`, remove) every occurrence of `key`.
///
/// The first occurrence keeps its position; a new key is appended.
pub fn with_param(pairs: &[(String, String)], key: &str, value: Option<&str>) -> QueryPairs {
    let mut out = QueryPairs::with_capacity(pairs.len() + 1);
    let mut placed = false;
    for (k, v) in pairs {
        if k != key {
            out.push((k.clone(), v.clone()));
        } else if let (Some(value), false) = (value, placed) {
            out.push((k.clone(), value.to_string()));
            placed = true;
        }
    }
    if let (Some(value), false) = (value, placed) {
        out.push((key.to_string(), value.to_string()));
    }
    out
}

/// True when `pairs` already is the minimal form of the state it encodes.
pub fn is_canonical(pairs: &[(String, String)]) -> bool {
    FilterState::from_query_pairs(pairs).to_query_pairs(pairs) == pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Category, Level};
    use proptest::prelude::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_absent_params_give_defaults() {
        let none: &[(&str, &str)] = &[];
        assert_eq!(FilterState::from_query_pairs(none), FilterState::default());
    }

    #[test]
    fn test_recognised_values_seed_state() {
        let state = FilterState::from_query_string("category=devops&q=dock&level=intermediate&sort=level");
        assert_eq!(state.category, CategoryFilter::Only(Category::Devops));
        assert_eq!(state.query, "dock");
        assert_eq!(state.level, LevelFilter::Only(Level::Intermediate));
        assert_eq!(state.sort, SortKey::Level);
    }

    #[test]
    fn test_unrecognised_values_fall_back() {
        let state = FilterState::from_query_string("category=games&level=Expert&sort=price&q=");
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_defaults_are_omitted() {
        let state = FilterState::default();
        let none: &[(&str, &str)] = &[];
        assert!(state.to_query_pairs(none).is_empty());
        assert_eq!(state.href("/technologies", none), "/technologies");
    }

    #[test]
    fn test_unrelated_params_preserved_in_order() {
        let existing = pairs(&[("view", "list"), ("category", "web"), ("utm", "x")]);
        let state = FilterState::default().with_sort(SortKey::Level);
        assert_eq!(
            state.to_query_pairs(&existing),
            pairs(&[("view", "list"), ("utm", "x"), ("sort", "level")])
        );
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let state = FilterState::default().with_query("node js & co");
        let none: &[(&str, &str)] = &[];
        assert_eq!(state.to_query_string(none), "q=node+js+%26+co");
        assert_eq!(FilterState::from_query_string("q=node+js+%26+co"), state);
    }

    #[test]
    fn test_canonical_detection() {
        assert!(is_canonical(&pairs(&[])));
        assert!(is_canonical(&pairs(&[("category", "web"), ("sort", "level")])));
        assert!(is_canonical(&pairs(&[("view", "list"), ("q", "react")])));
        // Default values submitted by the filter form
        assert!(!is_canonical(&pairs(&[("q", ""), ("level", "all"), ("sort", "name")])));
        // Out-of-order filter params
        assert!(!is_canonical(&pairs(&[("sort", "level"), ("category", "web")])));
        // Unrecognised values are dropped
        assert!(!is_canonical(&pairs(&[("category", "games")])));
    }

    #[test]
    fn test_with_param_replaces_in_place() {
        let existing = pairs(&[("view", "list"), ("q", "react"), ("view", "grid")]);
        assert_eq!(
            with_param(&existing, "view", Some("grid")),
            pairs(&[("view", "grid"), ("q", "react")])
        );
        assert_eq!(with_param(&existing, "view", None), pairs(&[("q", "react")]));
        assert_eq!(
            with_param(&existing, "tab", Some("resources")),
            pairs(&[("view", "list"), ("q", "react"), ("view", "grid"), ("tab", "resources")])
        );
    }

    fn arb_state() -> impl Strategy<Value = FilterState> {
        let categories = prop::sample::select(CategoryFilter::options().collect::<Vec<_>>());
        let levels = prop::sample::select(LevelFilter::options().collect::<Vec<_>>());
        let sorts = prop::sample::select(SortKey::ALL.to_vec());
        (".{0,12}", categories, levels, sorts).prop_map(|(query, category, level, sort)| {
            FilterState { query, category, level, sort }
        })
    }

    proptest! {
        #[test]
        fn prop_round_trip_through_query_string(state in arb_state(), view in "[a-z]{0,5}") {
            let existing = vec![("view".to_string(), view.clone())];
            let raw = state.to_query_string(&existing);
            let reparsed = parse_query(&raw);
            prop_assert_eq!(FilterState::from_query_pairs(&reparsed), state.clone());
            prop_assert!(is_canonical(&reparsed));
            prop_assert_eq!(reparsed[0].clone(), ("view".to_string(), view));
        }
    }
}
