//! Technology catalog page and the per-technology roadmap overlay.
//!
//! Filter state lives in the query string. Requests whose query is not in
//! canonical form (defaults present, unknown values, filter params out of
//! order) are redirected once to the minimal URL, so a submitted filter form
//! lands on the same address a tag link would produce.

use axum::{
    extract::{Path, RawQuery, State},
    response::{IntoResponse, Redirect, Response},
};
use minijinja::context;
use serde::Serialize;
use techroad_catalog::{
    filter,
    params::{encode_query, is_canonical, is_filter_param, parse_query, with_param, QueryPairs},
    CategoryFilter, FilterState, Level, LevelFilter, OverlayTab, RoadmapProgress, SortKey,
    TechnologyRecord, TopicId,
};

use crate::error::ApiError;
use crate::handlers::pages::not_found_page;
use crate::state::SharedState;

pub const CATALOG_PATH: &str = "/technologies";
const PARAM_VIEW: &str = "view";
const PARAM_TAB: &str = "tab";
const PARAM_DONE: &str = "done";

fn link(path: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, encode_query(pairs))
    }
}

fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn roadmap_path(record: &TechnologyRecord) -> String {
    format!("{}/{}", CATALOG_PATH, record.id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        match param(pairs, PARAM_VIEW) {
            Some("list") => ViewMode::List,
            _ => ViewMode::Grid,
        }
    }

    fn id(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

// === View models ===

#[derive(Debug, Serialize)]
struct TagLink {
    id: &'static str,
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct SelectOption {
    id: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct TechCard {
    id: u32,
    name: &'static str,
    description: &'static str,
    image: &'static str,
    level: &'static str,
    level_class: &'static str,
    category_label: &'static str,
    href: String,
}

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Beginner     => "level-beginner",
        Level::Intermediate => "level-intermediate",
        Level::Advanced     => "level-advanced",
    }
}

fn tech_card(record: &TechnologyRecord, filter: &FilterState, pairs: &[(String, String)]) -> TechCard {
    TechCard {
        id: record.id,
        name: record.name,
        description: record.description,
        image: record.image,
        level: record.level.label(),
        level_class: level_class(record.level),
        category_label: record.category.label(),
        href: filter.href(&roadmap_path(record), pairs),
    }
}

/// GET /technologies
pub async fn technologies_page(
    State(state): State<SharedState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let pairs = parse_query(raw.as_deref().unwrap_or_default());
    let current = FilterState::from_query_pairs(&pairs);

    if !is_canonical(&pairs) {
        let target = current.href(CATALOG_PATH, &pairs);
        tracing::debug!(from = ?raw, to = %target, "Redirecting to canonical catalog URL");
        return Ok(Redirect::to(&target).into_response());
    }

    let records = state.catalog.records();
    let visible = filter::apply(records, &current);
    let view = ViewMode::from_pairs(&pairs);

    let tags: Vec<TagLink> = CategoryFilter::options()
        .map(|c| TagLink {
            id: c.id(),
            label: c.label(),
            href: current.with_category(c).href(CATALOG_PATH, &pairs),
            active: c == current.category,
        })
        .collect();

    let levels: Vec<SelectOption> = LevelFilter::options()
        .map(|l| SelectOption { id: l.id(), label: l.label(), selected: l == current.level })
        .collect();

    let sorts: Vec<SelectOption> = SortKey::ALL
        .into_iter()
        .map(|s| SelectOption { id: s.id(), label: s.label(), selected: s == current.sort })
        .collect();

    // Params the filter form does not own ride along as hidden inputs
    let hidden: QueryPairs = pairs
        .iter()
        .filter(|(k, _)| !is_filter_param(k))
        .cloned()
        .collect();

    let cards: Vec<TechCard> = visible
        .iter()
        .map(|r| tech_card(r, &current, &pairs))
        .collect();

    let empty_message = cards.is_empty().then(|| current.empty_state_message());

    let html = state.templates.page("technologies.html", context! {
        active => "technologies",
        query => &current.query,
        category => current.category.id(),
        category_label => current.category.label(),
        tags => tags,
        levels => levels,
        sorts => sorts,
        hidden => hidden,
        view => view.id(),
        grid_href => link(CATALOG_PATH, &with_param(&pairs, PARAM_VIEW, None)),
        list_href => link(CATALOG_PATH, &with_param(&pairs, PARAM_VIEW, Some("list"))),
        cards => cards,
        count => visible.len(),
        total => records.len(),
        empty_message => empty_message,
        has_active_filters => current.has_active_filters(),
        clear_query_href => current.cleared_query().href(CATALOG_PATH, &pairs),
        reset_href => FilterState::reset().href(CATALOG_PATH, &QueryPairs::new()),
    })?;
    Ok(html.into_response())
}

/// GET /Technologies: capitalised path used by older navigation links.
pub async fn technologies_legacy_path(RawQuery(raw): RawQuery) -> Redirect {
    match raw.filter(|q| !q.is_empty()) {
        Some(q) => Redirect::permanent(&format!("{CATALOG_PATH}?{q}")),
        None => Redirect::permanent(CATALOG_PATH),
    }
}

// === Roadmap overlay ===

#[derive(Debug, Serialize)]
struct TabLink {
    id: &'static str,
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct TopicView {
    id: String,
    title: &'static str,
    completed: bool,
    toggle_href: String,
}

#[derive(Debug, Serialize)]
struct StageView {
    id: &'static str,
    title: &'static str,
    completed: usize,
    total: usize,
    topics: Vec<TopicView>,
}

/// GET /technologies/{id}
pub async fn roadmap_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let record = match id.parse::<u32>().ok().and_then(|id| state.catalog.find(id)) {
        Some(record) => record,
        None => return not_found_page(&state, &format!("No roadmap exists for technology {id}.")),
    };

    let pairs = parse_query(raw.as_deref().unwrap_or_default());
    let tab = OverlayTab::from_param(param(&pairs, PARAM_TAB));
    let progress = RoadmapProgress::from_param(record, param(&pairs, PARAM_DONE).unwrap_or_default());
    let path = roadmap_path(record);

    // Closing the overlay returns to the catalog with the same filters
    let back_pairs: QueryPairs = pairs
        .iter()
        .filter(|(k, _)| k != PARAM_TAB && k != PARAM_DONE)
        .cloned()
        .collect();
    let back_href = FilterState::from_query_pairs(&back_pairs).href(CATALOG_PATH, &back_pairs);

    let tabs: Vec<TabLink> = OverlayTab::ALL
        .into_iter()
        .map(|t| {
            let value = (t != OverlayTab::Roadmap).then(|| t.id());
            TabLink {
                id: t.id(),
                label: t.label(),
                href: link(&path, &with_param(&pairs, PARAM_TAB, value)),
                active: t == tab,
            }
        })
        .collect();

    let stages: Vec<StageView> = record
        .stages()
        .iter()
        .map(|stage| {
            let topics = stage
                .topics
                .iter()
                .enumerate()
                .map(|(index, &title)| {
                    let topic = TopicId { stage: stage.level, index };
                    let next = progress.toggled(topic).to_param();
                    let done = (!next.is_empty()).then_some(next.as_str());
                    TopicView {
                        id: topic.to_string(),
                        title,
                        completed: progress.is_completed(topic),
                        toggle_href: link(&path, &with_param(&pairs, PARAM_DONE, done)),
                    }
                })
                .collect();
            StageView {
                id: stage.id(),
                title: stage.title(),
                completed: progress.completed_in_stage(stage.level),
                total: stage.topics.len(),
                topics,
            }
        })
        .collect();

    let html = state.templates.page("roadmap.html", context! {
        active => "technologies",
        tech => record,
        category_label => record.category.label(),
        level_class => level_class(record.level),
        tab => tab.id(),
        tabs => tabs,
        stages => stages,
        completed => progress.completed_count(),
        total => record.topic_count(),
        percentage => progress.rounded_percentage(record),
        back_href => back_href,
        reset_progress_href => link(&path, &with_param(&pairs, PARAM_DONE, None)),
    })?;
    Ok(html.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_link_omits_empty_query() {
        assert_eq!(link("/technologies", &[]), "/technologies");
        assert_eq!(
            link("/technologies", &pairs(&[("view", "list")])),
            "/technologies?view=list"
        );
    }

    #[test]
    fn test_view_mode_defaults_to_grid() {
        assert_eq!(ViewMode::from_pairs(&[]), ViewMode::Grid);
        assert_eq!(ViewMode::from_pairs(&pairs(&[("view", "list")])), ViewMode::List);
        assert_eq!(ViewMode::from_pairs(&pairs(&[("view", "tiles")])), ViewMode::Grid);
    }
}
