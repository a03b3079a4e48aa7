//! minijinja environment with every page template compiled in.

use axum::response::Html;
use minijinja::{context, Environment, Value};
use serde::Serialize;
use techroad_catalog::{params::QueryPairs, Category, CategoryFilter, FilterState};
use techroad_common::Result;

use crate::error::ApiError;
use crate::handlers::technologies::CATALOG_PATH;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html",         include_str!("../templates/base.html")),
    ("home.html",         include_str!("../templates/home.html")),
    ("about.html",        include_str!("../templates/about.html")),
    ("services.html",     include_str!("../templates/services.html")),
    ("technologies.html", include_str!("../templates/technologies.html")),
    ("roadmap.html",      include_str!("../templates/roadmap.html")),
    ("feedback.html",     include_str!("../templates/feedback.html")),
    ("not_found.html",    include_str!("../templates/not_found.html")),
];

/// Footer deep links that open the catalog pre-filtered to one category.
fn footer_categories() -> Value {
    let links: Vec<Value> = Category::ALL
        .into_iter()
        .map(|c| {
            let href = FilterState::default()
                .with_category(CategoryFilter::Only(c))
                .href(CATALOG_PATH, &QueryPairs::new());
            // Built from encoded query pairs, so it renders unescaped
            context! { label => c.label(), href => Value::from_safe_string(href) }
        })
        .collect();
    Value::from(links)
}

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new(site_name: &str) -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_global("site_name", site_name.to_string());
        env.add_global("footer_categories", footer_categories());
        tracing::debug!(count = TEMPLATES.len(), "Compiled page templates");
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> std::result::Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }

    pub fn page<S: Serialize>(&self, name: &str, ctx: S) -> std::result::Result<Html<String>, ApiError> {
        Ok(Html(self.render(name, ctx)?))
    }
}
