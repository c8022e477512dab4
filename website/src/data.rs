//! Portfolio content, loaded from the embedded `site.toml`

use std::collections::BTreeSet;

use folio_app::config::{validate_settings, Settings};
use serde::Deserialize;

const SITE_TOML: &str = include_str!("../site.toml");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteFile {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: String,
    pub read_minutes: u32,
}

/// Parse the embedded site file.
///
/// A broken file renders an empty page with default behaviour rather than
/// panicking.
pub fn site() -> SiteFile {
    let mut site = match toml::from_str::<SiteFile>(SITE_TOML) {
        Ok(site) => site,
        Err(e) => {
            log::error!("site.toml is invalid: {}", e);
            return SiteFile::default();
        }
    };
    if let Err(e) = validate_settings(&site.settings) {
        log::warn!("Ignoring [settings]: {}", e);
        site.settings = Settings::default();
    }
    site
}

/// Distinct categories in first-seen order.
pub fn categories<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Human label for a category value (`web` -> `Web`).
pub fn category_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
