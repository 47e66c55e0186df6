use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};

/// Key for the full, sorted project list.
pub const ALL_PROJECTS: &str = "all";

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<ProjectMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    image: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub date: DateTime<Utc>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project file not found: {0}")]
    NotFound(String),
    #[error("Project file is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("Couldn't parse project front matter: {0}")]
    ParseError(String),
}

/// File stem of an embedded asset path, e.g. `photo-gallery.md` -> `photo-gallery`.
pub fn project_name(path: &str) -> &str {
    path.strip_suffix(".md").unwrap_or(path)
}

#[cfg(feature = "ssr")]
pub fn parse_project(path: &str, content: &str) -> Result<ProjectMeta, ProjectError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ProjectError::ParseError(path.to_string()))?;
    Ok(ProjectMeta {
        name: project_name(path).to_string(),
        title: fm.data.title,
        description: fm.data.description,
        image: fm.data.image,
        date: fm.data.date,
    })
}

#[cfg(feature = "ssr")]
fn load_project(path: &str) -> Result<ProjectMeta, ProjectError> {
    let file = Assets::get(path).ok_or_else(|| ProjectError::NotFound(path.to_string()))?;
    let content = String::from_utf8(file.data.into())
        .map_err(|_| ProjectError::Encoding(path.to_string()))?;
    parse_project(path, &content)
}

/// All embedded projects, newest first. Parsed once and memoized.
#[cfg(feature = "ssr")]
pub async fn get_projects() -> Result<Vec<ProjectMeta>, ProjectError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(r) = cache.get(ALL_PROJECTS) {
        return Ok(r.clone());
    }
    let mut projects = Assets::iter()
        .map(|s| load_project(&s))
        .collect::<Result<Vec<_>, _>>()?;
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    tracing::debug!(count = projects.len(), "loaded projects");
    cache.insert(ALL_PROJECTS.to_string(), projects.clone());
    Ok(projects)
}
