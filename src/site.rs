//! Site generation: writes the rendered page matrix to disk.
//!
//! The site's state space is finite — five sections times four gallery
//! filters — so every reachable state becomes its own static page:
//!
//! ```text
//! dist/
//! ├── index.html                  # home + all (the default state)
//! ├── site.json                   # build summary manifest
//! ├── home/
//! │   ├── landscape/index.html    # home with a persisted filter
//! │   └── ...
//! ├── portfolio/
//! │   ├── all/index.html
//! │   ├── landscape/index.html
//! │   ├── portraits/index.html
//! │   └── wildlife/index.html
//! ├── pricing/…  booking/…  contact/…
//! ```
//!
//! Links between pages carry the source page's filter, so the published site
//! behaves like the single-page original — the gallery filter survives
//! navigating away and back — with no JavaScript at all.
//!
//! CSS is embedded into every page: color custom properties generated from
//! config, followed by the static stylesheet compiled in via `include_str!`.

use crate::catalog::Catalog;
use crate::config::{self, SiteConfig};
use crate::render;
use crate::state::{ActiveSection, CategoryFilter, ViewState};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// One written page, as recorded in the build summary.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPage {
    pub section: ActiveSection,
    pub filter: CategoryFilter,
    /// Output path relative to the output directory.
    pub path: String,
}

/// Build summary, written to `site.json` next to the pages.
///
/// Human-readable record of what a build produced, in the same spirit as a
/// pipeline manifest: inspectable, diffable, useful when a deploy looks off.
#[derive(Debug, Serialize)]
pub struct SiteSummary {
    pub title: String,
    pub pages: Vec<GeneratedPage>,
}

impl SiteSummary {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Output file path for a view state, relative to the output directory.
fn page_path(state: ViewState) -> String {
    if state == ViewState::default() {
        "index.html".to_string()
    } else {
        format!("{}/{}/index.html", state.section.slug(), state.filter.slug())
    }
}

/// Render and write every page of the site, plus the `site.json` summary.
pub fn generate(
    catalog: &Catalog,
    site_config: &SiteConfig,
    output_dir: &Path,
) -> Result<SiteSummary, SiteError> {
    let color_css = config::generate_color_css(&site_config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::new();
    for state in ViewState::matrix() {
        let path = page_path(state);
        let file = output_dir.join(&path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        let html = render::render_page(state, catalog, site_config, &css);
        fs::write(&file, html.into_string())?;
        pages.push(GeneratedPage {
            section: state.section,
            filter: state.filter,
            path,
        });
    }

    let summary = SiteSummary {
        title: site_config.title.clone(),
        pages,
    };
    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(output_dir.join("site.json"), json)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_state_is_the_root_page() {
        assert_eq!(page_path(ViewState::default()), "index.html");
    }

    #[test]
    fn matrix_states_get_nested_paths() {
        let state = ViewState::new(ActiveSection::Portfolio, CategoryFilter::Wildlife);
        assert_eq!(page_path(state), "portfolio/wildlife/index.html");
    }

    #[test]
    fn generate_writes_the_full_matrix() {
        let tmp = TempDir::new().unwrap();
        let summary =
            generate(&Catalog::stock(), &SiteConfig::default(), tmp.path()).unwrap();

        assert_eq!(summary.page_count(), 20);
        assert!(tmp.path().join("index.html").exists());
        for section in ActiveSection::ALL {
            for filter in CategoryFilter::ALL {
                let state = ViewState::new(section, filter);
                assert!(
                    tmp.path().join(page_path(state)).exists(),
                    "missing page for {state:?}"
                );
            }
        }
    }

    #[test]
    fn generate_embeds_config_colors_in_pages() {
        let tmp = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.colors.light.background = "#fdfdfd".to_string();
        generate(&Catalog::stock(), &config, tmp.path()).unwrap();

        let html = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(html.contains("--color-bg: #fdfdfd"));
    }

    #[test]
    fn generate_writes_the_summary_manifest() {
        let tmp = TempDir::new().unwrap();
        generate(&Catalog::stock(), &SiteConfig::default(), tmp.path()).unwrap();

        let json = fs::read_to_string(tmp.path().join("site.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Nishad Adnan Photography");
        assert_eq!(value["pages"].as_array().unwrap().len(), 20);
        assert_eq!(value["pages"][0]["path"], "index.html");
    }
}
