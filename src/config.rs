//! Site configuration module.
//!
//! Handles loading, validating and merging the site's `config.toml`. User
//! values are merged on top of stock defaults, so a config file only needs
//! the keys it wants to override. Unknown keys are rejected to catch typos
//! early.
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Nishad Adnan Photography"
//! tagline = "..."
//! copyright_year = 2026
//!
//! [contact]
//! email = "hello@nishad-photo.com"
//! phone = "(945) 400-2599"
//! location = "Denton, TX — available for travel"
//!
//! [social]
//! instagram = "https://instagram.com/..."   # optional
//! facebook = "https://facebook.com/..."     # optional
//! youtube = "https://youtube.com/..."       # optional
//!
//! [booking]
//! endpoint = "https://formspree.io/f/your-form-id"
//!
//! [colors.light]
//! background = "#ffffff"
//! # ... see stock_config_toml() for the full key set
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have stock defaults reproducing the reference studio site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Studio name, shown in the header and the copyright line.
    pub title: String,
    /// One-line pitch under the hero headline.
    pub tagline: String,
    /// Year printed in the footer copyright line.
    pub copyright_year: u32,
    /// Contact block content.
    pub contact: ContactConfig,
    /// Social profile links (omitted links are not rendered).
    pub social: SocialConfig,
    /// Booking form settings.
    pub booking: BookingConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Nishad Adnan Photography".to_string(),
            tagline: "I capture honest moments and timeless scenes—from alpine sunrises \
                      to candid portraits and the quiet drama of the wild."
                .to_string(),
            copyright_year: 2026,
            contact: ContactConfig::default(),
            social: SocialConfig::default(),
            booking: BookingConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.contact.email.trim().is_empty() {
            return Err(ConfigError::Validation(
                "contact.email must not be empty".into(),
            ));
        }
        let endpoint = &self.booking.endpoint;
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "booking.endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        Ok(())
    }
}

/// Contact section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@nishad-photo.com".to_string(),
            phone: "(945) 400-2599".to_string(),
            location: "Denton, TX — available for travel".to_string(),
        }
    }
}

/// Social profile links. Absent entries are simply not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
}

/// Booking form settings.
///
/// The form posts directly to the external endpoint; this system never sees
/// the submission or its response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookingConfig {
    /// External form-submission endpoint (e.g. a Formspree form URL).
    pub endpoint: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formspree.io/f/your-form-id".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (taglines, captions, footer).
    pub text_muted: String,
    /// Card and chip border color.
    pub border: String,
    /// Fill color for primary buttons and the active nav/chip state.
    pub accent: String,
    /// Text color on accent-filled elements.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
            accent: "#000000".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#e5e7eb".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#333333".to_string(),
            accent: "#ffffff".to_string(),
            accent_text: "#000000".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Studio Page Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need;
# only the keys you set override the stock defaults.
# Unknown keys will cause an error.

# Studio name, shown in the header and the footer copyright line.
title = "Nishad Adnan Photography"

# One-line pitch rendered under the hero headline.
tagline = "I capture honest moments and timeless scenes—from alpine sunrises to candid portraits and the quiet drama of the wild."

# Year printed in the footer copyright line.
copyright_year = 2026

# ---------------------------------------------------------------------------
# Contact section
# ---------------------------------------------------------------------------
[contact]
email = "hello@nishad-photo.com"
phone = "(945) 400-2599"
location = "Denton, TX — available for travel"

# ---------------------------------------------------------------------------
# Social links (remove a line to hide that link)
# ---------------------------------------------------------------------------
[social]
# instagram = "https://instagram.com/your-handle"
# facebook = "https://facebook.com/your-page"
# youtube = "https://youtube.com/@your-channel"

# ---------------------------------------------------------------------------
# Booking form
# ---------------------------------------------------------------------------
[booking]
# External form-submission endpoint. The generated form POSTs straight to
# this URL; replace with your own Formspree form (or any compatible backend).
endpoint = "https://formspree.io/f/your-form-id"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1f2937"
text_muted = "#6b7280"    # Taglines, captions, footer
border = "#e5e7eb"
accent = "#000000"        # Primary buttons, active nav/chip
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#e5e7eb"
text_muted = "#9ca3af"
border = "#333333"
accent = "#ffffff"
accent_text = "#000000"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
    --color-accent-text: {light_accent_text};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
        --color-accent-text: {dark_accent_text};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        light_accent_text = colors.light.accent_text,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
        dark_accent_text = colors.dark.accent_text,
    )
}
