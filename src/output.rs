//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Build
//!
//! ```text
//! Nishad Adnan Photography
//! home
//!     index.html
//!     home/landscape/index.html
//!     ...
//! portfolio
//!     portfolio/all/index.html
//!     ...
//!
//! Generated 20 pages
//! ```

use crate::config::SiteConfig;
use crate::site::SiteSummary;
use crate::state::ActiveSection;

/// Format the build report: pages grouped by section plus a summary line.
pub fn format_build(summary: &SiteSummary) -> Vec<String> {
    let mut lines = vec![summary.title.clone()];
    for section in ActiveSection::ALL {
        lines.push(section.slug().to_string());
        for page in summary.pages.iter().filter(|p| p.section == section) {
            lines.push(format!("    {}", page.path));
        }
    }
    lines.push(String::new());
    lines.push(format!("Generated {} pages", summary.page_count()));
    lines
}

pub fn print_build(summary: &SiteSummary) {
    for line in format_build(summary) {
        println!("{}", line);
    }
}

/// Format the check report: the validated config at a glance.
pub fn format_check(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        config.title.clone(),
        format!("    Contact: {}", config.contact.email),
        format!("    Booking endpoint: {}", config.booking.endpoint),
    ];
    let socials = [
        ("Instagram", &config.social.instagram),
        ("Facebook", &config.social.facebook),
        ("YouTube", &config.social.youtube),
    ];
    for (label, url) in socials {
        if let Some(url) = url {
            lines.push(format!("    {}: {}", label, url));
        }
    }
    lines.push("Config is valid".to_string());
    lines
}

pub fn print_check(config: &SiteConfig) {
    for line in format_check(config) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::site;
    use tempfile::TempDir;

    #[test]
    fn build_report_groups_pages_by_section() {
        let tmp = TempDir::new().unwrap();
        let summary =
            site::generate(&Catalog::stock(), &SiteConfig::default(), tmp.path()).unwrap();

        let lines = format_build(&summary);
        assert_eq!(lines[0], "Nishad Adnan Photography");
        assert!(lines.contains(&"portfolio".to_string()));
        assert!(lines.contains(&"    portfolio/wildlife/index.html".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 20 pages");
    }

    #[test]
    fn check_report_shows_contact_and_endpoint() {
        let lines = format_check(&SiteConfig::default());
        assert!(lines.iter().any(|l| l.contains("hello@nishad-photo.com")));
        assert!(lines.iter().any(|l| l.contains("formspree.io")));
        assert_eq!(lines.last().unwrap(), "Config is valid");
    }

    #[test]
    fn check_report_lists_configured_socials_only() {
        let mut config = SiteConfig::default();
        config.social.youtube = Some("https://youtube.com/@studio".to_string());
        let lines = format_check(&config);
        assert!(lines.iter().any(|l| l.contains("YouTube")));
        assert!(!lines.iter().any(|l| l.contains("Instagram")));
    }
}
