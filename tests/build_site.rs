//! End-to-end build tests: generate a full site into a temp directory and
//! walk the written pages the way a visitor would click through them.

use std::fs;
use std::path::Path;
use studio_page::catalog::Catalog;
use studio_page::config::SiteConfig;
use studio_page::site;

fn build_site() -> tempfile::TempDir {
    let tmp = tempfile::TempDir::new().unwrap();
    site::generate(&Catalog::stock(), &SiteConfig::default(), tmp.path()).unwrap();
    tmp
}

fn read_page(root: &Path, href: &str) -> String {
    let rel = href.trim_start_matches('/');
    let path = if rel.is_empty() {
        root.join("index.html")
    } else {
        root.join(rel).join("index.html")
    };
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// Extract the href the page's nav uses for a section label.
fn nav_href(html: &str, label: &str) -> String {
    let needle = format!(">{label}</a>");
    let end = html.find(&needle).unwrap_or_else(|| panic!("no nav link {label}"));
    let head = &html[..end];
    let start = head.rfind("href=\"").unwrap() + "href=\"".len();
    head[start..head.rfind('"').unwrap()].to_string()
}

// Scenario A: the landing page is home with no filter, previewing the first
// six catalog images in catalog order.
#[test]
fn scenario_a_initial_state() {
    let tmp = build_site();
    let html = read_page(tmp.path(), "/");

    assert!(html.contains("Story-driven photography"));
    let catalog = Catalog::stock();
    let mut last = 0;
    for record in catalog.hero_preview() {
        let escaped = record.url.replace('&', "&amp;");
        let pos = html.find(&escaped).expect("hero preview image");
        assert!(pos >= last);
        last = pos;
    }
    // The hero shows six of eight; the last two only appear in the portfolio
    assert!(!html.contains(&catalog.images()[7].url));
}

// Scenario B: navigate to the portfolio, pick the wildlife filter, land on
// the three wildlife records in catalog order.
#[test]
fn scenario_b_wildlife_filter() {
    let tmp = build_site();

    let home = read_page(tmp.path(), "/");
    let portfolio = read_page(tmp.path(), &nav_href(&home, "Portfolio"));
    let wildlife_href = nav_href(&portfolio, "Wildlife");
    assert_eq!(wildlife_href, "/portfolio/wildlife/");

    let wildlife = read_page(tmp.path(), &wildlife_href);
    let fox = wildlife.find("Fox in snow").unwrap();
    let bird = wildlife.find("Bird in flight").unwrap();
    let cat = wildlife.find("Curious cat").unwrap();
    assert!(fox < bird && bird < cat);
    assert!(!wildlife.contains("Forest path"));
}

// Scenario C: pick the landscape filter, visit pricing, come back to the
// portfolio — the landscape filter is still active.
#[test]
fn scenario_c_filter_persists_across_navigation() {
    let tmp = build_site();

    let landscape = read_page(tmp.path(), "/portfolio/landscape/");
    let pricing = read_page(tmp.path(), &nav_href(&landscape, "Pricing"));
    let back = read_page(tmp.path(), &nav_href(&pricing, "Portfolio"));

    assert!(back.contains(r#"class="chip active" href="/portfolio/landscape/""#));
    assert!(back.contains("Mountain sunrise"));
    assert!(back.contains("Misty woods"));
    assert!(!back.contains("Fox in snow"));
}

// Scenario D: the booking page carries the six-field form with the
// sessionType select defaulting to Portraits.
#[test]
fn scenario_d_booking_form() {
    let tmp = build_site();
    let html = read_page(tmp.path(), "/booking/all/");

    let form = &html[html.find("<form").unwrap()..html.find("</form>").unwrap()];
    for field in ["name", "email", "phone", "sessionType", "date", "message"] {
        assert!(form.contains(&format!(r#"name="{field}""#)), "missing {field}");
    }
    assert_eq!(form.matches("name=\"").count(), 6);
    assert!(form.contains("<option selected>Portraits</option>"));
    assert!(form.contains(r#"action="https://formspree.io/f/your-form-id""#));
}

#[test]
fn every_page_renders_one_section_and_a_footer() {
    let tmp = build_site();
    let summary_json = fs::read_to_string(tmp.path().join("site.json")).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&summary_json).unwrap();
    let pages = summary["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 20);

    for page in pages {
        let path = page["path"].as_str().unwrap();
        let html = fs::read_to_string(tmp.path().join(path)).unwrap();
        assert_eq!(html.matches("<section").count(), 1, "page {path}");
        assert!(html.contains("All rights reserved"), "page {path}");
    }
}

#[test]
fn config_overrides_flow_into_the_pages() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut config = SiteConfig::default();
    config.title = "North Light Studio".to_string();
    config.booking.endpoint = "https://forms.example/nl".to_string();
    site::generate(&Catalog::stock(), &config, tmp.path()).unwrap();

    let home = read_page(tmp.path(), "/");
    assert!(home.contains("North Light Studio"));

    let booking = read_page(tmp.path(), "/booking/all/");
    assert!(booking.contains(r#"action="https://forms.example/nl""#));
}
