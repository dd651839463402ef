//! HTML rendering for every page of the site.
//!
//! All functions here are pure: (view state, catalog, config) in, [`Markup`]
//! out. No I/O — writing pages to disk is [`crate::site`]'s job.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.
//!
//! The section dispatch in [`render_page`] is an exhaustive match over
//! [`ActiveSection`], so exactly one section block exists per page and adding
//! a section is a compile-time-checked change. Every link on a page carries
//! that page's filter, which is how the gallery filter survives navigation
//! between sections.

use crate::catalog::{Catalog, FaqEntry, PricingTier, SessionType};
use crate::config::SiteConfig;
use crate::state::{ActiveSection, CategoryFilter, ViewState};
use maud::{DOCTYPE, Markup, html};

/// Fine print under the pricing cards.
const PRICING_ADDONS: &str = "Add-ons: additional retouched images ($15 each), \
    expedited delivery (48h, $50), extra location ($30), hair & makeup (from $120).";

/// Fine print under the booking form.
const BOOKING_DEPOSIT: &str =
    "Deposit: 25% due upon confirmation. Travel beyond 25 miles billed at $0.65/mi.";

/// Renders the complete HTML document for one view state.
pub fn render_page(
    state: ViewState,
    catalog: &Catalog,
    config: &SiteConfig,
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(state, config))
        main {
            @match state.section {
                ActiveSection::Home => (home_section(state, catalog, config)),
                ActiveSection::Portfolio => (portfolio_section(state, catalog)),
                ActiveSection::Pricing => (pricing_section(state)),
                ActiveSection::Booking => (booking_section(config)),
                ActiveSection::Contact => (contact_section(config)),
            }
        }
        (site_footer(state, config))
    };

    let title = match state.section {
        ActiveSection::Home => config.title.clone(),
        section => format!("{} — {}", section.label(), config.title),
    };
    base_document(&title, css, content)
}

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the sticky header: studio name plus the five section links.
///
/// The active section is marked `current`; every link keeps the page's
/// filter so it is still active when the visitor returns to the portfolio.
fn site_header(state: ViewState, config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            span.brand { (config.title) }
            nav.site-nav {
                @for section in ActiveSection::ALL {
                    @let target = ViewState::new(section, state.filter);
                    a.nav-link.current[section == state.section] href=(target.href()) {
                        (section.label())
                    }
                }
            }
        }
    }
}

/// Renders the footer: copyright line and section shortcuts.
fn site_footer(state: ViewState, config: &SiteConfig) -> Markup {
    let shortcuts = [
        ActiveSection::Pricing,
        ActiveSection::Booking,
        ActiveSection::Portfolio,
    ];
    html! {
        footer.site-footer {
            p { "© " (config.copyright_year) " " (config.title) ". All rights reserved." }
            nav.footer-nav {
                @for section in shortcuts {
                    a href=(ViewState::new(section, state.filter).href()) { (section.label()) }
                }
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Hero: headline, tagline, the two calls to action and a six-image preview.
fn home_section(state: ViewState, catalog: &Catalog, config: &SiteConfig) -> Markup {
    let book = ViewState::new(ActiveSection::Booking, state.filter);
    let portfolio = ViewState::new(ActiveSection::Portfolio, state.filter);

    html! {
        section.hero {
            div.hero-copy {
                h1 {
                    "Story-driven photography for "
                    em { "landscapes" } ", "
                    em { "portraits" } ", and "
                    em { "wildlife" } "."
                }
                p.tagline { (config.tagline) }
                div.hero-actions {
                    a.button.primary href=(book.href()) { "Book a Session" }
                    a.button href=(portfolio.href()) { "View Portfolio" }
                }
                ul.hero-features {
                    li { "Editing included" }
                    li { "Print-ready files" }
                    li { "Travel available" }
                }
            }
            div.hero-preview {
                @for record in catalog.hero_preview() {
                    img src=(record.url) alt=(record.alt) loading="lazy";
                }
            }
        }
    }
}

/// Portfolio: filter chips plus the visible slice of the catalog.
fn portfolio_section(state: ViewState, catalog: &Catalog) -> Markup {
    html! {
        section.portfolio {
            header.portfolio-header {
                h2 { "Portfolio" }
                p { "Browse by collection: landscapes & nature, portraits, and wildlife." }
                nav.filter-chips {
                    @for filter in CategoryFilter::ALL {
                        @let target = ViewState::new(ActiveSection::Portfolio, filter);
                        a.chip.active[filter == state.filter] href=(target.href()) {
                            (filter.label())
                        }
                    }
                }
            }
            div.gallery-grid {
                @for record in catalog.visible(state.filter) {
                    figure.gallery-card {
                        img src=(record.url) alt=(record.alt) loading="lazy";
                        figcaption {
                            span.category { (record.category.label()) }
                            a href=(record.url) target="_blank" rel="noreferrer" { "Open" }
                        }
                    }
                }
            }
        }
    }
}

/// Pricing: the three tier cards, each with a booking call to action.
fn pricing_section(state: ViewState) -> Markup {
    let book = ViewState::new(ActiveSection::Booking, state.filter);

    html! {
        section.pricing {
            h2 { "Pricing" }
            p { "Transparent, session-based pricing. Custom packages available on request." }
            div.tier-grid {
                @for tier in PricingTier::stock() {
                    div.tier-card {
                        h3 { (tier.title) }
                        div.price { (tier.price) }
                        ul {
                            @for feature in &tier.features {
                                li { (feature) }
                            }
                        }
                        a.button.primary href=(book.href()) { "Book this" }
                    }
                }
            }
            p.fine-print { (PRICING_ADDONS) }
        }
    }
}

/// Booking: the six-field form posting to the configured external endpoint.
///
/// Submission is entirely the endpoint's business — no response handling,
/// no retries, no client-side validation beyond `required`.
fn booking_section(config: &SiteConfig) -> Markup {
    html! {
        section.booking {
            h2 { "Book a Session" }
            p { "Fill the form and I'll reply within 24 hours with availability and next steps." }
            form.booking-form action=(config.booking.endpoint) method="POST" {
                input name="name" placeholder="Your name" required;
                input name="email" type="email" placeholder="Email" required;
                input name="phone" placeholder="Phone (optional)";
                select name="sessionType" required {
                    @for session in SessionType::ALL {
                        option selected[session == SessionType::default()] {
                            (session.label())
                        }
                    }
                }
                input name="date" type="date";
                textarea name="message" rows="5" placeholder="Tell me about your vision…" {}
                button type="submit" { "Submit Booking Request" }
            }
            p.fine-print { (BOOKING_DEPOSIT) }
        }
    }
}

/// Contact: email/phone/location, social links and the FAQ box.
fn contact_section(config: &SiteConfig) -> Markup {
    let socials = [
        ("Instagram", config.social.instagram.as_deref()),
        ("Facebook", config.social.facebook.as_deref()),
        ("YouTube", config.social.youtube.as_deref()),
    ];

    html! {
        section.contact {
            h2 { "Contact" }
            div.contact-columns {
                div.contact-details {
                    p.email { (config.contact.email) }
                    p.phone { (config.contact.phone) }
                    p.location { (config.contact.location) }
                    nav.social-links {
                        @for (label, url) in socials {
                            @if let Some(url) = url {
                                a href=(url) target="_blank" rel="noreferrer" { (label) }
                            }
                        }
                    }
                }
                div.faq {
                    h3 { "FAQ" }
                    ul {
                        @for entry in FaqEntry::stock() {
                            li {
                                strong { (entry.topic) ": " }
                                (entry.answer)
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
