//! # Studio Page
//!
//! A single-page static site generator for photography studios: hero,
//! filterable gallery, pricing, booking form, contact block and footer,
//! rendered to plain HTML with zero client-side JavaScript.
//!
//! # Architecture: Pre-Rendered State Matrix
//!
//! The site the original single-page app presents is driven by exactly two
//! state cells: the active section (home, portfolio, pricing, booking,
//! contact) and the gallery category filter (all, landscape, portraits,
//! wildlife). That state space is finite — twenty combinations — so instead
//! of shipping a client runtime, every reachable state is rendered ahead of
//! time as its own page:
//!
//! ```text
//! ViewState (section × filter)  →  render::render_page  →  dist/{section}/{filter}/
//! ```
//!
//! Links between pages carry the source page's filter, which makes the
//! filter persist across section navigation exactly as it does in a
//! client-rendered original — but as a property of the link graph rather
//! than of any runtime.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | The two state cells, their slugs, and the page matrix |
//! | [`catalog`] | Fixed content: images, pricing tiers, FAQ, session types |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`render`] | Pure Maud renderers — one section block per page, exhaustively matched |
//! | [`site`] | Writes the rendered matrix plus a `site.json` build summary |
//! | [`output`] | CLI output formatting for build and check reports |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Exhaustive Section Dispatch
//!
//! The section chooser is a `match` over [`state::ActiveSection`], not a
//! chain of conditionals. Exactly one section block exists in any page's
//! output, and adding a section is a compile-time-checked change — the
//! match, the navigation, and the page matrix all follow the enum.
//!
//! ## External References Stay External
//!
//! Gallery image URLs and the booking form endpoint are references to
//! systems this generator does not own. Images are never fetched or
//! validated; the form POSTs straight to the configured endpoint and no
//! response handling exists anywhere. The generator's responsibility ends
//! at emitting the references.

pub mod catalog;
pub mod config;
pub mod output;
pub mod render;
pub mod site;
pub mod state;
