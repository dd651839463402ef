//! View state: which section is shown and which gallery filter is active.
//!
//! The whole site is driven by two cells — [`ActiveSection`] and
//! [`CategoryFilter`] — bundled in [`ViewState`]. Every reachable combination
//! is pre-rendered as its own page, so "state transitions" in the published
//! site are plain links between pages of the matrix.
//!
//! Invalid state is unrepresentable: the mutators take the enums themselves.
//! The string boundary (CLI arguments, URL slugs) goes through [`FromStr`],
//! which returns a typed [`StateError`] for unrecognized input.

use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StateError {
    #[error("unknown section: {0:?} (expected home, portfolio, pricing, booking or contact)")]
    InvalidSection(String),
    #[error("unknown category filter: {0:?} (expected all, landscape, portraits or wildlife)")]
    InvalidCategory(String),
}

/// The section of the site currently shown. Exactly one is rendered per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSection {
    #[default]
    Home,
    Portfolio,
    Pricing,
    Booking,
    Contact,
}

impl ActiveSection {
    /// All sections in navigation order.
    pub const ALL: [ActiveSection; 5] = [
        ActiveSection::Home,
        ActiveSection::Portfolio,
        ActiveSection::Pricing,
        ActiveSection::Booking,
        ActiveSection::Contact,
    ];

    /// URL path component for this section.
    pub fn slug(self) -> &'static str {
        match self {
            ActiveSection::Home => "home",
            ActiveSection::Portfolio => "portfolio",
            ActiveSection::Pricing => "pricing",
            ActiveSection::Booking => "booking",
            ActiveSection::Contact => "contact",
        }
    }

    /// Display label used in navigation.
    pub fn label(self) -> &'static str {
        match self {
            ActiveSection::Home => "Home",
            ActiveSection::Portfolio => "Portfolio",
            ActiveSection::Pricing => "Pricing",
            ActiveSection::Booking => "Booking",
            ActiveSection::Contact => "Contact",
        }
    }
}

impl FromStr for ActiveSection {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActiveSection::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| StateError::InvalidSection(s.to_string()))
    }
}

impl fmt::Display for ActiveSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The active gallery filter. `All` shows the entire catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Landscape,
    Portraits,
    Wildlife,
}

impl CategoryFilter {
    /// All filters in chip display order.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Landscape,
        CategoryFilter::Portraits,
        CategoryFilter::Wildlife,
    ];

    /// URL path component for this filter.
    pub fn slug(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Landscape => "landscape",
            CategoryFilter::Portraits => "portraits",
            CategoryFilter::Wildlife => "wildlife",
        }
    }

    /// Display label used on filter chips.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Landscape => "Landscape & Nature",
            CategoryFilter::Portraits => "Portraits",
            CategoryFilter::Wildlife => "Wildlife",
        }
    }

    /// Whether an image of the given category passes this filter.
    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Landscape => category == Category::Landscape,
            CategoryFilter::Portraits => category == Category::Portraits,
            CategoryFilter::Wildlife => category == Category::Wildlife,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::ALL
            .into_iter()
            .find(|filter| filter.slug() == s)
            .ok_or_else(|| StateError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The two state cells that together identify a page of the site.
///
/// The cells are independent: changing the section never touches the filter
/// and vice versa, which is what makes the filter persist across navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub section: ActiveSection,
    pub filter: CategoryFilter,
}

impl ViewState {
    pub fn new(section: ActiveSection, filter: CategoryFilter) -> Self {
        Self { section, filter }
    }

    /// Replace the active section, keeping the filter.
    pub fn set_section(&mut self, section: ActiveSection) {
        self.section = section;
    }

    /// Replace the active filter, keeping the section.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Enumerate every reachable state, in section-major order.
    pub fn matrix() -> impl Iterator<Item = ViewState> {
        ActiveSection::ALL.into_iter().flat_map(|section| {
            CategoryFilter::ALL
                .into_iter()
                .map(move |filter| ViewState::new(section, filter))
        })
    }

    /// Site-root-relative href of the page for this state.
    ///
    /// The default state is the root page itself; everything else lives at
    /// `/{section}/{filter}/`.
    pub fn href(self) -> String {
        if self == ViewState::default() {
            "/".to_string()
        } else {
            format!("/{}/{}/", self.section.slug(), self.filter.slug())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_home_and_all() {
        let state = ViewState::default();
        assert_eq!(state.section, ActiveSection::Home);
        assert_eq!(state.filter, CategoryFilter::All);
    }

    #[test]
    fn set_section_keeps_filter() {
        let mut state = ViewState::default();
        state.set_filter(CategoryFilter::Landscape);
        state.set_section(ActiveSection::Pricing);
        state.set_section(ActiveSection::Portfolio);
        assert_eq!(state.filter, CategoryFilter::Landscape);
        assert_eq!(state.section, ActiveSection::Portfolio);
    }

    #[test]
    fn set_filter_keeps_section() {
        let mut state = ViewState::new(ActiveSection::Portfolio, CategoryFilter::All);
        state.set_filter(CategoryFilter::Wildlife);
        assert_eq!(state.section, ActiveSection::Portfolio);
    }

    #[test]
    fn mutators_are_idempotent() {
        let mut state = ViewState::new(ActiveSection::Booking, CategoryFilter::Portraits);
        let before = state;
        state.set_section(ActiveSection::Booking);
        state.set_filter(CategoryFilter::Portraits);
        assert_eq!(state, before);
    }

    #[test]
    fn section_slugs_round_trip() {
        for section in ActiveSection::ALL {
            assert_eq!(section.slug().parse::<ActiveSection>(), Ok(section));
        }
    }

    #[test]
    fn filter_slugs_round_trip() {
        for filter in CategoryFilter::ALL {
            assert_eq!(filter.slug().parse::<CategoryFilter>(), Ok(filter));
        }
    }

    #[test]
    fn unknown_section_is_a_typed_error() {
        assert_eq!(
            "gallery".parse::<ActiveSection>(),
            Err(StateError::InvalidSection("gallery".to_string()))
        );
    }

    #[test]
    fn unknown_filter_is_a_typed_error() {
        assert_eq!(
            "macro".parse::<CategoryFilter>(),
            Err(StateError::InvalidCategory("macro".to_string()))
        );
    }

    #[test]
    fn matrix_covers_every_pair_once() {
        let states: Vec<_> = ViewState::matrix().collect();
        assert_eq!(states.len(), 20);
        for section in ActiveSection::ALL {
            for filter in CategoryFilter::ALL {
                assert_eq!(
                    states
                        .iter()
                        .filter(|s| s.section == section && s.filter == filter)
                        .count(),
                    1
                );
            }
        }
    }

    #[test]
    fn default_state_href_is_root() {
        assert_eq!(ViewState::default().href(), "/");
    }

    #[test]
    fn href_encodes_section_and_filter() {
        let state = ViewState::new(ActiveSection::Portfolio, CategoryFilter::Wildlife);
        assert_eq!(state.href(), "/portfolio/wildlife/");
    }
}
