//! The fixed site content: gallery images, pricing tiers, FAQ entries.
//!
//! All content is defined once at startup and never mutated. The catalog is
//! the single source of truth for ordering — the "all" gallery view and the
//! hero preview both follow insertion order.

use crate::state::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Collection an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Landscape,
    Portraits,
    Wildlife,
}

impl Category {
    /// Display label, matching the filter chips.
    pub fn label(self) -> &'static str {
        match self {
            Category::Landscape => "Landscape & Nature",
            Category::Portraits => "Portraits",
            Category::Wildlife => "Wildlife",
        }
    }
}

/// One gallery image. The URL is an external reference — never fetched,
/// validated or cached; rendering just emits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub url: String,
    pub alt: String,
    pub category: Category,
}

impl ImageRecord {
    fn new(url: &str, alt: &str, category: Category) -> Self {
        Self {
            url: url.to_string(),
            alt: alt.to_string(),
            category,
        }
    }
}

/// Number of catalog entries shown in the home hero preview grid.
pub const HERO_PREVIEW_COUNT: usize = 6;

/// The ordered image catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    images: Vec<ImageRecord>,
}

impl Catalog {
    /// The stock catalog: eight images across the three collections.
    pub fn stock() -> Self {
        Self {
            images: vec![
                ImageRecord::new(
                    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=1200",
                    "Mountain sunrise",
                    Category::Landscape,
                ),
                ImageRecord::new(
                    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1200",
                    "Forest path",
                    Category::Landscape,
                ),
                ImageRecord::new(
                    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1200&sat=-50",
                    "Misty woods",
                    Category::Landscape,
                ),
                ImageRecord::new(
                    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=1200",
                    "Portrait in golden hour",
                    Category::Portraits,
                ),
                ImageRecord::new(
                    "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?w=1200",
                    "Studio portrait",
                    Category::Portraits,
                ),
                ImageRecord::new(
                    "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?w=1200",
                    "Fox in snow",
                    Category::Wildlife,
                ),
                ImageRecord::new(
                    "https://images.unsplash.com/photo-1501706362039-c06b2d715385?w=1200",
                    "Bird in flight",
                    Category::Wildlife,
                ),
                ImageRecord::new(
                    "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?w=1200",
                    "Curious cat",
                    Category::Wildlife,
                ),
            ],
        }
    }

    /// All images in display order.
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Images passing the given filter, in catalog order.
    pub fn visible(&self, filter: CategoryFilter) -> Vec<&ImageRecord> {
        self.images
            .iter()
            .filter(|record| filter.accepts(record.category))
            .collect()
    }

    /// The first six images, used by the home hero grid.
    pub fn hero_preview(&self) -> &[ImageRecord] {
        &self.images[..HERO_PREVIEW_COUNT.min(self.images.len())]
    }
}

/// One pricing card. No relation to booking state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTier {
    pub title: String,
    pub price: String,
    pub features: Vec<String>,
}

impl PricingTier {
    fn new(title: &str, price: &str, features: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            price: price.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// The three stock session packages.
    pub fn stock() -> Vec<PricingTier> {
        vec![
            PricingTier::new(
                "Portrait Session",
                "$249",
                &[
                    "Up to 60 minutes",
                    "One location",
                    "20 edited images",
                    "Online gallery & print rights",
                ],
            ),
            PricingTier::new(
                "Landscape Print Package",
                "$199+",
                &[
                    "Open edition prints",
                    "Archival paper options",
                    "Framing available",
                    "Worldwide shipping",
                ],
            ),
            PricingTier::new(
                "Wildlife/Field Day",
                "$499",
                &[
                    "Half-day coverage",
                    "On-location scouting",
                    "30+ edited images",
                    "Commercial licensing available",
                ],
            ),
        ]
    }
}

/// One contact-page FAQ entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub topic: String,
    pub answer: String,
}

impl FaqEntry {
    fn new(topic: &str, answer: &str) -> Self {
        Self {
            topic: topic.to_string(),
            answer: answer.to_string(),
        }
    }

    /// The three stock FAQ entries.
    pub fn stock() -> Vec<FaqEntry> {
        vec![
            FaqEntry::new(
                "Turnaround",
                "5–7 days for portraits; 7–10 days for wildlife/landscapes.",
            ),
            FaqEntry::new(
                "Delivery",
                "Online gallery with high-res downloads and print store.",
            ),
            FaqEntry::new(
                "Copyright",
                "Personal print rights included; commercial licensing available.",
            ),
        ]
    }
}

/// Session type offered on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionType {
    #[default]
    Portraits,
    LandscapeNature,
    Wildlife,
    EventOther,
}

impl SessionType {
    /// All session types in form display order.
    pub const ALL: [SessionType; 4] = [
        SessionType::Portraits,
        SessionType::LandscapeNature,
        SessionType::Wildlife,
        SessionType::EventOther,
    ];

    /// Option label submitted as the `sessionType` form value.
    pub fn label(self) -> &'static str {
        match self {
            SessionType::Portraits => "Portraits",
            SessionType::LandscapeNature => "Landscape & Nature",
            SessionType::Wildlife => "Wildlife",
            SessionType::EventOther => "Event/Other",
        }
    }
}
