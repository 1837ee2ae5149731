//! Knowledge hub catalog.
//!
//! The NICE guidance pages the hub links to. The front end lists these and
//! hands a guideline's `url` to the fetch endpoint when the reader opens it.

use serde::Serialize;

/// One guidance page in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guideline {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub static NICE_GUIDELINES: [Guideline; 6] = [
    Guideline {
        title: "Depression & Anxiety",
        description: "Evidence-based guidance on managing depression and anxiety disorders",
        url: "https://www.nice.org.uk/guidance/ng222",
    },
    Guideline {
        title: "Sleep Disorders",
        description: "Comprehensive guidance on assessment and management of sleep disorders",
        url: "https://www.nice.org.uk/guidance/ng195",
    },
    Guideline {
        title: "Weight Management",
        description: "Evidence-based approaches to weight management and obesity",
        url: "https://www.nice.org.uk/guidance/ng189",
    },
    Guideline {
        title: "Physical Activity",
        description: "Recommendations for physical activity and exercise benefits",
        url: "https://www.nice.org.uk/guidance/ng180",
    },
    Guideline {
        title: "Nutrition & Diet",
        description: "Nutritional guidance for healthy eating and disease prevention",
        url: "https://www.nice.org.uk/guidance/cg189",
    },
    Guideline {
        title: "Stress & Resilience",
        description: "Building resilience and managing workplace stress effectively",
        url: "https://www.nice.org.uk/guidance/ng205",
    },
];

/// All catalog entries, in display order.
pub fn guidelines() -> &'static [Guideline] {
    &NICE_GUIDELINES
}
