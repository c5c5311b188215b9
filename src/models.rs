//! Domain types: consultation categories, stored records, and the
//! hardcoded health-article list.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Closed set of consultation topics, shared by the form's select box and
/// the health-article list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    #[default]
    Pregnancy,
    Postpartum,
    Breastfeeding,
    WomensHealth,
    Other,
}

impl Category {
    /// Human-readable label shown in the form and on article cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pregnancy => "Pregnancy & Birth",
            Self::Postpartum => "Postpartum Care",
            Self::Breastfeeding => "Breastfeeding",
            Self::WomensHealth => "Women's Health",
            Self::Other => "Other",
        }
    }

    /// `(value, label)` pairs for rendering the category select box, in
    /// declaration order. The first entry doubles as the default choice.
    pub fn choices() -> Vec<(String, &'static str)> {
        Self::iter().map(|c| (c.to_string(), c.label())).collect()
    }

    /// Lenient parse: anything outside the closed set falls back to the
    /// default rather than rejecting the submission.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// An accepted consultation submission.
#[derive(Debug, Clone, Serialize)]
pub struct Consultation {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: String,
    pub category: Category,
    pub message: String,
    /// Fixed at creation, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

/// A health-information article summary.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub title: &'static str,
    pub summary: &'static str,
    pub category: Category,
}

/// The fixed article list served on `/health-info`. This is configuration
/// data, not a content-management system.
pub fn health_articles() -> Vec<Article> {
    vec![
        Article {
            title: "Early Pregnancy: What to Expect",
            summary: "The first trimester brings big changes. Practical ways \
                      to cope with morning sickness, fatigue, and sleepiness.",
            category: Category::Pregnancy,
        },
        Article {
            title: "Postpartum Pelvic Care",
            summary: "The pelvis is loosened after birth. The right care \
                      supports your body's recovery and posture.",
            category: Category::Postpartum,
        },
        Article {
            title: "Breastfeeding Basics",
            summary: "Latching positions, feeding frequency, and what to do \
                      when nursing gets difficult.",
            category: Category::Breastfeeding,
        },
        Article {
            title: "Women's Health Through Every Life Stage",
            summary: "From adolescence to menopause, a woman's body keeps \
                      changing. Key care points for each stage.",
            category: Category::WomensHealth,
        },
    ]
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn category_string_forms_round_trip() {
        for c in Category::iter() {
            assert_eq!(Category::parse_or_default(&c.to_string()), c);
        }
        assert_eq!(Category::WomensHealth.to_string(), "womens_health");
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        assert_eq!(Category::parse_or_default("astrology"), Category::Pregnancy);
        assert_eq!(Category::parse_or_default(""), Category::Pregnancy);
    }

    #[test]
    fn choices_start_with_the_default() {
        let choices = Category::choices();
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0].0, "pregnancy");
    }

    #[test]
    fn exactly_four_articles_with_known_categories() {
        let articles = health_articles();
        assert_eq!(articles.len(), 4);
        assert!(articles.iter().all(|a| a.category != Category::Other));
    }
}
