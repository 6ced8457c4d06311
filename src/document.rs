//! Article data model at the core's boundary.
//!
//! `Document` is the immutable input the content store hands over (only
//! published, non-deleted articles are eligible; that filtering happens
//! upstream). `ScoredCandidate` is the output annotation: the same article
//! plus a similarity score derived for one request, never persisted back.

use crate::Error;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Article category, from the platform's closed category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Campus and industry technology coverage.
    Technology,
    /// Hackathon announcements and recaps.
    Hackathons,
    /// Faculty and student research.
    Research,
    /// Student clubs and societies.
    Clubs,
    /// Startup and entrepreneurship stories.
    Startup,
    /// Personal finance and funding coverage.
    Finance,
    /// Campus life and culture.
    Lifestyle,
}

impl Category {
    /// Display name, as shown on the site and used as an index term source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Hackathons => "Hackathons",
            Self::Research => "Research",
            Self::Clubs => "Clubs",
            Self::Startup => "Startup",
            Self::Finance => "Finance",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Technology" => Ok(Self::Technology),
            "Hackathons" => Ok(Self::Hackathons),
            "Research" => Ok(Self::Research),
            "Clubs" => Ok(Self::Clubs),
            "Startup" => Ok(Self::Startup),
            "Finance" => Ok(Self::Finance),
            "Lifestyle" => Ok(Self::Lifestyle),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// One published article, as supplied by the content store.
///
/// Serde field names follow the platform's export format (Mongo-style `_id`,
/// `subTitle`, `createdAt`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Opaque identifier, unique within one corpus.
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: String,
    /// Article title.
    pub title: String,
    /// Article subtitle.
    #[cfg_attr(feature = "serde", serde(rename = "subTitle", default))]
    pub subtitle: String,
    /// Category from the closed list.
    pub category: Category,
    /// Display image reference, passed through to output untouched.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    /// Publication timestamp.
    #[cfg_attr(feature = "serde", serde(rename = "createdAt"))]
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// The text fed to the tokenizer: title, subtitle, and category display
    /// name, joined by single spaces, in that fixed order.
    pub fn composed_text(&self) -> String {
        format!("{} {} {}", self.title, self.subtitle, self.category)
    }
}

/// A document plus its similarity to one query document, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredCandidate {
    /// The recommended article, display fields intact.
    pub document: Document,
    /// Cosine similarity against the query document's vector.
    pub similarity: f64,
}

impl ScoredCandidate {
    /// Human-readable match percentage for rendering.
    pub fn match_percent(&self) -> u32 {
        (self.similarity * 100.0).round() as u32
    }
}

/// Check that every document id is unique within the corpus.
///
/// The ranking path trusts its caller on this; ingestion points (e.g. the CLI
/// loading an exported corpus) should validate before recommending.
pub fn check_unique_ids(documents: &[Document]) -> Result<(), Error> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
    for doc in documents {
        if !seen.insert(&doc.id) {
            return Err(Error::DuplicateDocumentId(doc.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            title: "t".to_string(),
            subtitle: String::new(),
            category: Category::Clubs,
            image: None,
            created_at: Utc.with_ymd_and_hms(2025, 4, 21, 7, 6, 37).unwrap(),
        }
    }

    #[test]
    fn category_round_trips_through_display() {
        for cat in [
            Category::Technology,
            Category::Hackathons,
            Category::Research,
            Category::Clubs,
            Category::Startup,
            Category::Finance,
            Category::Lifestyle,
        ] {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
    }

    #[test]
    fn every_platform_export_category_parses() {
        // The full category set observed in the platform's article export.
        for name in [
            "Technology",
            "Hackathons",
            "Research",
            "Clubs",
            "Startup",
            "Finance",
            "Lifestyle",
        ] {
            assert!(name.parse::<Category>().is_ok(), "category {name} rejected");
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "Sports".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(ref s) if s == "Sports"));
    }

    #[test]
    fn composed_text_order_is_title_subtitle_category() {
        let mut d = doc("1");
        d.title = "AI Research Lab".to_string();
        d.subtitle = "Pioneering".to_string();
        d.category = Category::Technology;
        assert_eq!(d.composed_text(), "AI Research Lab Pioneering Technology");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let docs = vec![doc("a"), doc("b"), doc("a")];
        let err = check_unique_ids(&docs).unwrap_err();
        assert!(matches!(err, Error::DuplicateDocumentId(ref s) if s == "a"));
        assert!(check_unique_ids(&docs[..2]).is_ok());
    }

    #[test]
    fn match_percent_rounds() {
        let c = ScoredCandidate {
            document: doc("a"),
            similarity: 0.666,
        };
        assert_eq!(c.match_percent(), 67);
    }
}
