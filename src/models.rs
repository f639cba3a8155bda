//! Data models for articles, recognized entities, and the event summary.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: Raw fetched article data (title, body text, publish date)
//! - [`Entity`]: A named span of text classified by the recognition model
//! - [`EntityLabel`]: The model's tag inventory with a catch-all for unknown tags
//! - [`EventArguments`]: Entity texts partitioned into event argument roles
//! - [`EventSummary`]: The structured result rendered at the end of a run
//!
//! Label names are serialized in the recognition model's own uppercase tag
//! scheme (`PERSON`, `WORK_OF_ART`, ...), hence the serde renames.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A news article as fetched and parsed from its source URL.
///
/// This struct represents the article before any event extraction has
/// happened. It is immutable after parsing and discarded once the run
/// completes.
#[derive(Debug, Clone)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// The readable body text extracted from the page.
    pub text: String,
    /// The publish date, when the page metadata carried one.
    pub publish_date: Option<DateTime<FixedOffset>>,
}

/// Category assigned to a recognized entity.
///
/// The inventory mirrors the tag scheme of the pretrained recognition
/// model. Tags outside the inventory deserialize to [`EntityLabel::Other`]
/// rather than failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EntityLabel {
    /// A person, real or fictional.
    #[serde(rename = "PERSON")]
    Person,
    /// A nationality, religious or political group.
    #[serde(rename = "NORP")]
    Norp,
    /// A company, agency, institution.
    #[serde(rename = "ORG")]
    Org,
    /// A geopolitical entity: country, city, state.
    #[serde(rename = "GPE")]
    Gpe,
    /// A non-GPE location: mountain range, body of water.
    #[serde(rename = "LOC")]
    Loc,
    /// A product: object, vehicle, food, etc.
    #[serde(rename = "PRODUCT")]
    Product,
    /// A title of a book, song, film, etc.
    #[serde(rename = "WORK_OF_ART")]
    WorkOfArt,
    /// An absolute or relative date or period.
    #[serde(rename = "DATE")]
    Date,
    /// Any tag outside the inventory above.
    #[serde(rename = "OTHER")]
    Other,
}

impl From<String> for EntityLabel {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "PERSON" => Self::Person,
            "NORP" => Self::Norp,
            "ORG" => Self::Org,
            "GPE" => Self::Gpe,
            "LOC" => Self::Loc,
            "PRODUCT" => Self::Product,
            "WORK_OF_ART" => Self::WorkOfArt,
            "DATE" => Self::Date,
            _ => Self::Other,
        }
    }
}

impl EntityLabel {
    /// Labels that fill the Actor role.
    pub fn is_actor(self) -> bool {
        matches!(self, Self::Person | Self::Org | Self::Norp)
    }

    /// Labels that fill the Target role. `ORG` feeds both Actor and Target.
    pub fn is_target(self) -> bool {
        matches!(self, Self::Org | Self::Product | Self::WorkOfArt)
    }

    /// Labels that fill the Location role.
    pub fn is_location(self) -> bool {
        matches!(self, Self::Gpe | Self::Loc)
    }

    /// Labels that fill the Time role.
    pub fn is_time(self) -> bool {
        matches!(self, Self::Date)
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Person => "PERSON",
            Self::Norp => "NORP",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Product => "PRODUCT",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Date => "DATE",
            Self::Other => "OTHER",
        };
        f.write_str(tag)
    }
}

/// A named entity recognized in the article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The entity text exactly as it appears in the article.
    pub text: String,
    /// The category assigned by the recognition model.
    pub label: EntityLabel,
}

/// Entity texts partitioned into event argument roles.
///
/// The role buckets are filled by a fixed label-to-role mapping; the
/// Action role is filled from matched trigger words instead of entities.
/// Serialized with the display role names as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventArguments {
    /// Who acted: `PERSON`, `ORG`, `NORP` entities.
    pub actor: Vec<String>,
    /// What happened: the matched trigger words.
    pub action: Vec<String>,
    /// What was acted upon: `ORG`, `PRODUCT`, `WORK_OF_ART` entities.
    pub target: Vec<String>,
    /// Where it happened: `GPE`, `LOC` entities.
    pub location: Vec<String>,
    /// When it happened: `DATE` entities.
    pub time: Vec<String>,
}

/// The structured summary produced for one article.
///
/// Built once per successful run, rendered as text or JSON, and dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummary {
    /// The article headline.
    pub title: String,
    /// Matched trigger words joined with `", "`, or `"None"`.
    pub event_type: String,
    /// The selected event sentences joined together, or a placeholder
    /// when no sentence matched.
    pub description: String,
    /// Every entity the model recognized, in document order.
    pub entities: Vec<Entity>,
    /// Entity texts partitioned into argument roles.
    pub arguments: EventArguments,
    /// The resolved publish date, or `"Unknown"`.
    pub publish_date: String,
    /// The source URL echoed back.
    pub source: String,
}
