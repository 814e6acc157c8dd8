//! Value objects carried by a [`MediaRecord`](crate::media::MediaRecord).

use serde::{Deserialize, Serialize};

use crate::date::Timestamp;
use crate::enums::{
    CreditScheme, PriceType, RestrictionRelationship, RestrictionType, StatusState, TextType,
};

/// `media:credit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    pub scheme: CreditScheme,
    pub role: Option<String>,
    pub value: String,
}

/// `media:price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub price_type: Option<PriceType>,
    pub value: Option<f64>,
    pub currency: Option<String>,
}

/// `media:subTitle`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtitle {
    pub subtitle_type: Option<String>,
    pub lang: Option<String>,
    pub url: Option<String>,
}

/// `media:scene`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

/// `media:text`, a transcript fragment optionally bound to a time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    pub text_type: TextType,
    pub lang: Option<String>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub time: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    pub value: String,
    pub restriction_type: Option<RestrictionType>,
    pub relationship: Option<RestrictionRelationship>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarRating {
    pub average: Option<f64>,
    pub count: Option<u64>,
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// `media:community`: star rating, view statistics and weighted tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub star_rating: Option<StarRating>,
    pub views: Option<u64>,
    pub favorites: Option<u64>,
    /// Tag name to weight, in feed order.
    pub tags: Vec<(String, i64)>,
}

impl Community {
    pub fn tag_weight(&self, name: &str) -> Option<i64> {
        self.tags.iter().find(|(k, _)| k == name).map(|(_, w)| *w)
    }
}

/// `media:embed` with its `media:param` children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Parameter name to trimmed value, in feed order.
    pub params: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub value: String,
    pub url: Option<String>,
    pub license_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerLink {
    pub href: Option<String>,
    pub link_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub state: Option<StatusState>,
    pub reason: Option<String>,
}
