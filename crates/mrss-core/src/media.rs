use serde::{Deserialize, Serialize};

use crate::enums::{Expression, HashAlgo, Medium, RightsStatus, TextType};
use crate::values::{
    Community, Credit, Embed, License, PeerLink, Player, Price, Restriction, Scene, Status,
    Subtitle, Text, Thumbnail,
};

fn default_true() -> bool {
    true
}

/// Normalized metadata of one media asset found in a feed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Qualified name of the element the record came from
    pub node_name: String,
    pub url: Option<String>,
    /// MIME type from the `type` attribute
    pub mime_type: Option<String>,
    /// Enclosure `length`, kept as written
    pub length: Option<String>,

    pub file_size: Option<u64>,
    pub bitrate: Option<u32>,
    pub framerate: Option<u32>,
    pub sampling_rate: Option<f64>,
    /// Duration in seconds
    pub duration: Option<u32>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub lang: Option<String>,
    pub expression: Option<Expression>,
    pub medium: Option<Medium>,
    /// Only an explicit `isDefault="false"` clears this
    #[serde(default = "default_true")]
    pub is_default: bool,

    pub title: Option<String>,
    pub title_type: Option<TextType>,
    pub description: Option<String>,
    pub description_type: Option<TextType>,
    pub rating: Option<String>,
    pub rating_scheme: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: Option<String>,
    pub category_label: Option<String>,
    pub category_scheme: Option<String>,

    pub thumbnail: Option<Thumbnail>,
    pub hash: Option<String>,
    pub hash_algo: Option<HashAlgo>,
    pub player: Option<Player>,
    pub copyright: Option<String>,
    pub copyright_url: Option<String>,
    pub rights: Option<RightsStatus>,
    pub restriction: Option<Restriction>,
    pub community: Option<Community>,
    pub status: Option<Status>,
    pub embed: Option<Embed>,
    pub license: Option<License>,
    pub peer_link: Option<PeerLink>,

    #[serde(default)]
    pub credits: Vec<Credit>,
    #[serde(default)]
    pub texts: Vec<Text>,
    #[serde(default)]
    pub prices: Vec<Price>,
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
    #[serde(default)]
    pub backlinks: Vec<String>,
}

impl MediaRecord {
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            url: None,
            mime_type: None,
            length: None,
            file_size: None,
            bitrate: None,
            framerate: None,
            sampling_rate: None,
            duration: None,
            height: None,
            width: None,
            lang: None,
            expression: None,
            medium: None,
            is_default: true,
            title: None,
            title_type: None,
            description: None,
            description_type: None,
            rating: None,
            rating_scheme: None,
            keywords: Vec::new(),
            category: None,
            category_label: None,
            category_scheme: None,
            thumbnail: None,
            hash: None,
            hash_algo: None,
            player: None,
            copyright: None,
            copyright_url: None,
            rights: None,
            restriction: None,
            community: None,
            status: None,
            embed: None,
            license: None,
            peer_link: None,
            credits: Vec::new(),
            texts: Vec::new(),
            prices: Vec::new(),
            subtitles: Vec::new(),
            scenes: Vec::new(),
            comments: Vec::new(),
            responses: Vec::new(),
            backlinks: Vec::new(),
        }
    }

    /// Thumbnail URL, if the record resolved one.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_ref()?.url.as_deref()
    }
}
