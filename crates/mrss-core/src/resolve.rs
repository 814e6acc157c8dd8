//! Scope-priority lookup of MRSS metadata tags.
//!
//! The same tag may be declared on `media:content`, on the enclosing
//! `media:group`, on the item and on the channel. The deepest declaration
//! wins as a whole: once a level has at least one match, every match at that
//! level is returned and shallower levels are ignored.

use tracing::debug;
use xmltree::Element;

use crate::dom;

/// Ancestors of a content element, innermost first.
///
/// Elements do not link to their parents, so whoever walks the document
/// records the chain on the way down.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scope<'a> {
    pub group: Option<&'a Element>,
    pub item: Option<&'a Element>,
    pub channel: Option<&'a Element>,
}

impl<'a> Scope<'a> {
    pub fn new(channel: Option<&'a Element>, item: Option<&'a Element>) -> Self {
        Self {
            group: None,
            item,
            channel,
        }
    }

    pub fn with_group(mut self, group: &'a Element) -> Self {
        self.group = Some(group);
        self
    }
}

/// Scope level a resolved tag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Content,
    Group,
    Item,
    Channel,
}

/// Metadata tags that follow the scope-priority rule, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaTag {
    Rating,
    Title,
    Description,
    Keywords,
    Thumbnail,
    Category,
    Hash,
    Player,
    Credit,
    Copyright,
    Text,
    Restriction,
    Community,
    Comments,
    Embed,
    Responses,
    BackLinks,
    Status,
    Price,
    License,
    SubTitle,
    PeerLink,
    Rights,
    Scenes,
}

impl MediaTag {
    pub const ALL: [MediaTag; 24] = [
        MediaTag::Rating,
        MediaTag::Title,
        MediaTag::Description,
        MediaTag::Keywords,
        MediaTag::Thumbnail,
        MediaTag::Category,
        MediaTag::Hash,
        MediaTag::Player,
        MediaTag::Credit,
        MediaTag::Copyright,
        MediaTag::Text,
        MediaTag::Restriction,
        MediaTag::Community,
        MediaTag::Comments,
        MediaTag::Embed,
        MediaTag::Responses,
        MediaTag::BackLinks,
        MediaTag::Status,
        MediaTag::Price,
        MediaTag::License,
        MediaTag::SubTitle,
        MediaTag::PeerLink,
        MediaTag::Rights,
        MediaTag::Scenes,
    ];

    /// Local name inside the MRSS namespace.
    pub fn local_name(self) -> &'static str {
        match self {
            MediaTag::Rating => "rating",
            MediaTag::Title => "title",
            MediaTag::Description => "description",
            MediaTag::Keywords => "keywords",
            MediaTag::Thumbnail => "thumbnail",
            MediaTag::Category => "category",
            MediaTag::Hash => "hash",
            MediaTag::Player => "player",
            MediaTag::Credit => "credit",
            MediaTag::Copyright => "copyright",
            MediaTag::Text => "text",
            MediaTag::Restriction => "restriction",
            MediaTag::Community => "community",
            MediaTag::Comments => "comments",
            MediaTag::Embed => "embed",
            MediaTag::Responses => "responses",
            MediaTag::BackLinks => "backLinks",
            MediaTag::Status => "status",
            MediaTag::Price => "price",
            MediaTag::License => "license",
            MediaTag::SubTitle => "subTitle",
            MediaTag::PeerLink => "peerLink",
            MediaTag::Rights => "rights",
            MediaTag::Scenes => "scenes",
        }
    }

    /// Tags that contribute one value per matching element.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            MediaTag::Credit | MediaTag::Text | MediaTag::Price | MediaTag::SubTitle
        )
    }
}

/// Find the elements for `tag` at the highest-priority scope that has any.
///
/// Returns `None` when no level declares the tag.
pub fn find_tags<'a>(
    content: &'a Element,
    scope: &Scope<'a>,
    tag: MediaTag,
) -> Option<(Level, Vec<&'a Element>)> {
    let local = tag.local_name();

    let mut found = Vec::new();
    dom::mrss_descendants(content, local, &mut found);
    if !found.is_empty() {
        debug!(tag = local, level = ?Level::Content, count = found.len(), "resolved media tag");
        return Some((Level::Content, found));
    }

    let ancestors = [
        (Level::Group, scope.group),
        (Level::Item, scope.item),
        (Level::Channel, scope.channel),
    ];
    for (level, ancestor) in ancestors {
        let Some(ancestor) = ancestor else { continue };
        let found: Vec<&Element> = dom::mrss_children(ancestor, local).collect();
        if !found.is_empty() {
            debug!(tag = local, ?level, count = found.len(), "resolved media tag");
            return Some((level, found));
        }
    }

    None
}
