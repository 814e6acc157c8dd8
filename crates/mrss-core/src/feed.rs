//! Walk RSS 2.0 and Atom documents and collect media per item.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use xmltree::Element;

use crate::config::{MediaOptions, ATOM_URL_ATTRIBUTE};
use crate::dom::{self, attr, child_elements, text_content};
use crate::error::{MediaError, Result};
use crate::extract;
use crate::media::MediaRecord;
use crate::resolve::Scope;

const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Media found on one feed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub medias: Vec<MediaRecord>,
}

pub fn parse_document<R: Read>(reader: R) -> Result<Element> {
    Ok(Element::parse(reader)?)
}

pub fn load_document(path: &Path) -> Result<Element> {
    let file = File::open(path)?;
    parse_document(BufReader::new(file))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Rss,
    Atom,
}

/// Locate the channel-level element: `rss/channel`, a bare `channel`, or an
/// Atom `feed`.
fn find_channel(root: &Element) -> Result<(Flavor, &Element)> {
    match root.name.as_str() {
        "rss" => root
            .get_child("channel")
            .map(|c| (Flavor::Rss, c))
            .ok_or_else(|| MediaError::UnsupportedRoot(root.name.clone())),
        "channel" => Ok((Flavor::Rss, root)),
        "feed" if root.namespace.as_deref() == Some(ATOM_NAMESPACE) => Ok((Flavor::Atom, root)),
        _ => Err(MediaError::UnsupportedRoot(dom::qualified_name(root))),
    }
}

/// Extract media for every item of the document, in document order.
pub fn extract_feed(root: &Element, options: &MediaOptions) -> Result<Vec<FeedItem>> {
    let (flavor, channel) = find_channel(root)?;
    let item_name = match flavor {
        Flavor::Rss => "item",
        Flavor::Atom => "entry",
    };
    let items: Vec<&Element> = child_elements(channel)
        .filter(|e| e.name == item_name && !dom::is_mrss(e, item_name))
        .collect();

    debug!(items = items.len(), ?flavor, "walking feed");

    if options.parallel {
        items
            .par_iter()
            .map(|item| extract_item(channel, item, flavor, options))
            .collect()
    } else {
        items
            .iter()
            .map(|item| extract_item(channel, item, flavor, options))
            .collect()
    }
}

fn extract_item(
    channel: &Element,
    item: &Element,
    flavor: Flavor,
    options: &MediaOptions,
) -> Result<FeedItem> {
    let scope = Scope::new(Some(channel), Some(item));
    let mut medias = Vec::new();

    for child in child_elements(item) {
        let Some(url_attribute) = media_source(child, flavor, options) else {
            continue;
        };
        for result in extract::extract_each(child, &scope, url_attribute) {
            match result {
                Ok(media) => medias.push(media),
                Err(err) if options.skip_invalid => {
                    warn!(node = %dom::qualified_name(child), error = %err, "skipping media content");
                }
                Err(err) => return Err(err),
            }
        }
    }

    let title = child_elements(item)
        .find(|e| e.name == "title" && !dom::is_mrss(e, "title"))
        .map(text_content);
    let link = match flavor {
        Flavor::Rss => item.get_child("link").map(text_content),
        Flavor::Atom => child_elements(item)
            .find(|e| e.name == "link" && matches!(attr(e, "rel"), None | Some("alternate")))
            .and_then(|e| attr(e, "href"))
            .map(str::to_string),
    };

    debug!(media = medias.len(), title = title.as_deref().unwrap_or(""), "extracted item");
    Ok(FeedItem { title, link, medias })
}

/// Decide whether `el` carries media, and where its URL lives if it is a
/// plain enclosure.
fn media_source<'o>(el: &Element, flavor: Flavor, options: &'o MediaOptions) -> Option<&'o str> {
    if dom::is_mrss(el, "content") || dom::is_mrss(el, "group") {
        return Some(options.url_attribute.as_str());
    }
    match flavor {
        Flavor::Rss if el.name == "enclosure" && el.namespace.is_none() => {
            Some(options.url_attribute.as_str())
        }
        Flavor::Atom if el.name == "link" && attr(el, "rel") == Some("enclosure") => {
            Some(ATOM_URL_ATTRIBUTE)
        }
        _ => None,
    }
}
