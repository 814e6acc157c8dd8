//! Media RSS metadata extraction.
//!
//! Turns `media:content`, `media:group` and plain enclosure elements into
//! [`MediaRecord`]s. Metadata tags are resolved per content element across
//! the content, group, item and channel scopes; the deepest scope that
//! declares a tag supplies all of its values.

pub mod config;
pub mod date;
pub mod dom;
pub mod enums;
pub mod error;
pub mod extract;
pub mod feed;
pub mod media;
pub mod resolve;
pub mod values;
pub mod writer;

pub use config::{MediaOptions, MRSS_NAMESPACE};
pub use date::{parse_datetime, Timestamp};
pub use error::{MediaError, Result};
pub use extract::{extract, extract_content, extract_each, extract_enclosure, extract_group};
pub use feed::{extract_feed, load_document, parse_document, FeedItem};
pub use media::MediaRecord;
pub use resolve::{find_tags, Level, MediaTag, Scope};
pub use writer::{append_medias, media_element, to_xml_string};
