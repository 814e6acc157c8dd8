use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Namespace URI of the Media RSS extension.
pub const MRSS_NAMESPACE: &str = "http://search.yahoo.com/mrss/";

/// Category scheme applied when `media:category` carries no `scheme`.
pub const DEFAULT_CATEGORY_SCHEME: &str = "http://search.yahoo.com/mrss/category_schema";

/// Rating scheme applied when `media:rating` carries no `scheme`.
pub const DEFAULT_RATING_SCHEME: &str = "urn:simple";

/// Element name used when writing a record back out.
pub const DEFAULT_NODE_NAME: &str = "enclosure";

/// Attribute holding the media URL on enclosure elements.
pub const DEFAULT_URL_ATTRIBUTE: &str = "url";

/// Atom links carry their target in `href`.
pub const ATOM_URL_ATTRIBUTE: &str = "href";

fn default_node_name() -> String {
    DEFAULT_NODE_NAME.to_string()
}

fn default_url_attribute() -> String {
    DEFAULT_URL_ATTRIBUTE.to_string()
}

/// Options for extraction and enclosure serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaOptions {
    /// Name of the element produced by the serializer.
    #[serde(default = "default_node_name")]
    pub node_name: String,
    /// Attribute read from bare enclosures and written by the serializer.
    #[serde(default = "default_url_attribute")]
    pub url_attribute: String,
    /// Drop media elements that fail to extract instead of failing the item.
    #[serde(default)]
    pub skip_invalid: bool,
    /// Extract items on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for MediaOptions {
    fn default() -> Self {
        Self {
            node_name: default_node_name(),
            url_attribute: default_url_attribute(),
            skip_invalid: false,
            parallel: false,
        }
    }
}

impl MediaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_name(mut self, name: impl Into<String>) -> Self {
        self.node_name = name.into();
        self
    }

    pub fn with_url_attribute(mut self, name: impl Into<String>) -> Self {
        self.url_attribute = name.into();
        self
    }

    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load options from a JSON file. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let options = serde_json::from_reader(BufReader::new(file))?;
        Ok(options)
    }
}
