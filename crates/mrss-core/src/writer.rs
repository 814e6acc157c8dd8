//! Write records back out as enclosure elements.
//!
//! Only the enclosure-compatible subset (URL, type, length) is emitted.

use xmltree::{Element, EmitterConfig, XMLNode};

use crate::config::MediaOptions;
use crate::error::Result;
use crate::media::MediaRecord;

/// Build `<enclosure url=".." type=".." length=".."/>` for one record.
///
/// `type` and `length` are always present, empty when unknown.
pub fn media_element(media: &MediaRecord, options: &MediaOptions) -> Element {
    let mut element = Element::new(&options.node_name);
    element.attributes.insert(
        options.url_attribute.clone(),
        media.url.clone().unwrap_or_default(),
    );
    element
        .attributes
        .insert("type".to_string(), media.mime_type.clone().unwrap_or_default());
    element
        .attributes
        .insert("length".to_string(), media.length.clone().unwrap_or_default());
    element
}

/// Append one enclosure element per record to `item`.
pub fn append_medias(item: &mut Element, medias: &[MediaRecord], options: &MediaOptions) {
    for media in medias {
        item.children.push(XMLNode::Element(media_element(media, options)));
    }
}

/// Render an element without an XML declaration.
pub fn to_xml_string(element: &Element) -> Result<String> {
    let mut buf = Vec::new();
    let config = EmitterConfig::new()
        .write_document_declaration(false)
        .perform_indent(false);
    element.write_with_config(&mut buf, config)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
