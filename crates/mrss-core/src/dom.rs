//! Small read helpers over `xmltree` elements.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use xmltree::{Element, XMLNode};

use crate::config::MRSS_NAMESPACE;

static LEADING_INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[+-]?\d+").unwrap());
static LEADING_FLOAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").unwrap());

/// True if `el` is `media:<local>` in the MRSS namespace.
pub fn is_mrss(el: &Element, local: &str) -> bool {
    el.name == local && el.namespace.as_deref() == Some(MRSS_NAMESPACE)
}

/// Element name as written in the source, prefix included.
pub fn qualified_name(el: &Element) -> String {
    match &el.prefix {
        Some(prefix) => format!("{}:{}", prefix, el.name),
        None => el.name.clone(),
    }
}

pub fn attr<'a>(el: &'a Element, name: &str) -> Option<&'a str> {
    el.attributes.get(name).map(String::as_str)
}

pub fn attr_string(el: &Element, name: &str) -> Option<String> {
    attr(el, name).map(str::to_string)
}

/// Concatenated text of the element and all its descendants.
pub fn text_content(el: &Element) -> String {
    let mut out = String::new();
    collect_text(el, &mut out);
    out
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            XMLNode::Text(t) | XMLNode::CData(t) => out.push_str(t),
            XMLNode::Element(e) => collect_text(e, out),
            _ => {}
        }
    }
}

pub fn child_elements(el: &Element) -> impl Iterator<Item = &Element> {
    el.children.iter().filter_map(XMLNode::as_element)
}

/// Direct `media:<local>` children, in document order.
pub fn mrss_children<'a>(el: &'a Element, local: &'a str) -> impl Iterator<Item = &'a Element> {
    child_elements(el).filter(move |c| is_mrss(c, local))
}

pub fn first_mrss_child<'a>(el: &'a Element, local: &str) -> Option<&'a Element> {
    child_elements(el).find(|c| is_mrss(c, local))
}

/// Every `media:<local>` below `el` at any depth, in document order.
pub fn mrss_descendants<'a>(el: &'a Element, local: &str, out: &mut Vec<&'a Element>) {
    for child in child_elements(el) {
        if is_mrss(child, local) {
            out.push(child);
        }
        mrss_descendants(child, local, out);
    }
}

/// Parse the leading integer of `raw`; anything unparsable becomes zero.
pub fn lenient_int<T: FromStr + Default>(raw: &str) -> T {
    LEADING_INT_RE
        .find(raw)
        .and_then(|m| m.as_str().trim().trim_start_matches('+').parse().ok())
        .unwrap_or_default()
}

/// Parse the leading decimal number of `raw`; anything unparsable becomes zero.
pub fn lenient_float(raw: &str) -> f64 {
    LEADING_FLOAT_RE
        .find(raw)
        .and_then(|m| m.as_str().trim().parse().ok())
        .unwrap_or_default()
}

/// Numeric attribute: unset when absent, zero when malformed.
pub fn int_attr<T: FromStr + Default>(el: &Element, name: &str) -> Option<T> {
    attr(el, name).map(lenient_int)
}

pub fn float_attr(el: &Element, name: &str) -> Option<f64> {
    attr(el, name).map(lenient_float)
}
