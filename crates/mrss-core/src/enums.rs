//! Closed vocabularies of MRSS attribute values.
//!
//! Every decoder lowercases its input and matches it against the MRSS
//! spellings. Unknown or absent values yield `None`, except for the three
//! vocabularies with a documented default: [`HashAlgo`], [`CreditScheme`]
//! and the `type` of `media:text` (see [`TextType::from_xml_or_default`]).

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $spelling:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Decode an attribute value, case-insensitively.
            pub fn from_xml(value: Option<&str>) -> Option<Self> {
                match value?.to_lowercase().as_str() {
                    $($spelling => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Canonical MRSS spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $spelling),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

xml_enum! {
    /// `medium` attribute of `media:content`.
    pub enum Medium {
        Image => "image",
        Audio => "audio",
        Video => "video",
        Document => "document",
        Executable => "executable",
    }
}

xml_enum! {
    /// `expression` attribute of `media:content`.
    pub enum Expression {
        Sample => "sample",
        Full => "full",
        NonStop => "nonstop",
    }
}

xml_enum! {
    /// Markup of `media:title`, `media:description` and `media:text`.
    pub enum TextType {
        Plain => "plain",
        Html => "html",
    }
}

xml_enum! {
    pub enum HashAlgo {
        Md5 => "md5",
        Sha1 => "sha1",
    }
}

xml_enum! {
    pub enum CreditScheme {
        Ebu => "urn:ebu",
        Yvs => "urn:yvs",
    }
}

xml_enum! {
    pub enum RestrictionType {
        Country => "country",
        Uri => "uri",
        Sharing => "sharing",
    }
}

xml_enum! {
    pub enum RestrictionRelationship {
        Allow => "allow",
        Deny => "deny",
    }
}

xml_enum! {
    /// `state` attribute of `media:status`.
    pub enum StatusState {
        Active => "active",
        Blocked => "blocked",
        Deleted => "deleted",
    }
}

xml_enum! {
    pub enum PriceType {
        Free => "free",
        Rent => "rent",
        Purchase => "purchase",
        Package => "package",
        Subscription => "subscription",
    }
}

xml_enum! {
    /// `status` attribute of `media:rights`.
    pub enum RightsStatus {
        UserCreated => "usercreated",
        Official => "official",
    }
}

impl Default for TextType {
    fn default() -> Self {
        TextType::Plain
    }
}

impl TextType {
    /// `media:text` is plain unless it says otherwise.
    pub fn from_xml_or_default(value: Option<&str>) -> Self {
        Self::from_xml(value).unwrap_or_default()
    }
}

impl Default for HashAlgo {
    fn default() -> Self {
        HashAlgo::Md5
    }
}

impl HashAlgo {
    pub fn from_xml_or_default(value: Option<&str>) -> Self {
        Self::from_xml(value).unwrap_or_default()
    }
}

impl Default for CreditScheme {
    fn default() -> Self {
        CreditScheme::Ebu
    }
}

impl CreditScheme {
    pub fn from_xml_or_default(value: Option<&str>) -> Self {
        Self::from_xml(value).unwrap_or_default()
    }
}
