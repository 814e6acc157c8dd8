//! Build [`MediaRecord`]s from `media:content`, `media:group` and plain
//! enclosure elements.

use tracing::debug;
use xmltree::Element;

use crate::config::{DEFAULT_CATEGORY_SCHEME, DEFAULT_RATING_SCHEME};
use crate::date::parse_timestamp;
use crate::dom::{self, attr, attr_string, float_attr, int_attr, text_content};
use crate::enums::{
    CreditScheme, Expression, HashAlgo, Medium, PriceType, RestrictionRelationship,
    RestrictionType, RightsStatus, StatusState, TextType,
};
use crate::error::Result;
use crate::media::MediaRecord;
use crate::resolve::{find_tags, MediaTag, Scope};
use crate::values::{
    Community, Credit, Embed, License, PeerLink, Player, Price, Restriction, Scene, StarRating,
    Status, Subtitle, Text, Thumbnail,
};

/// Extract every media record an enclosure-bearing element describes.
///
/// `media:group` yields one record per `media:content` child, `media:content`
/// yields exactly one, and any other element is read as a plain enclosure
/// with its URL in `url_attribute`. The first failing content fails the call.
pub fn extract(element: &Element, scope: &Scope<'_>, url_attribute: &str) -> Result<Vec<MediaRecord>> {
    extract_each(element, scope, url_attribute).into_iter().collect()
}

/// Like [`extract`], but keeps one result per `media:content` so a caller
/// can drop a failing content without losing its siblings in the group.
pub fn extract_each(
    element: &Element,
    scope: &Scope<'_>,
    url_attribute: &str,
) -> Vec<Result<MediaRecord>> {
    if dom::is_mrss(element, "group") {
        let scope = scope.with_group(element);
        dom::mrss_children(element, "content")
            .map(|content| extract_content(content, &scope))
            .collect()
    } else if dom::is_mrss(element, "content") {
        vec![extract_content(element, scope)]
    } else {
        vec![Ok(extract_enclosure(element, url_attribute))]
    }
}

/// One record per direct `media:content` child; the group joins the scope.
pub fn extract_group(group: &Element, scope: &Scope<'_>) -> Result<Vec<MediaRecord>> {
    let scope = scope.with_group(group);
    dom::mrss_children(group, "content")
        .map(|content| extract_content(content, &scope))
        .collect()
}

/// Read a `media:content` element and resolve every metadata tag for it.
pub fn extract_content(content: &Element, scope: &Scope<'_>) -> Result<MediaRecord> {
    let mut media = MediaRecord::new(dom::qualified_name(content));
    read_content_attributes(content, &mut media);

    for tag in MediaTag::ALL {
        if let Some((_, nodes)) = find_tags(content, scope, tag) {
            apply_tag(tag, &nodes, &mut media)?;
        }
    }

    debug!(
        node = %media.node_name,
        url = media.url.as_deref().unwrap_or(""),
        "extracted media record"
    );
    Ok(media)
}

/// A feed-native enclosure: only name, type, URL and length are known.
pub fn extract_enclosure(element: &Element, url_attribute: &str) -> MediaRecord {
    let mut media = MediaRecord::new(dom::qualified_name(element));
    media.mime_type = attr_string(element, "type");
    media.url = attr_string(element, url_attribute);
    media.length = attr_string(element, "length");
    media
}

fn read_content_attributes(el: &Element, media: &mut MediaRecord) {
    media.url = attr_string(el, "url");
    media.mime_type = attr_string(el, "type");
    media.file_size = int_attr(el, "fileSize");
    media.bitrate = int_attr(el, "bitrate");
    media.framerate = int_attr(el, "framerate");
    media.sampling_rate = float_attr(el, "samplingrate");
    media.duration = int_attr(el, "duration");
    media.height = int_attr(el, "height");
    media.width = int_attr(el, "width");
    media.lang = attr_string(el, "lang");
    media.expression = Expression::from_xml(attr(el, "expression"));
    media.medium = Medium::from_xml(attr(el, "medium"));

    if attr(el, "isDefault") == Some("false") {
        media.is_default = false;
    }
}

fn apply_tag(tag: MediaTag, nodes: &[&Element], media: &mut MediaRecord) -> Result<()> {
    // find_tags never returns an empty set
    let Some(first) = nodes.first().copied() else {
        return Ok(());
    };

    match tag {
        MediaTag::Rating => {
            media.rating = Some(text_content(first));
            media.rating_scheme = Some(non_empty_attr(first, "scheme", DEFAULT_RATING_SCHEME));
        }
        MediaTag::Title => {
            media.title = Some(text_content(first));
            media.title_type = TextType::from_xml(attr(first, "type"));
        }
        MediaTag::Description => {
            media.description = Some(text_content(first));
            media.description_type = TextType::from_xml(attr(first, "type"));
        }
        MediaTag::Keywords => media.keywords = split_keywords(&text_content(first)),
        MediaTag::Thumbnail => media.thumbnail = Some(read_thumbnail(first)?),
        MediaTag::Category => {
            media.category = Some(text_content(first));
            media.category_label = attr_string(first, "label");
            media.category_scheme = Some(non_empty_attr(first, "scheme", DEFAULT_CATEGORY_SCHEME));
        }
        MediaTag::Hash => {
            media.hash = Some(text_content(first));
            media.hash_algo = Some(HashAlgo::from_xml_or_default(attr(first, "algo")));
        }
        MediaTag::Player => {
            media.player = Some(Player {
                url: attr_string(first, "url"),
                width: int_attr(first, "width"),
                height: int_attr(first, "height"),
            });
        }
        MediaTag::Credit => {
            media.credits = nodes
                .iter()
                .map(|el| Credit {
                    scheme: CreditScheme::from_xml_or_default(attr(el, "scheme")),
                    role: attr_string(el, "role"),
                    value: text_content(el),
                })
                .collect();
        }
        MediaTag::Copyright => {
            media.copyright = Some(text_content(first));
            media.copyright_url = attr_string(first, "url");
        }
        MediaTag::Text => {
            media.texts = nodes.iter().map(|el| read_text(el)).collect::<Result<_>>()?;
        }
        MediaTag::Restriction => {
            media.restriction = Some(Restriction {
                value: text_content(first),
                restriction_type: RestrictionType::from_xml(attr(first, "type")),
                relationship: RestrictionRelationship::from_xml(attr(first, "relationship")),
            });
        }
        MediaTag::Community => media.community = Some(read_community(first)),
        MediaTag::Comments => media.comments = child_texts(first, "comment"),
        MediaTag::Embed => media.embed = Some(read_embed(first)),
        MediaTag::Responses => media.responses = child_texts(first, "response"),
        MediaTag::BackLinks => media.backlinks = child_texts(first, "backLink"),
        MediaTag::Status => {
            media.status = Some(Status {
                state: StatusState::from_xml(attr(first, "state")),
                reason: attr_string(first, "reason"),
            });
        }
        MediaTag::Price => {
            media.prices = nodes
                .iter()
                .map(|el| Price {
                    price_type: PriceType::from_xml(attr(el, "type")),
                    value: float_attr(el, "price"),
                    currency: attr_string(el, "currency"),
                })
                .collect();
        }
        MediaTag::License => {
            media.license = Some(License {
                value: text_content(first),
                url: attr_string(first, "href"),
                license_type: attr_string(first, "type"),
            });
        }
        MediaTag::SubTitle => {
            media.subtitles = nodes
                .iter()
                .map(|el| Subtitle {
                    subtitle_type: attr_string(el, "type"),
                    lang: attr_string(el, "lang"),
                    url: attr_string(el, "href"),
                })
                .collect();
        }
        MediaTag::PeerLink => {
            media.peer_link = Some(PeerLink {
                href: attr_string(first, "href"),
                link_type: attr_string(first, "type"),
            });
        }
        MediaTag::Rights => media.rights = RightsStatus::from_xml(attr(first, "status")),
        MediaTag::Scenes => {
            media.scenes = dom::mrss_children(first, "scene")
                .map(read_scene)
                .collect::<Result<_>>()?;
        }
    }

    Ok(())
}

/// Attribute value, or `default` when the attribute is missing or empty.
fn non_empty_attr(el: &Element, name: &str, default: &str) -> String {
    match attr(el, name) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(|k| k.trim().to_string()).collect()
}

fn read_thumbnail(el: &Element) -> Result<Thumbnail> {
    let time = attr(el, "time")
        .map(|t| parse_timestamp("media:thumbnail@time", t))
        .transpose()?;

    Ok(Thumbnail {
        url: attr_string(el, "url"),
        width: int_attr(el, "width"),
        height: int_attr(el, "height"),
        time,
    })
}

fn read_text(el: &Element) -> Result<Text> {
    let start = attr(el, "start")
        .map(|t| parse_timestamp("media:text@start", t))
        .transpose()?;
    let end = attr(el, "end")
        .map(|t| parse_timestamp("media:text@end", t))
        .transpose()?;

    Ok(Text {
        value: text_content(el),
        text_type: TextType::from_xml_or_default(attr(el, "type")),
        lang: attr_string(el, "lang"),
        start,
        end,
    })
}

fn read_community(el: &Element) -> Community {
    let star_rating = dom::first_mrss_child(el, "starRating").map(|s| StarRating {
        average: float_attr(s, "average"),
        count: int_attr(s, "count"),
        min: int_attr(s, "min"),
        max: int_attr(s, "max"),
    });
    let statistics = dom::first_mrss_child(el, "statistics");
    let tags = dom::first_mrss_child(el, "tags")
        .map(|t| parse_weighted_tags(&text_content(t)))
        .unwrap_or_default();

    Community {
        star_rating,
        views: statistics.and_then(|s| int_attr(s, "views")),
        favorites: statistics.and_then(|s| int_attr(s, "favorites")),
        tags,
    }
}

/// Parse `name:weight, name:weight`. Entries that are not exactly one
/// `name:weight` pair are skipped; a repeated name keeps its first position.
pub fn parse_weighted_tags(raw: &str) -> Vec<(String, i64)> {
    let mut tags: Vec<(String, i64)> = Vec::new();
    for pair in raw.split(',') {
        let parts: Vec<&str> = pair.split(':').collect();
        let [name, weight] = parts[..] else {
            if !pair.trim().is_empty() {
                debug!(pair, "skipping malformed community tag");
            }
            continue;
        };
        let name = name.trim().to_string();
        let weight = dom::lenient_int(weight);
        match tags.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = weight,
            None => tags.push((name, weight)),
        }
    }
    tags
}

fn child_texts(el: &Element, local: &str) -> Vec<String> {
    dom::mrss_children(el, local).map(text_content).collect()
}

fn read_embed(el: &Element) -> Embed {
    let mut params: Vec<(String, String)> = Vec::new();
    for param in dom::mrss_children(el, "param") {
        let Some(name) = attr(param, "name") else {
            continue;
        };
        let value = text_content(param).trim().to_string();
        match params.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value,
            None => params.push((name.to_string(), value)),
        }
    }

    Embed {
        url: attr_string(el, "url"),
        width: int_attr(el, "width"),
        height: int_attr(el, "height"),
        params,
    }
}

fn read_scene(el: &Element) -> Result<Scene> {
    let child = |local: &str| dom::first_mrss_child(el, local).map(text_content);

    let start = child("sceneStartTime")
        .filter(|s| !s.is_empty())
        .map(|s| parse_timestamp("media:sceneStartTime", &s))
        .transpose()?;
    let end = child("sceneEndTime")
        .filter(|s| !s.is_empty())
        .map(|s| parse_timestamp("media:sceneEndTime", &s))
        .transpose()?;

    Ok(Scene {
        title: child("sceneTitle"),
        description: child("sceneDescription"),
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Timestamp;
    use crate::error::MediaError;

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    fn content_of(xml: &str) -> MediaRecord {
        let root = parse(xml);
        extract_content(&root, &Scope::default()).unwrap()
    }

    const NS: &str = r#"xmlns:media="http://search.yahoo.com/mrss/""#;

    #[test]
    fn test_content_attributes() {
        let m = content_of(&format!(
            r#"<media:content {NS} url="http://example.com/v.mp4" type="video/mp4" fileSize="12216320" bitrate="128" framerate="25" samplingrate="44.1" duration="185" height="200" width="300" lang="en" expression="full" medium="video" isDefault="true"/>"#
        ));
        assert_eq!(m.node_name, "media:content");
        assert_eq!(m.url.as_deref(), Some("http://example.com/v.mp4"));
        assert_eq!(m.mime_type.as_deref(), Some("video/mp4"));
        assert_eq!(m.file_size, Some(12_216_320));
        assert_eq!(m.bitrate, Some(128));
        assert_eq!(m.framerate, Some(25));
        assert_eq!(m.sampling_rate, Some(44.1));
        assert_eq!(m.duration, Some(185));
        assert_eq!((m.width, m.height), (Some(300), Some(200)));
        assert_eq!(m.lang.as_deref(), Some("en"));
        assert_eq!(m.expression, Some(Expression::Full));
        assert_eq!(m.medium, Some(Medium::Video));
        assert!(m.is_default);
    }

    #[test]
    fn test_absent_and_malformed_numbers() {
        let m = content_of(&format!(r#"<media:content {NS} url="u" width="wide"/>"#));
        assert_eq!(m.width, Some(0));
        assert_eq!(m.height, None);
        assert_eq!(m.bitrate, None);
        assert_eq!(m.medium, None);
    }

    #[test]
    fn test_is_default_flag() {
        for (attr, expected) in [
            (r#"isDefault="false""#, false),
            (r#"isDefault="true""#, true),
            (r#"isDefault="FALSE""#, true),
            (r#"isDefault="nope""#, true),
            ("", true),
        ] {
            let m = content_of(&format!(r#"<media:content {NS} url="u" {attr}/>"#));
            assert_eq!(m.is_default, expected, "{attr}");
        }
    }

    #[test]
    fn test_descriptive_tags() {
        let m = content_of(&format!(
            r#"<media:content {NS} url="u">
<media:title type="html">The &lt;b&gt;Title&lt;/b&gt;</media:title>
<media:description type="weird">About it</media:description>
<media:rating>nonadult</media:rating>
<media:keywords>a, b ,c</media:keywords>
<media:category label="Music">music/rock</media:category>
</media:content>"#
        ));
        assert_eq!(m.title.as_deref(), Some("The <b>Title</b>"));
        assert_eq!(m.title_type, Some(TextType::Html));
        assert_eq!(m.description.as_deref(), Some("About it"));
        assert_eq!(m.description_type, None);
        assert_eq!(m.rating.as_deref(), Some("nonadult"));
        assert_eq!(m.rating_scheme.as_deref(), Some("urn:simple"));
        assert_eq!(m.keywords, ["a", "b", "c"]);
        assert_eq!(m.category.as_deref(), Some("music/rock"));
        assert_eq!(m.category_label.as_deref(), Some("Music"));
        assert_eq!(m.category_scheme.as_deref(), Some(DEFAULT_CATEGORY_SCHEME));
    }

    #[test]
    fn test_rating_scheme_kept() {
        let m = content_of(&format!(
            r#"<media:content {NS}><media:rating scheme="urn:mpaa">pg</media:rating></media:content>"#
        ));
        assert_eq!(m.rating_scheme.as_deref(), Some("urn:mpaa"));
    }

    #[test]
    fn test_hash_algo() {
        let sha = content_of(&format!(
            r#"<media:content {NS}><media:hash algo="sha1">abc</media:hash></media:content>"#
        ));
        assert_eq!(sha.hash.as_deref(), Some("abc"));
        assert_eq!(sha.hash_algo, Some(HashAlgo::Sha1));

        let plain = content_of(&format!(
            r#"<media:content {NS}><media:hash>abc</media:hash></media:content>"#
        ));
        assert_eq!(plain.hash_algo, Some(HashAlgo::Md5));

        let none = content_of(&format!(r#"<media:content {NS}/>"#));
        assert_eq!(none.hash_algo, None);
    }

    #[test]
    fn test_thumbnail_time() {
        let m = content_of(&format!(
            r#"<media:content {NS}><media:thumbnail url="http://example.com/t.jpg" width="75" height="50" time="12:05:01.123"/></media:content>"#
        ));
        let thumb = m.thumbnail.unwrap();
        assert_eq!(thumb.url.as_deref(), Some("http://example.com/t.jpg"));
        assert_eq!((thumb.width, thumb.height), (Some(75), Some(50)));
        assert!(matches!(thumb.time, Some(Timestamp::Clock(_))));
    }

    #[test]
    fn test_bad_timestamp_fails() {
        let root = parse(&format!(
            r#"<media:content {NS}><media:thumbnail url="t.jpg" time="whenever"/></media:content>"#
        ));
        let err = extract_content(&root, &Scope::default()).unwrap_err();
        assert!(matches!(
            err,
            MediaError::InvalidTimestamp { field: "media:thumbnail@time", .. }
        ));
    }

    #[test]
    fn test_bad_text_and_scene_times_fail() {
        let cases = [
            (
                r#"<media:text start="whenever">caption</media:text>"#,
                "media:text@start",
            ),
            (
                r#"<media:text start="00:00:01" end="later">caption</media:text>"#,
                "media:text@end",
            ),
            (
                "<media:scenes><media:scene><media:sceneStartTime>soon</media:sceneStartTime></media:scene></media:scenes>",
                "media:sceneStartTime",
            ),
            (
                "<media:scenes><media:scene><media:sceneStartTime>00:15</media:sceneStartTime><media:sceneEndTime>never</media:sceneEndTime></media:scene></media:scenes>",
                "media:sceneEndTime",
            ),
        ];
        for (body, expected) in cases {
            let root = parse(&format!(r#"<media:content {NS}>{body}</media:content>"#));
            match extract_content(&root, &Scope::default()) {
                Err(MediaError::InvalidTimestamp { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_keywords_keep_empty_entries() {
        let m = content_of(&format!(
            r#"<media:content {NS}><media:keywords>a,, b ,</media:keywords></media:content>"#
        ));
        assert_eq!(m.keywords, ["a", "", "b", ""]);
    }

    #[test]
    fn test_repeatable_tags() {
        let m = content_of(&format!(
            r#"<media:content {NS}>
<media:credit role="producer" scheme="urn:yvs">Entity Name</media:credit>
<media:credit role="artist">Other</media:credit>
<media:price type="rent" price="19.99" currency="EUR"/>
<media:price type="free"/>
<media:subTitle type="application/smil" lang="en-us" href="http://example.org/sub.smil"/>
<media:text type="html" lang="en" start="00:00:03.000" end="00:00:10.000">Oh, say</media:text>
<media:text>plain</media:text>
</media:content>"#
        ));
        assert_eq!(m.credits.len(), 2);
        assert_eq!(m.credits[0].scheme, CreditScheme::Yvs);
        assert_eq!(m.credits[0].role.as_deref(), Some("producer"));
        assert_eq!(m.credits[1].scheme, CreditScheme::Ebu);
        assert_eq!(m.credits[1].value, "Other");

        assert_eq!(m.prices.len(), 2);
        assert_eq!(m.prices[0].price_type, Some(PriceType::Rent));
        assert_eq!(m.prices[0].value, Some(19.99));
        assert_eq!(m.prices[0].currency.as_deref(), Some("EUR"));
        assert_eq!(m.prices[1].value, None);

        assert_eq!(m.subtitles[0].url.as_deref(), Some("http://example.org/sub.smil"));
        assert_eq!(m.subtitles[0].lang.as_deref(), Some("en-us"));

        assert_eq!(m.texts.len(), 2);
        assert_eq!(m.texts[0].text_type, TextType::Html);
        assert!(m.texts[0].start.is_some());
        assert!(m.texts[0].end.is_some());
        assert_eq!(m.texts[1].text_type, TextType::Plain);
        assert!(m.texts[1].start.is_none());
    }

    #[test]
    fn test_trust_tags() {
        let m = content_of(&format!(
            r#"<media:content {NS}>
<media:player url="http://example.com/player?id=1" height="200" width="400"/>
<media:copyright url="http://example.com/c.html">2005 FooBar</media:copyright>
<media:restriction relationship="deny" type="country">au us</media:restriction>
<media:rights status="official"/>
<media:status state="blocked" reason="http://example.com/reason"/>
<media:license type="text/html" href="http://example.com/l">Creative Commons</media:license>
<media:peerLink type="application/x-bittorrent" href="http://example.com/t.torrent"/>
</media:content>"#
        ));
        let player = m.player.unwrap();
        assert_eq!((player.width, player.height), (Some(400), Some(200)));
        assert_eq!(m.copyright.as_deref(), Some("2005 FooBar"));
        assert_eq!(m.copyright_url.as_deref(), Some("http://example.com/c.html"));

        let restriction = m.restriction.unwrap();
        assert_eq!(restriction.value, "au us");
        assert_eq!(restriction.restriction_type, Some(RestrictionType::Country));
        assert_eq!(restriction.relationship, Some(RestrictionRelationship::Deny));

        assert_eq!(m.rights, Some(RightsStatus::Official));
        let status = m.status.unwrap();
        assert_eq!(status.state, Some(StatusState::Blocked));
        assert_eq!(status.reason.as_deref(), Some("http://example.com/reason"));

        let license = m.license.unwrap();
        assert_eq!(license.value, "Creative Commons");
        assert_eq!(license.url.as_deref(), Some("http://example.com/l"));
        assert_eq!(m.peer_link.unwrap().href.as_deref(), Some("http://example.com/t.torrent"));
    }

    #[test]
    fn test_community() {
        let m = content_of(&format!(
            r#"<media:content {NS}><media:community>
<media:starRating average="3.5" count="20" min="1" max="10"/>
<media:statistics views="5" favorites="x"/>
<media:tags>news:5, sports:3, broken</media:tags>
</media:community></media:content>"#
        ));
        let community = m.community.unwrap();
        let stars = community.star_rating.as_ref().unwrap();
        assert_eq!(stars.average, Some(3.5));
        assert_eq!(stars.count, Some(20));
        assert_eq!((stars.min, stars.max), (Some(1), Some(10)));
        assert_eq!(community.views, Some(5));
        assert_eq!(community.favorites, Some(0));
        assert_eq!(
            community.tags,
            vec![("news".to_string(), 5), ("sports".to_string(), 3)]
        );
        assert_eq!(community.tag_weight("sports"), Some(3));
    }

    #[test]
    fn test_weighted_tags_edge_cases() {
        assert!(parse_weighted_tags("").is_empty());
        assert_eq!(parse_weighted_tags("a:1:2, b:x"), vec![("b".to_string(), 0)]);
        assert_eq!(
            parse_weighted_tags("a:1, b:2, a:3"),
            vec![("a".to_string(), 3), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn test_lists_and_embed() {
        let m = content_of(&format!(
            r#"<media:content {NS}>
<media:comments><media:comment>first</media:comment><media:comment>second</media:comment></media:comments>
<media:responses><media:response>http://example.com/r</media:response></media:responses>
<media:backLinks><media:backLink>http://example.com/b1</media:backLink><media:backLink>http://example.com/b2</media:backLink></media:backLinks>
<media:embed url="http://example.com/e.swf" width="512" height="323">
<media:param name="type">application/x-shockwave-flash</media:param>
<media:param name="allowFullScreen">  true </media:param>
</media:embed>
</media:content>"#
        ));
        assert_eq!(m.comments, ["first", "second"]);
        assert_eq!(m.responses, ["http://example.com/r"]);
        assert_eq!(m.backlinks.len(), 2);

        let embed = m.embed.unwrap();
        assert_eq!(embed.url.as_deref(), Some("http://example.com/e.swf"));
        assert_eq!((embed.width, embed.height), (Some(512), Some(323)));
        assert_eq!(
            embed.params,
            vec![
                ("type".to_string(), "application/x-shockwave-flash".to_string()),
                ("allowFullScreen".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_scenes() {
        let m = content_of(&format!(
            r#"<media:content {NS}><media:scenes>
<media:scene><media:sceneTitle>sceneTitle1</media:sceneTitle><media:sceneDescription>sceneDesc1</media:sceneDescription><media:sceneStartTime>00:15</media:sceneStartTime><media:sceneEndTime>00:45</media:sceneEndTime></media:scene>
<media:scene><media:sceneTitle>sceneTitle2</media:sceneTitle><media:sceneEndTime></media:sceneEndTime></media:scene>
</media:scenes></media:content>"#
        ));
        assert_eq!(m.scenes.len(), 2);
        assert_eq!(m.scenes[0].title.as_deref(), Some("sceneTitle1"));
        assert_eq!(m.scenes[0].description.as_deref(), Some("sceneDesc1"));
        assert!(m.scenes[0].start.is_some());
        assert!(m.scenes[0].end.is_some());
        assert_eq!(m.scenes[1].description, None);
        assert_eq!(m.scenes[1].end, None);
    }

    #[test]
    fn test_group_yields_record_per_content() {
        let group = parse(&format!(
            r#"<media:group {NS}>
<media:content url="http://example.com/a.mp4" isDefault="false"/>
<media:content url="http://example.com/b.mp4"><media:title>own</media:title></media:content>
<media:title>shared</media:title>
<media:thumbnail url="http://example.com/t.jpg"/>
</media:group>"#
        ));
        let records = extract(&group, &Scope::default(), "url").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title.as_deref(), Some("shared"));
        assert!(!records[0].is_default);
        assert_eq!(records[1].title.as_deref(), Some("own"));
        assert_eq!(records[1].thumbnail_url(), Some("http://example.com/t.jpg"));
    }

    #[test]
    fn test_each_content_result_is_independent() {
        let group = parse(&format!(
            r#"<media:group {NS}>
<media:content url="http://example.com/bad.mp4"><media:thumbnail url="t.jpg" time="whenever"/></media:content>
<media:content url="http://example.com/good.mp4"/>
</media:group>"#
        ));
        let results = extract_each(&group, &Scope::default(), "url");
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        assert_eq!(
            results[1].as_ref().unwrap().url.as_deref(),
            Some("http://example.com/good.mp4")
        );
        assert!(extract(&group, &Scope::default(), "url").is_err());
    }

    #[test]
    fn test_bare_enclosure() {
        let el = parse(
            r#"<enclosure url="http://example.com/a.mp3" length="1234" type="audio/mpeg"/>"#,
        );
        let records = extract(&el, &Scope::default(), "url").unwrap();
        assert_eq!(records.len(), 1);
        let m = &records[0];
        assert_eq!(m.node_name, "enclosure");
        assert_eq!(m.url.as_deref(), Some("http://example.com/a.mp3"));
        assert_eq!(m.length.as_deref(), Some("1234"));
        assert_eq!(m.mime_type.as_deref(), Some("audio/mpeg"));
        assert!(m.title.is_none());
    }

    #[test]
    fn test_atom_link_url_attribute() {
        let el = parse(r#"<link rel="enclosure" href="http://example.com/a.mp3" type="audio/mpeg"/>"#);
        let m = extract_enclosure(&el, "href");
        assert_eq!(m.url.as_deref(), Some("http://example.com/a.mp3"));
        assert_eq!(m.length, None);
    }
}
