//! XML codec for version descriptors
//!
//! Encoding renders a canonical textual form: two-space indentation, `\n`
//! line endings, no XML declaration, no trailing newline. Elements appear in
//! a fixed order and absent optional fields are omitted entirely, while a
//! present-but-empty collection is rendered as an empty wrapper element.
//! Decoding walks the document with roxmltree and accepts any well-formed
//! spelling of the same schema, so `encode(decode(s)) == s` holds for every
//! `s` this encoder produced.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::version::descriptor::ApplicationVersion;
use crate::version::error::VersionError;
use crate::version::types::{VersionNote, VersionUrl};

/// Per-entity XML conversion, composed by the wrapper-collection helpers
/// below for `Notes` and `Urls`.
pub(crate) trait XmlConvertible: Sized {
    /// Element name of a single entry (`Note`, `Url`).
    const TAG: &'static str;

    fn write_xml(&self, out: &mut String, indent: usize);

    fn read_xml(node: roxmltree::Node<'_, '_>) -> Result<Self, VersionError>;
}

impl XmlConvertible for VersionNote {
    const TAG: &'static str = "Note";

    fn write_xml(&self, out: &mut String, indent: usize) {
        write_open(out, indent, Self::TAG);
        write_text_element(out, indent + 1, "Title", self.title());
        write_text_element(out, indent + 1, "Content", self.content());
        write_close(out, indent, Self::TAG);
    }

    fn read_xml(node: roxmltree::Node<'_, '_>) -> Result<Self, VersionError> {
        let title = required_text(node, "Title")?;
        let content = required_text(node, "Content")?;
        VersionNote::new(title, content)
    }
}

impl XmlConvertible for VersionUrl {
    const TAG: &'static str = "Url";

    fn write_xml(&self, out: &mut String, indent: usize) {
        write_open(out, indent, Self::TAG);
        write_text_element(out, indent + 1, "Title", self.title());
        write_text_element(out, indent + 1, "Url", self.url());
        write_close(out, indent, Self::TAG);
    }

    fn read_xml(node: roxmltree::Node<'_, '_>) -> Result<Self, VersionError> {
        let title = required_text(node, "Title")?;
        let url = required_text(node, "Url")?;
        VersionUrl::new(title, url)
    }
}

/// Renders a descriptor as canonical XML text.
pub(crate) fn to_xml(version: &ApplicationVersion) -> String {
    let mut out = String::new();

    out.push_str("<Version>\n");
    write_text_element(&mut out, 1, "Id", version.id());

    if let Some(short) = &version.short_description {
        write_text_element(&mut out, 1, "ShortDescription", short);
    }
    if let Some(long) = &version.long_description {
        write_text_element(&mut out, 1, "LongDescription", long);
    }
    if let Some(date) = version.date {
        write_text_element(&mut out, 1, "Date", &format_date(date));
    }
    if let Some(notes) = &version.notes {
        write_collection(&mut out, 1, "Notes", notes);
    }
    if let Some(urls) = &version.urls {
        write_collection(&mut out, 1, "Urls", urls);
    }
    if let Some(copyright) = &version.copyright {
        write_text_element(&mut out, 1, "Copyright", copyright);
    }

    out.push_str("</Version>");
    out
}

/// Decodes a descriptor from XML text.
///
/// `Ok(None)` means the document is well-formed but is not a version
/// descriptor (no `Version` root, or no `Id` child).
pub(crate) fn from_xml(xml: &str) -> Result<Option<ApplicationVersion>, VersionError> {
    if xml.is_empty() {
        return Err(VersionError::EmptyArgument { name: "xml" });
    }

    let document =
        roxmltree::Document::parse(xml).map_err(|e| VersionError::MalformedXml(e.to_string()))?;

    let root = document.root_element();
    if !root.has_tag_name("Version") {
        return Ok(None);
    }
    let Some(id_node) = child(root, "Id") else {
        return Ok(None);
    };

    let id = text_of(id_node);
    let short_description = child(root, "ShortDescription").map(text_of);
    let long_description = child(root, "LongDescription").map(text_of);

    let date = match child(root, "Date") {
        Some(node) => Some(parse_date(text_of(node))?),
        None => None,
    };

    let notes = read_collection::<VersionNote>(root, "Notes")?;
    let urls = read_collection::<VersionUrl>(root, "Urls")?;
    let copyright = child(root, "Copyright").map(text_of);

    ApplicationVersion::with_details(
        id,
        short_description,
        long_description,
        date,
        notes,
        urls,
        copyright,
    )
    .map(Some)
}

/// Formats a date in the schema's unpadded `D/M/YYYY h:m:s` form,
/// e.g. `9/12/2009 9:45:30`.
pub(crate) fn format_date(date: NaiveDateTime) -> String {
    format!(
        "{}/{}/{} {}:{}:{}",
        date.day(),
        date.month(),
        date.year(),
        date.hour(),
        date.minute(),
        date.second()
    )
}

/// Parses either the date-plus-time or the date-only spelling; a date-only
/// value gets a midnight time component.
pub(crate) fn parse_date(text: &str) -> Result<NaiveDateTime, VersionError> {
    NaiveDateTime::parse_from_str(text, "%d/%m/%Y %H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(text, "%d/%m/%Y").map(|date| date.and_time(NaiveTime::MIN))
        })
        .map_err(|_| VersionError::InvalidDate(text.to_string()))
}

fn write_collection<T: XmlConvertible>(out: &mut String, indent: usize, wrapper: &str, items: &[T]) {
    if items.is_empty() {
        push_indent(out, indent);
        out.push('<');
        out.push_str(wrapper);
        out.push_str(" />\n");
        return;
    }

    write_open(out, indent, wrapper);
    for item in items {
        item.write_xml(out, indent + 1);
    }
    write_close(out, indent, wrapper);
}

fn read_collection<T: XmlConvertible>(
    parent: roxmltree::Node<'_, '_>,
    wrapper: &str,
) -> Result<Option<Vec<T>>, VersionError> {
    let Some(container) = child(parent, wrapper) else {
        return Ok(None);
    };

    let mut items = Vec::new();
    for node in container.children().filter(|n| n.has_tag_name(T::TAG)) {
        items.push(T::read_xml(node)?);
    }
    Ok(Some(items))
}

fn child<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    tag: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

/// Verbatim text content of an element; an empty element yields `""`.
fn text_of<'a>(node: roxmltree::Node<'a, '_>) -> &'a str {
    node.text().unwrap_or("")
}

fn required_text<'a>(
    node: roxmltree::Node<'a, '_>,
    tag: &'static str,
) -> Result<&'a str, VersionError> {
    child(node, tag)
        .map(text_of)
        .ok_or(VersionError::MissingField(tag))
}

fn write_text_element(out: &mut String, indent: usize, tag: &str, text: &str) {
    push_indent(out, indent);
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&escape(text));
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn write_open(out: &mut String, indent: usize, tag: &str) {
    push_indent(out, indent);
    out.push('<');
    out.push_str(tag);
    out.push_str(">\n");
}

fn write_close(out: &mut String, indent: usize, tag: &str) {
    push_indent(out, indent);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '\r']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            // A literal CR would be normalized to LF by any conforming XML
            // parser; the character reference survives the round trip.
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
