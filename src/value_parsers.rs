//! Per-item parsers: each consumes one raw wikitext string (a list item, or a
//! template argument value) and produces one typed value.

use crate::markup::strip_markup;
use crate::model::{DeclensionTag, Example, Reference, WikiLink};
use crate::tables::{CONFIGURATION, FORM_TAG_REGEX, FORM_TAG_TABLE};
use crate::util::{self, parse_text, positional_args, template_name};
use parse_wiki_text::{Node, Positioned};

/// Every wikilink in `s`, including image links (unlike the markup
/// stripper, which treats a wikilink-in-wikilink as an image and drops it —
/// here the caller explicitly wants links, images included).
#[must_use]
pub fn parse_wikilinks(s: &str) -> Vec<WikiLink> {
    let parsed = CONFIGURATION.parse(s);
    let mut links = Vec::new();
    collect_links(&parsed.nodes, &mut links);
    links
}

fn collect_links(nodes: &[Node], out: &mut Vec<WikiLink>) {
    for node in nodes {
        match node {
            Node::Link { text, target, .. } | Node::Image { text, target, .. } => {
                out.push(wikilink(text, target));
                collect_links(text, out);
            }
            Node::Tag { nodes, .. }
            | Node::ExternalLink { nodes, .. }
            | Node::Preformatted { nodes, .. }
            | Node::Heading { nodes, .. } => collect_links(nodes, out),
            Node::DefinitionList { items, .. } => {
                for item in items {
                    collect_links(&item.nodes, out);
                }
            }
            Node::UnorderedList { items, .. } | Node::OrderedList { items, .. } => {
                for item in items {
                    collect_links(&item.nodes, out);
                }
            }
            _ => {}
        }
    }
}

fn wikilink(text: &[Node], target: &str) -> WikiLink {
    let display = parse_text(text).unwrap_or_default();
    let text = if display.trim().is_empty() { target.to_string() } else { display };
    WikiLink { text, link: target.to_string() }
}

/// A mixed synonym/antonym-list item: the wikilinks in `s` if there are any,
/// otherwise `s` itself as a single plain-text reference.
#[must_use]
pub fn parse_antonym(s: &str) -> Vec<Reference> {
    let links = parse_wikilinks(s);
    if !links.is_empty() {
        return links.into_iter().map(Reference::Link).collect();
    }
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![Reference::Plain { text: trimmed.to_string() }]
    }
}

/// An example item: the first template in `s`, if any, supplies the example
/// text (its first positional argument, markup-stripped), kind (the
/// template's name) and source (remaining positional arguments, left raw).
/// Absent a template, `s` itself is the (markup-stripped) example text.
#[must_use]
pub fn example_from_str(s: &str) -> Example {
    let parsed = CONFIGURATION.parse(s);
    match util::first_template(&parsed.nodes) {
        Some((name_nodes, parameters)) => {
            let name = template_name(name_nodes).unwrap_or_default();
            let mut positional = positional_args(parameters);
            let text = positional
                .next()
                .and_then(|value| raw_span(s, value))
                .map(strip_markup)
                .unwrap_or_default();
            let source = positional.filter_map(|value| raw_span(s, value)).map(str::to_string).collect();
            Example { text, kind: name, source }
        }
        None => Example { text: strip_markup(s), kind: "plain-text".to_string(), source: Vec::new() },
    }
}

fn raw_span<'a>(wiki_text: &'a str, nodes: &[Node]) -> Option<&'a str> {
    let (first, last) = (nodes.first()?, nodes.last()?);
    Some(&wiki_text[first.start()..last.end()])
}

/// A declension-form item, split into its canonical tag and the form itself.
#[must_use]
pub fn parse_form(f: &str) -> (DeclensionTag, String) {
    let trimmed = f.trim();
    if trimmed.chars().any(char::is_whitespace) {
        if let Some(found) = FORM_TAG_REGEX.find(trimmed) {
            if let Some(tag) = FORM_TAG_TABLE.get(found.as_str()) {
                let remaining = trimmed[found.end()..].trim_start().to_string();
                return (*tag, remaining);
            }
        }
    }
    if let Some(stripped) = trimmed.strip_suffix('\u{5be}') {
        return (DeclensionTag::Construct, stripped.trim_end().to_string());
    }
    (DeclensionTag::Unknown, trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wikilink_falls_back_to_target_when_display_text_is_absent() {
        let links = parse_wikilinks("[[A|B]] [[A]]");
        assert_eq!(links, vec![
            WikiLink { text: "B".into(), link: "A".into() },
            WikiLink { text: "A".into(), link: "A".into() },
        ]);
    }

    #[test]
    fn antonym_prefers_links_over_plain_text() {
        let refs = parse_antonym("ראו [[חתול]]");
        assert_eq!(refs, vec![Reference::Link(WikiLink { text: "חתול".into(), link: "חתול".into() })]);
        let refs = parse_antonym("מילה פשוטה");
        assert_eq!(refs, vec![Reference::Plain { text: "מילה פשוטה".into() }]);
        assert!(parse_antonym("   ").is_empty());
    }

    #[test]
    fn example_extracts_first_template_and_leaves_source_raw() {
        let example = example_from_str("{{משל|דוגמה|ספר|עמוד 3}}");
        assert_eq!(example.text, "דוגמה");
        assert_eq!(example.kind, "משל");
        assert_eq!(example.source, vec!["ספר".to_string(), "עמוד 3".to_string()]);
    }

    #[test]
    fn example_without_a_template_is_plain_text() {
        let example = example_from_str("משפט לדוגמה");
        assert_eq!(example.kind, "plain-text");
        assert_eq!(example.text, "משפט לדוגמה");
    }

    #[test]
    fn declension_string_splits_into_tag_and_form() {
        assert_eq!(parse_form("ר' ספרים"), (DeclensionTag::Plural, "ספרים".to_string()));
        assert_eq!(parse_form("נ' ספרה"), (DeclensionTag::Female, "ספרה".to_string()));
        assert_eq!(parse_form("כתב\u{5be}"), (DeclensionTag::Construct, "כתב".to_string()));
        assert_eq!(parse_form("לא-ידוע"), (DeclensionTag::Unknown, "לא-ידוע".to_string()));
    }
}
