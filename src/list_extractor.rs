//! The List Extractor: pulls the flattened raw-wikitext items out of a named
//! subsection's top-level lists, for the Value Parsers to consume.

use crate::section::Section;
use parse_wiki_text::Node;

/// The raw wikitext span of every top-level list item directly under the
/// first subsection of `section` whose title is in `candidates`, with items
/// from every top-level list in that subsection concatenated in document
/// order. Absent subsection, or a subsection with no list, yields no items.
#[must_use]
pub fn list_from_subsection<'a>(
    wiki_text: &'a str,
    section: &Section<'a>,
    candidates: &[&str],
) -> Vec<&'a str> {
    let Some(subsection) = section.first_subsection(candidates) else {
        return Vec::new();
    };
    subsection.top.iter().flat_map(|node| item_spans(wiki_text, node)).collect()
}

fn item_spans<'a>(wiki_text: &'a str, node: &Node<'a>) -> Vec<&'a str> {
    match node {
        Node::UnorderedList { items, .. } | Node::OrderedList { items, .. } => {
            items.iter().filter_map(|item| node_slice_span(wiki_text, &item.nodes)).collect()
        }
        Node::DefinitionList { items, .. } => items
            .iter()
            .filter_map(|item| node_slice_span(wiki_text, &item.nodes))
            .collect(),
        _ => Vec::new(),
    }
}

fn node_slice_span<'a>(wiki_text: &'a str, nodes: &[Node<'a>]) -> Option<&'a str> {
    use parse_wiki_text::Positioned;
    let (first, last) = (nodes.first()?, nodes.last()?);
    Some(&wiki_text[first.start()..last.end()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::level_two_sections;
    use crate::tables::CONFIGURATION;

    #[test]
    fn concatenates_every_top_level_list_in_the_matching_subsection() {
        let wiki_text = "== ערך ==\nגוף\n=== צירופים ===\n* [[א]]\n* [[ב]]";
        let parsed = CONFIGURATION.parse(wiki_text);
        let sections = level_two_sections(wiki_text, &parsed.nodes);
        let items = list_from_subsection(wiki_text, &sections[0], &["צירופים"]);
        assert_eq!(items, vec!["[[א]]", "[[ב]]"]);
    }

    #[test]
    fn missing_subsection_yields_no_items() {
        let wiki_text = "== ערך ==\nגוף";
        let parsed = CONFIGURATION.parse(wiki_text);
        let sections = level_two_sections(wiki_text, &parsed.nodes);
        assert!(list_from_subsection(wiki_text, &sections[0], &["ראו גם"]).is_empty());
    }
}
