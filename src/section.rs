//! The Section Tree Builder: groups a flat `parse_wiki_text` node list into a
//! tree of [`Section`]s keyed by stripped heading title.
//!
//! `parse_wiki_text` gives headings as ordinary nodes in a flat sibling list
//! rather than as a nested tree, so there is no tree to walk — a section's
//! extent is just the run of nodes between its own heading and the next
//! heading at or above its level. That makes this a single recursive-descent
//! pass over index ranges rather than the dynamic-attribute tree traversal
//! the source implementation uses.

use crate::util::parse_text;
use parse_wiki_text::{Node, Positioned};
use std::collections::HashMap;

/// One heading's worth of content: its own body (`top`) plus any immediate
/// child sections, keyed by their stripped title.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub level: u8,
    pub title: String,
    pub top: &'a [Node<'a>],
    pub subsections: HashMap<String, Section<'a>>,
}

impl<'a> Section<'a> {
    /// The subsection with the given title, if any.
    #[must_use]
    pub fn subsection(&self, title: &str) -> Option<&Section<'a>> {
        self.subsections.get(title)
    }

    /// The first subsection whose title matches one of `candidates`, in order.
    #[must_use]
    pub fn first_subsection(&self, candidates: &[&str]) -> Option<&Section<'a>> {
        candidates.iter().find_map(|candidate| self.subsection(candidate))
    }
}

/// Builds the level-2 sections of a whole parsed page (or fragment). Content
/// before the first level-2 heading belongs to no section and is dropped.
#[must_use]
pub fn level_two_sections<'a>(wiki_text: &'a str, nodes: &'a [Node<'a>]) -> Vec<Section<'a>> {
    sections_for_level(wiki_text, nodes, 2)
}

fn sections_for_level<'a>(wiki_text: &'a str, nodes: &'a [Node<'a>], level: u8) -> Vec<Section<'a>> {
    let mut sections = Vec::new();
    let mut index = 0;
    while index < nodes.len() {
        if let Node::Heading { level: heading_level, nodes: heading_nodes, .. } = &nodes[index] {
            if *heading_level == level {
                let title = heading_title(wiki_text, heading_nodes);
                let body_start = index + 1;
                let body_end = next_heading_at_or_above(nodes, body_start, level);
                let body = &nodes[body_start..body_end];
                let top_end = next_heading_at_or_above(body, 0, level + 1);
                let top = &body[..top_end];
                let subsections = child_sections(wiki_text, &body[top_end..], level + 1);
                sections.push(Section { level, title, top, subsections });
                index = body_end;
                continue;
            }
        }
        index += 1;
    }
    sections
}

/// Builds the map of immediate child sections at `level`, later duplicate
/// titles overwriting earlier ones (a source artifact, not a bug: see the
/// duplicate-subsection-titles note on the section tree design).
fn child_sections<'a>(
    wiki_text: &'a str,
    nodes: &'a [Node<'a>],
    level: u8,
) -> HashMap<String, Section<'a>> {
    let mut map = HashMap::new();
    for section in sections_for_level(wiki_text, nodes, level) {
        map.insert(section.title.clone(), section);
    }
    map
}

/// The index, relative to `nodes`, of the first heading at or above `level`
/// starting from `start`; `nodes.len()` if none exists. A heading whose level
/// is more than one deeper than `level` (a skipped heading level) does not
/// match here and is simply left as ordinary content of whichever section is
/// currently open — it never gets attached as a subsection of anything.
fn next_heading_at_or_above(nodes: &[Node], start: usize, level: u8) -> usize {
    nodes[start..]
        .iter()
        .position(|node| matches!(node, Node::Heading { level: found, .. } if *found <= level))
        .map_or(nodes.len(), |offset| start + offset)
}

fn heading_title(wiki_text: &str, nodes: &[Node]) -> String {
    if let Some(text) = parse_text(nodes) {
        return text.trim().to_string();
    }
    match (nodes.first(), nodes.last()) {
        (Some(first), Some(last)) => wiki_text[first.start()..last.end()].trim().to_string(),
        _ => String::new(),
    }
}
