// Small shared helpers for walking `parse_wiki_text` node trees.
// Grounded on `util.rs` in `parse_wiktionary_de` (`parse_text`, `text_equals`,
// `parse_parameter_name`), generalized to operate on borrowed spans of the
// original wikitext rather than through a per-parse `Context`/`Warning` sink,
// since this crate's schema has no warnings field (see `model::Page`).

use parse_wiki_text::{Node, Parameter, Positioned};

/// Extracts the raw wikitext substring a node (or any positioned value) spans.
pub fn span_str<'a>(wiki_text: &'a str, positioned: &impl Positioned) -> &'a str {
    &wiki_text[positioned.start()..positioned.end()]
}

/// Renders a node slice to plain text only when it consists solely of text nodes
/// and character entities — used for titles and argument names, where embedded
/// markup would indicate content worth falling back to a raw span for instead.
#[must_use]
pub fn parse_text(nodes: &[Node]) -> Option<String> {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text { value, .. } => out.push_str(value),
            Node::CharacterEntity { character, .. } => out.push(*character),
            _ => return None,
        }
    }
    Some(out)
}

/// True if `nodes` renders (via [`parse_text`]) to exactly `text`.
#[must_use]
pub fn text_equals(nodes: &[Node], text: &str) -> bool {
    parse_text(nodes).as_deref() == Some(text)
}

/// The name of a template parameter, falling back to its raw wikitext span when
/// the name itself contains markup (rare, but the raw span is still a stable key).
#[must_use]
pub fn parameter_name<'a>(wiki_text: &'a str, parameter: &Parameter<'a>) -> Option<String> {
    let name_nodes = parameter.name.as_ref()?;
    if let Some(text) = parse_text(name_nodes) {
        return Some(text);
    }
    let (first, last) = (name_nodes.first()?, name_nodes.last()?);
    Some(wiki_text[first.start()..last.end()].to_string())
}

/// All positional (unnamed) argument values of a template, in document order.
pub fn positional_args<'a, 'b>(
    parameters: &'b [Parameter<'a>],
) -> impl Iterator<Item = &'b [Node<'a>]> {
    parameters
        .iter()
        .filter(|parameter| parameter.name.is_none())
        .map(|parameter| parameter.value.as_slice())
}

/// A template node's name, rendered to plain text, if it is representable as such.
#[must_use]
pub fn template_name(name_nodes: &[Node]) -> Option<String> {
    parse_text(name_nodes)
}

/// Renders a node slice to text, falling back to its raw wikitext span when it
/// contains markup `parse_text` can't flatten — used for template argument
/// values, which unlike names are expected to sometimes carry a wikilink.
#[must_use]
pub fn node_slice_text(wiki_text: &str, nodes: &[Node]) -> String {
    if let Some(text) = parse_text(nodes) {
        return text;
    }
    match (nodes.first(), nodes.last()) {
        (Some(first), Some(last)) => wiki_text[first.start()..last.end()].to_string(),
        _ => String::new(),
    }
}

/// Every template found in `nodes`, recursing the same way [`first_template`]
/// does, appended to `out` in document order.
pub fn all_templates<'a>(nodes: &'a [Node<'a>], out: &mut Vec<(&'a [Node<'a>], &'a [Parameter<'a>])>) {
    for node in nodes {
        match node {
            Node::Template { name, parameters, .. } => out.push((name.as_slice(), parameters.as_slice())),
            Node::Tag { nodes, .. }
            | Node::ExternalLink { nodes, .. }
            | Node::Preformatted { nodes, .. }
            | Node::Heading { nodes, .. } => all_templates(nodes, out),
            Node::DefinitionList { items, .. } => {
                for item in items {
                    all_templates(&item.nodes, out);
                }
            }
            Node::UnorderedList { items, .. } | Node::OrderedList { items, .. } => {
                for item in items {
                    all_templates(&item.nodes, out);
                }
            }
            _ => {}
        }
    }
}

/// The first template found in `nodes`, searching into the containers a
/// template can plausibly be nested inside (tags, lists, headings). Returns
/// its name nodes and parameters; callers render the name with
/// [`template_name`].
#[must_use]
pub fn first_template<'a>(nodes: &'a [Node<'a>]) -> Option<(&'a [Node<'a>], &'a [Parameter<'a>])> {
    for node in nodes {
        match node {
            Node::Template { name, parameters, .. } => return Some((name.as_slice(), parameters.as_slice())),
            Node::Tag { nodes, .. }
            | Node::ExternalLink { nodes, .. }
            | Node::Preformatted { nodes, .. }
            | Node::Heading { nodes, .. } => {
                if let Some(found) = first_template(nodes) {
                    return Some(found);
                }
            }
            Node::DefinitionList { items, .. } => {
                for item in items {
                    if let Some(found) = first_template(&item.nodes) {
                        return Some(found);
                    }
                }
            }
            Node::UnorderedList { items, .. } | Node::OrderedList { items, .. } => {
                for item in items {
                    if let Some(found) = first_template(&item.nodes) {
                        return Some(found);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// Every top-level template in `nodes`, in document order (no recursion into
/// list items or tags — used where only sibling templates at this level
/// matter, e.g. scanning a definition body for metadata templates).
#[must_use]
pub fn top_level_templates<'a>(nodes: &'a [Node<'a>]) -> impl Iterator<Item = (&'a [Node<'a>], &'a [Parameter<'a>])> {
    nodes.iter().filter_map(|node| match node {
        Node::Template { name, parameters, .. } => Some((name.as_slice(), parameters.as_slice())),
        _ => None,
    })
}
