//! The Entry Assembler: builds one [`Entry`] from a level-2 [`Section`].

use crate::list_extractor::list_from_subsection;
use crate::markup::strip_markup;
use crate::model::{Definition, Entry, Example};
use crate::section::Section;
use crate::util;
use crate::value_parsers::{example_from_str, parse_antonym, parse_wikilinks};
use parse_wiki_text::{Node, Parameter};
use std::collections::HashMap;

const GRAMMAR_TEMPLATE: &str = "ניתוח דקדוקי";

/// Builds an [`Entry`] from a level-2 section. Asserting the level here
/// rather than returning a `Result` reflects that a section passed in at the
/// wrong level is a caller logic error, not a data error to recover from.
#[must_use]
pub fn build_entry(wiki_text: &str, section: &Section) -> Entry {
    assert_eq!(section.level, 2, "entries are built from level-2 sections only");

    let grammar_args = find_grammar_args(wiki_text, section.top);
    let grammatical_info = grammar_args.as_ref().map(crate::grammar::build_grammar_info);
    let extra_info = grammar_args.as_ref().and_then(|args| args.get("הערה").cloned());

    Entry {
        title: section.title.clone(),
        grammatical_info,
        definitions: build_definitions(wiki_text, section.top),
        expressions: list_references(wiki_text, section, &["צירופים"]),
        derivatives: list_references(wiki_text, section, &["נגזרות"]),
        synonyms: list_mixed(wiki_text, section, &["מילים נרדפות"]),
        antonyms: list_mixed(wiki_text, section, &["ניגודים", "הפכים"]),
        translations: build_translations(wiki_text, section),
        see_also: list_references(wiki_text, section, &["ראו גם"]),
        external_links: build_external_links(wiki_text, section),
        etymology: list_from_subsection(wiki_text, section, &["גיזרון", "גזרון"])
            .into_iter()
            .map(strip_markup)
            .collect(),
        extra_info,
    }
}

fn list_references(wiki_text: &str, section: &Section, candidates: &[&str]) -> Vec<crate::model::WikiLink> {
    list_from_subsection(wiki_text, section, candidates)
        .into_iter()
        .flat_map(parse_wikilinks)
        .collect()
}

fn list_mixed(wiki_text: &str, section: &Section, candidates: &[&str]) -> Vec<crate::model::Reference> {
    list_from_subsection(wiki_text, section, candidates)
        .into_iter()
        .flat_map(|item| parse_antonym(item))
        .collect()
}

/// The unique top-level `ניתוח דקדוקי` template's arguments, keyed by their
/// (stripped) name. A leading positional (unnamed) argument is conventionally
/// the headword itself rather than a grammar field and is skipped; named
/// arguments are kept regardless of position, since editors don't always
/// include a positional headword at all.
fn find_grammar_args(wiki_text: &str, nodes: &[Node]) -> Option<HashMap<String, String>> {
    let (_, parameters) = util::top_level_templates(nodes)
        .find(|(name, _)| util::template_name(name).as_deref() == Some(GRAMMAR_TEMPLATE))?;
    Some(
        parameters
            .iter()
            .filter_map(|parameter| {
                let name = util::parameter_name(wiki_text, parameter)?;
                Some((name.trim().to_string(), util::node_slice_text(wiki_text, &parameter.value).trim().to_string()))
            })
            .collect(),
    )
}

fn build_translations(wiki_text: &str, section: &Section) -> HashMap<String, Vec<String>> {
    let Some(subsection) = section.subsection("תרגום") else {
        return HashMap::new();
    };
    let mut templates = Vec::new();
    util::all_templates(subsection.top, &mut templates);
    let mut translations: HashMap<String, Vec<String>> = HashMap::new();
    for (name_nodes, parameters) in templates {
        if util::template_name(name_nodes).as_deref() != Some("ת") {
            continue;
        }
        let args: Vec<String> =
            util::positional_args(parameters).map(|value| util::node_slice_text(wiki_text, value)).collect();
        if let [language, translation, ..] = args.as_slice() {
            translations.entry(language.clone()).or_default().push(translation.clone());
        }
    }
    translations
}

fn build_external_links(wiki_text: &str, section: &Section) -> HashMap<String, String> {
    let Some(subsection) = section.subsection("קישורים חיצוניים") else {
        return HashMap::new();
    };
    let mut templates = Vec::new();
    util::all_templates(subsection.top, &mut templates);
    let mut links = HashMap::new();
    for (name_nodes, parameters) in templates {
        if util::template_name(name_nodes).as_deref() != Some("מיזמים") {
            continue;
        }
        for parameter in parameters {
            if let Some(name) = util::parameter_name(wiki_text, parameter) {
                links.insert(name, util::node_slice_text(wiki_text, &parameter.value));
            }
        }
    }
    links
}

fn build_definitions(wiki_text: &str, nodes: &[Node]) -> Vec<Definition> {
    let Some(items) = first_list_items(nodes) else {
        return Vec::new();
    };
    items.into_iter().map(|item_nodes| build_definition(wiki_text, item_nodes)).collect()
}

fn build_definition(wiki_text: &str, item_nodes: &[Node]) -> Definition {
    let body = non_list_prefix(item_nodes);
    let mut templates = Vec::new();
    util::all_templates(body, &mut templates);

    let definition_text = node_raw_span(wiki_text, body).map(strip_markup).unwrap_or_default();

    Definition {
        definition: definition_text,
        examples: examples_for_item(wiki_text, item_nodes),
        register: register(wiki_text, &templates),
        context: template_first_arg(wiki_text, &templates, "הקשר"),
        time_period: time_period(wiki_text, &templates),
        is_lacking: has_template(&templates, "פירוש לקוי"),
        is_borrowed: has_template(&templates, "בהשאלה"),
    }
}

fn has_template(templates: &[(&[Node], &[Parameter])], name: &str) -> bool {
    templates.iter().any(|(name_nodes, _)| util::template_name(name_nodes).as_deref() == Some(name))
}

/// A named template's first positional argument, treating an explicit empty
/// argument (`{{tpl|}}`) the same as a missing one so callers can fall
/// through to the next alternative.
fn template_first_arg(wiki_text: &str, templates: &[(&[Node], &[Parameter])], name: &str) -> Option<String> {
    templates
        .iter()
        .find(|(name_nodes, _)| util::template_name(name_nodes).as_deref() == Some(name))
        .and_then(|(_, parameters)| {
            util::positional_args(parameters).next().map(|value| util::node_slice_text(wiki_text, value))
        })
        .filter(|value| !value.is_empty())
}

fn register(wiki_text: &str, templates: &[(&[Node], &[Parameter])]) -> Option<String> {
    template_first_arg(wiki_text, templates, "משלב")
        .or_else(|| template_first_arg(wiki_text, templates, "משלב/ר\"ת"))
        .or_else(|| has_template(templates, "סלנג").then(|| "סלנג".to_string()))
}

fn time_period(wiki_text: &str, templates: &[(&[Node], &[Parameter])]) -> Option<String> {
    template_first_arg(wiki_text, templates, "רובד")
        .or_else(|| has_template(templates, "חזל").then(|| "חזל".to_string()))
        .or_else(|| has_template(templates, "מקרא").then(|| "מקרא".to_string()))
}

/// The items of the first top-level list node among `nodes`, regardless of
/// list kind (`#`, `*` or `:`).
fn first_list_items<'a>(nodes: &'a [Node<'a>]) -> Option<Vec<&'a [Node<'a>]>> {
    nodes.iter().find_map(|node| match node {
        Node::UnorderedList { items, .. } | Node::OrderedList { items, .. } => {
            Some(items.iter().map(|item| item.nodes.as_slice()).collect())
        }
        Node::DefinitionList { items, .. } => Some(items.iter().map(|item| item.nodes.as_slice()).collect()),
        _ => None,
    })
}

/// The node slice up to (excluding) the first nested list, the definition's
/// own content before any attached example sublist.
fn non_list_prefix<'a>(nodes: &'a [Node<'a>]) -> &'a [Node<'a>] {
    let end = nodes
        .iter()
        .position(|node| matches!(node, Node::DefinitionList { .. } | Node::UnorderedList { .. } | Node::OrderedList { .. }))
        .unwrap_or(nodes.len());
    &nodes[..end]
}

/// The example sublist directly beneath a definition item: a nested
/// definition-list continuation wrapping a nested unordered list. A
/// continuation with no wrapped bullet list underneath it carries no examples.
fn examples_for_item(wiki_text: &str, item_nodes: &[Node]) -> Vec<Example> {
    nested_list_items(item_nodes)
        .into_iter()
        .filter_map(|example_nodes| node_raw_span(wiki_text, example_nodes))
        .map(example_from_str)
        .collect()
}

fn nested_list_items<'a>(nodes: &'a [Node<'a>]) -> Vec<&'a [Node<'a>]> {
    for node in nodes {
        match node {
            Node::DefinitionList { items, .. } => {
                return items.first().map(|item| nested_list_items(&item.nodes)).unwrap_or_default();
            }
            Node::UnorderedList { items, .. } | Node::OrderedList { items, .. } => {
                return items.iter().map(|item| item.nodes.as_slice()).collect();
            }
            _ => {}
        }
    }
    Vec::new()
}

fn node_raw_span<'a>(wiki_text: &'a str, nodes: &[Node]) -> Option<&'a str> {
    use parse_wiki_text::Positioned;
    let (first, last) = (nodes.first()?, nodes.last()?);
    Some(&wiki_text[first.start()..last.end()])
}
