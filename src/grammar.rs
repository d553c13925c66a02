//! The Grammar Normalizer: turns the raw argument strings of a `ניתוח דקדוקי`
//! template into a typed [`GrammarInfo`].

use crate::model::GrammarInfo;
use crate::tables::{CONFIGURATION, DECLENSION_DELIMITER_REGEX, GENDER_TABLE, POS_TABLE, PRONUNCIATION_REGEX};
use crate::util::{self, template_name};
use crate::value_parsers::parse_form;
use parse_wiki_text::Node;
use std::collections::HashMap;

/// Builds a [`GrammarInfo`] from the template's raw (stripped) argument
/// strings, keyed by their raw Hebrew argument name.
#[must_use]
pub fn build_grammar_info(args: &HashMap<String, String>) -> GrammarInfo {
    GrammarInfo {
        pronunciation: args.get("הגייה").map(String::as_str).and_then(pronunciation),
        ktiv_male: non_empty(args.get("כתיב מלא")),
        gender: args.get("מין").and_then(|value| GENDER_TABLE.get(value.as_str())).copied(),
        root: args.get("שורש").map(String::as_str).and_then(root),
        part_of_speech: args.get("חלק דיבר").and_then(|value| POS_TABLE.get(value.as_str())).copied(),
        morphology: non_empty(args.get("דרך תצורה")),
        declensions: args.get("נטיות").map(|value| declensions(value)),
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.map(|value| value.trim()).filter(|value| !value.is_empty()).map(str::to_string)
}

/// A root template's assembled radicals: `{{שרש|כתב}}` or
/// `{{שרש3|כ|ת|ב}}`/`שרש4`/`שרש5` concatenating their first N arguments.
fn root(raw: &str) -> Option<String> {
    let parsed = CONFIGURATION.parse(raw);
    let (name_nodes, parameters) = util::first_template(&parsed.nodes)?;
    let name = template_name(name_nodes)?;
    if name == "שרש" {
        return util::positional_args(parameters).next().map(|value| util::parse_text(value).unwrap_or_default());
    }
    let count: usize = name.strip_prefix("שרש")?.parse().ok()?;
    let radicals: String = util::positional_args(parameters)
        .take(count)
        .map(|value| util::parse_text(value).unwrap_or_default())
        .collect();
    if radicals.is_empty() {
        None
    } else {
        Some(radicals)
    }
}

/// Transliterates a pronunciation string to IPA. Top-level bold spans become
/// a leading `!` stress marker around their inner text; the IPA table is then
/// applied by substring, and `!` is finally rewritten to the stress
/// apostrophe `'`.
fn pronunciation(raw: &str) -> Option<String> {
    let parsed = CONFIGURATION.parse(raw);
    let marked = mark_stress(&parsed.nodes);
    if marked.trim().is_empty() {
        return None;
    }
    let transliterated = PRONUNCIATION_REGEX.replace_all(&marked, |captures: &regex::Captures| {
        crate::tables::IPA_TABLE
            .get(&captures[0])
            .map(|replacement| replacement.to_string())
            .unwrap_or_else(|| captures[0].to_string())
    });
    Some(transliterated.replace('!', "'"))
}

/// Bold is a flat toggle in the node stream rather than a container, so the
/// stress marker is inserted at the toggle's position (on open) and the rest
/// of the run is copied through as-is.
fn mark_stress(nodes: &[Node]) -> String {
    let mut marked = String::new();
    let mut in_bold = false;
    for node in nodes {
        match node {
            Node::Bold { .. } => {
                if !in_bold {
                    marked.push('!');
                }
                in_bold = !in_bold;
            }
            Node::Text { value, .. } => marked.push_str(value),
            Node::CharacterEntity { character, .. } => marked.push(*character),
            _ => {}
        }
    }
    marked
}

/// Splits a raw declensions value on commas/semicolons and normalizes each
/// piece through [`parse_form`].
fn declensions(raw: &str) -> Vec<(crate::model::DeclensionTag, String)> {
    DECLENSION_DELIMITER_REGEX
        .split(raw.trim())
        .filter(|piece| !piece.trim().is_empty())
        .map(parse_form)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeclensionTag, Gender, PartOfSpeech};

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn gender_and_pos_are_looked_up_from_the_tables() {
        let info = build_grammar_info(&args(&[("מין", "זכר"), ("חלק דיבר", "שם עצם")]));
        assert_eq!(info.gender, Some(Gender::Male));
        assert_eq!(info.part_of_speech, Some(PartOfSpeech::Noun));
    }

    #[test]
    fn root_concatenates_numbered_root_template_arguments() {
        assert_eq!(root("{{שרש3|כ|ת|ב}}"), Some("כתב".to_string()));
        assert_eq!(root("{{שרש|כתב}}"), Some("כתב".to_string()));
    }

    #[test]
    fn pronunciation_moves_stress_and_transliterates() {
        assert_eq!(pronunciation("'''sh'''alom"), Some("'ʃalom".to_string()));
    }

    #[test]
    fn declensions_split_on_comma_and_semicolon() {
        let parsed = declensions("ר' ספרים, נ' ספרה");
        assert_eq!(parsed, vec![
            (DeclensionTag::Plural, "ספרים".to_string()),
            (DeclensionTag::Female, "ספרה".to_string()),
        ]);
    }
}
