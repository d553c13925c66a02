//! The typed output of the pipeline: one [`Page`] per dump page, decomposed into
//! [`Entry`] records with their grammar, definitions, and semantic relations.

use std::collections::HashMap;

/// A single dictionary page, corresponding to one `<page>` element of the dump.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Page {
    pub pid: u64,
    pub revision_id: u64,
    pub sha1: String,
    pub title: String,
    pub entries: Vec<Entry>,
}

/// One part-of-speech/homograph section (a level-2 heading) within a page.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Entry {
    pub title: String,
    pub grammatical_info: Option<GrammarInfo>,
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<WikiLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derivatives: Vec<WikiLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<Reference>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub translations: HashMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<WikiLink>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub external_links: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub etymology: Vec<String>,
    pub extra_info: Option<String>,
}

/// Normalized grammatical information pulled from the `ניתוח דקדוקי` template.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct GrammarInfo {
    pub pronunciation: Option<String>,
    pub ktiv_male: Option<String>,
    pub gender: Option<Gender>,
    pub root: Option<String>,
    pub part_of_speech: Option<PartOfSpeech>,
    pub morphology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declensions: Option<Vec<(DeclensionTag, String)>>,
}

/// The canonical gender vocabulary a `GrammarInfo.gender` is always drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    MalePlural,
    FemalePlural,
    MaleAndFemale,
    MaleDual,
}

/// The canonical part-of-speech vocabulary a `GrammarInfo.part_of_speech` is always drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Verb,
    Adverb,
    Gerund,
    Phrase,
    ProperNoun,
    Interjection,
    Conjunction,
    Preposition,
    Expression,
    Interrogative,
    Prefix,
}

/// The canonical declension-tag vocabulary a declension pair's first element is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclensionTag {
    Plural,
    Female,
    FemalePlural,
    MalePlural,
    Construct,
    ConstructPlural,
    Dual,
    Singular,
    Possessive,
    Definite,
    FemaleConstruct,
    Unknown,
}

/// One numbered definition, with its usage examples and inline metadata templates.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    pub register: Option<String>,
    pub context: Option<String>,
    pub time_period: Option<String>,
    pub is_lacking: bool,
    pub is_borrowed: bool,
}

/// A usage example attached to a [`Definition`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Example {
    pub text: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source: Vec<String>,
}

/// A wikilink, with display text defaulting to the link target when absent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WikiLink {
    pub text: String,
    pub link: String,
}

/// A synonym/antonym list item, which wikitext authors sometimes leave unlinked.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Reference {
    Link(WikiLink),
    Plain { text: String },
}
