//! Canonicalization tables and the regexes built from them.
//!
//! Declared once as immutable process-wide lookups, built lazily on first use
//! and shared by reference across every page and every worker thread — per the
//! concurrency model, there is no shared *mutable* state in this pipeline, and
//! these tables are the only shared state at all. Grounded on the `om-wikiparser`
//! pack member's use of `once_cell::sync::Lazy` for this exact pattern
//! (precompiled `Selector`/`Regex` statics in `html.rs`).

use crate::model::{DeclensionTag, Gender, PartOfSpeech};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// The tokenizer configuration, built once and shared read-only by every parse.
pub static CONFIGURATION: Lazy<parse_wiki_text::Configuration> =
    Lazy::new(crate::configuration::create_configuration);

/// Hebrew gender labels to their canonical English form. Bit-exact per the
/// original implementation this crate is grounded on.
pub static GENDER_TABLE: Lazy<HashMap<&'static str, Gender>> = Lazy::new(|| {
    use Gender::*;
    HashMap::from([
        ("זכר", Male),
        ("נקבה", Female),
        ("ז", Male),
        ("נ", Female),
        ("זכר רבוי", MalePlural),
        ("זכר רבים", MalePlural),
        ("זכר ונקבה", MaleAndFemale),
        ("זכר ריבוי", MalePlural),
        ("זכר זוגי", MaleDual),
        ("זו\"נ", MaleAndFemale),
        ("נקבה רבוי", FemalePlural),
        ("ז'", Male),
        ("נקבה ריבוי", FemalePlural),
        ("זכר יחיד", Male),
        ("ז\"ר", MalePlural),
        ("נ'", Female),
    ])
});

/// Hebrew part-of-speech labels to their canonical English form.
pub static POS_TABLE: Lazy<HashMap<&'static str, PartOfSpeech>> = Lazy::new(|| {
    use PartOfSpeech::*;
    HashMap::from([
        ("שם־עצם", Noun),
        ("שם-עצם", Noun),
        ("שם עצם", Noun),
        ("צרף", Phrase),
        ("תואר", Adjective),
        ("שם־תואר", Adjective),
        ("תואר הפועל", Adverb),
        ("שם-תואר", Adjective),
        ("שם תואר", Adjective),
        ("שם פרטי", ProperNoun),
        ("צירוף שמני", Noun),
        ("מילת קריאה", Interjection),
        ("פועל", Verb),
        ("שם־פעולה", Gerund),
        ("תואר־הפועל", Adverb),
        ("שם-פרטי", ProperNoun),
        ("מילת חיבור", Conjunction),
        ("שם־פרטי", ProperNoun),
        ("מילת יחס", Preposition),
        ("ביטוי", Expression),
        ("מילת שאלה", Interrogative),
        ("שם", Noun),
        ("שם עצם (תואר)", Noun),
        ("תחילית", Prefix),
        ("שם־תאר", Adjective),
        ("שם־עצם, שם־תואר", Noun),
        ("תאר", Adjective),
        ("שם־עצם מופשט", Noun),
    ])
});

/// Transliteration substrings to their IPA equivalent.
pub static IPA_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("׳", "ʔ"),
        ("'", "ʔ"),
        ("sh", "ʃ"),
        ("kh", "x"),
        ("ch", "tʃ"),
        ("j", "ʒ"),
        ("y", "j"),
    ])
});

/// Declension-prefix tokens (as they appear, literally, at the start of one
/// comma/semicolon-delimited declension entry) to their canonical tag.
///
/// Hebrew Wiktionary editors abbreviate these prefixes inconsistently — with
/// a geresh (׳), an apostrophe, or gershayim-quoted two-letter combinations
/// for compound tags (e.g. female plural), and occasionally with a stray
/// `<br>` left over from copy-pasted declension tables. The table lists the
/// variants actually seen rather than normalizing punctuation up front, since
/// normalizing punctuation is itself lossy for the text that follows the tag.
pub static FORM_TAG_TABLE: Lazy<HashMap<&'static str, DeclensionTag>> = Lazy::new(|| {
    use DeclensionTag::*;
    HashMap::from([
        // plural (רבים)
        ("ר", Plural),
        ("ר'", Plural),
        ("ר׳", Plural),
        ("רבים", Plural),
        ("ר:", Plural),
        ("ר'<br>", Plural),
        // female (נקבה)
        ("נ", Female),
        ("נ'", Female),
        ("נ׳", Female),
        ("נקבה", Female),
        ("נ:", Female),
        ("נ'<br>", Female),
        // female plural (נקבה רבים)
        ("נ\"ר", FemalePlural),
        ("נ״ר", FemalePlural),
        ("נ'ר", FemalePlural),
        ("נקבה רבים", FemalePlural),
        ("נ\"ר:", FemalePlural),
        // male plural (זכר רבים)
        ("ז\"ר", MalePlural),
        ("ז״ר", MalePlural),
        ("ז'ר", MalePlural),
        ("זכר רבים", MalePlural),
        ("ז\"ר:", MalePlural),
        // construct (נסמך)
        ("נסמך", Construct),
        ("סמיכות", Construct),
        ("נסמך:", Construct),
        ("נסמך<br>", Construct),
        // construct plural (נסמך רבים)
        ("נסמך רבים", ConstructPlural),
        ("ר' נסמך", ConstructPlural),
        ("רבים נסמך", ConstructPlural),
        // dual (זוגי)
        ("זוגי", Dual),
        ("זוגי'", Dual),
        ("זוגי:", Dual),
        // possessive (כינוי חיבור/שייכות)
        ("כינוי", Possessive),
        ("כינוי חיבור", Possessive),
        ("כינוי שייכות", Possessive),
        ("כינוי:", Possessive),
        // definite (מיודע)
        ("מיודע", Definite),
        ("ה\"הידיעה", Definite),
        ("ה-הידיעה", Definite),
        ("מיודע:", Definite),
        // singular (יחיד)
        ("יחיד", Singular),
        ("יח'", Singular),
        ("יחיד:", Singular),
        // female construct (נקבה נסמך)
        ("נ' נסמך", FemaleConstruct),
        ("נקבה נסמך", FemaleConstruct),
        ("נ'נסמך", FemaleConstruct),
    ])
});

/// Matches the alternation of IPA-table keys, used to transliterate a
/// pronunciation string once its bold stress markers have been rewritten.
pub static PRONUNCIATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    let mut keys: Vec<&str> = IPA_TABLE.keys().copied().collect();
    keys.sort_by_key(|key| std::cmp::Reverse(key.len()));
    let pattern = keys.iter().map(|key| regex::escape(key)).collect::<Vec<_>>().join("|");
    Regex::new(&format!("({pattern})")).expect("IPA table produces a valid regex")
});

/// Matches a form-tag-table key anchored at the start of a declension entry,
/// longest key first so a multi-word tag is preferred over a prefix of it.
pub static FORM_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    let mut keys: Vec<&str> = FORM_TAG_TABLE.keys().copied().collect();
    keys.sort_by_key(|key| std::cmp::Reverse(key.len()));
    let pattern = keys.iter().map(|key| regex::escape(key)).collect::<Vec<_>>().join("|");
    Regex::new(&format!("^(?:{pattern})")).expect("form-tag table produces a valid regex")
});

/// Matches the comma/semicolon delimiter between declension entries.
pub static DECLENSION_DELIMITER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[,;]\s*").expect("static declension delimiter pattern"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_table_has_sixteen_entries() {
        assert_eq!(GENDER_TABLE.len(), 16);
    }

    #[test]
    fn ipa_table_matches_spec_bit_for_bit() {
        assert_eq!(IPA_TABLE.get("ch"), Some(&"tʃ"));
        assert_eq!(IPA_TABLE.get("j"), Some(&"ʒ"));
        assert_eq!(IPA_TABLE.get("sh"), Some(&"ʃ"));
    }

    #[test]
    fn form_tag_regex_prefers_longest_match() {
        let found = FORM_TAG_REGEX.find("זכר רבים ילדים").unwrap();
        assert_eq!(found.as_str(), "זכר רבים");
    }
}
