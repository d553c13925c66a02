//! Integration tests covering the end-to-end scenarios and boundary behaviors
//! of the dump-to-page pipeline.

use parse_wiktionary_he::dump::read_pages;
use parse_wiktionary_he::model::{DeclensionTag, Gender, PartOfSpeech, Reference};
use parse_wiktionary_he::page::{build_page, RawPage};
use parse_wiktionary_he::value_parsers::parse_form;
use parse_wiktionary_he::{markup, value_parsers};
use pretty_assertions::assert_eq;

fn page(pid: u64, title: &str, text: &str) -> RawPage {
    RawPage {
        pid,
        revision_id: Some(pid * 10),
        sha1: Some(format!("sha{pid}")),
        title: title.to_string(),
        text: Some(text.to_string()),
    }
}

#[test]
fn a_talk_namespace_page_is_filtered_out_at_the_driver() {
    let xml = r#"<mediawiki>
<page>
  <title>Talk:שלום</title>
  <ns>1</ns>
  <id>2</id>
  <revision><id>11</id><sha1>def</sha1><text>דיון</text></revision>
</page>
</mediawiki>"#;
    assert!(read_pages(xml, false).is_empty());
}

#[test]
fn an_ascii_titled_page_is_filtered_out() {
    let xml = r#"<mediawiki>
<page>
  <title>hello</title>
  <ns>0</ns>
  <id>3</id>
  <revision><id>12</id><sha1>ghi</sha1><text>טקסט</text></revision>
</page>
</mediawiki>"#;
    assert!(read_pages(xml, false).is_empty());
}

#[test]
fn grammar_and_definition_are_assembled_from_a_level_two_section() {
    let text = "== שלום ==\n{{ניתוח דקדוקי|מין=זכר|חלק דיבר=שם עצם}}\n# ברכה.";
    let result = build_page(page(1, "שלום", text)).unwrap();
    assert_eq!(result.entries.len(), 1);
    let entry = &result.entries[0];
    let grammar = entry.grammatical_info.as_ref().unwrap();
    assert_eq!(grammar.gender, Some(Gender::Male));
    assert_eq!(grammar.part_of_speech, Some(PartOfSpeech::Noun));
    assert_eq!(entry.definitions.len(), 1);
    assert_eq!(entry.definitions[0].definition, "ברכה.");
}

#[test]
fn translations_are_aggregated_per_language() {
    let text = "== שלום ==\n# ברכה.\n=== תרגום ===\n* {{ת|en|hello}}\n* {{ת|en|peace}}\n* {{ת|fr|bonjour}}";
    let result = build_page(page(1, "שלום", text)).unwrap();
    let translations = &result.entries[0].translations;
    assert_eq!(translations.get("en"), Some(&vec!["hello".to_string(), "peace".to_string()]));
    assert_eq!(translations.get("fr"), Some(&vec!["bonjour".to_string()]));
}

#[test]
fn borrowed_bold_text_does_not_imply_is_borrowed_but_the_register_template_does() {
    let text = "== מילה ==\n# '''בהשאלה''' מילה נרדפת {{משלב|סלנג}}";
    let result = build_page(page(1, "מילה", text)).unwrap();
    let definition = &result.entries[0].definitions[0];
    assert!(!definition.is_borrowed);
    assert_eq!(definition.register.as_deref(), Some("סלנג"));
}

#[test]
fn an_example_sublist_is_extracted_with_its_source() {
    let text = "== מילה ==\n# הגדרה.\n#:* {{משל|דוגמה|ספר|עמוד 3}}";
    let result = build_page(page(1, "מילה", text)).unwrap();
    let examples = &result.entries[0].definitions[0].examples;
    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0].text, "דוגמה");
    assert_eq!(examples[0].kind, "משל");
    assert_eq!(examples[0].source, vec!["ספר".to_string(), "עמוד 3".to_string()]);
}

#[test]
fn wikilink_with_and_without_display_text() {
    let links = value_parsers::parse_wikilinks("[[חתול|B]] [[חתול]]");
    assert_eq!(links[0].text, "B");
    assert_eq!(links[0].link, "חתול");
    assert_eq!(links[1].text, "חתול");
    assert_eq!(links[1].link, "חתול");
}

#[test]
fn a_nested_wikilink_image_caption_is_dropped_by_the_stripper_but_kept_by_parse_wikilinks() {
    let wiki_text = "[[File:תמונה|[[חתול]]]]";
    assert_eq!(markup::strip_markup(wiki_text), "");
    let links = value_parsers::parse_wikilinks(wiki_text);
    assert!(links.iter().any(|link| link.link == "חתול"));
}

#[test]
fn pronunciation_stress_marker_moves_and_transliterates() {
    let args = [("הגייה".to_string(), "'''sh'''alom".to_string())].into_iter().collect();
    let info = parse_wiktionary_he::grammar::build_grammar_info(&args);
    assert_eq!(info.pronunciation, Some("'ʃalom".to_string()));
}

#[test]
fn declension_string_splits_into_tagged_forms() {
    assert_eq!(parse_form("ר' ספרים"), (DeclensionTag::Plural, "ספרים".to_string()));
    assert_eq!(parse_form("נ' ספרה"), (DeclensionTag::Female, "ספרה".to_string()));
}

#[test]
fn a_numbered_root_template_concatenates_its_positional_arguments() {
    let args = [("שורש".to_string(), "{{שרש3|כ|ת|ב}}".to_string())].into_iter().collect();
    let info = parse_wiktionary_he::grammar::build_grammar_info(&args);
    assert_eq!(info.root, Some("כתב".to_string()));
}

#[test]
fn markup_strip_is_idempotent() {
    let once = markup::strip_markup("'''שלום''' עולם [[קישור|טקסט]]");
    let twice = markup::strip_markup(&once);
    assert_eq!(once, twice);
}

#[test]
fn an_empty_page_text_yields_an_entry_less_page_not_a_crash() {
    let result = build_page(page(1, "ריק", "")).unwrap();
    assert!(result.entries.is_empty());
}

#[test]
fn a_page_missing_text_is_dropped_while_its_sibling_still_parses() {
    let xml = r#"<mediawiki>
<page>
  <title>חסר</title>
  <ns>0</ns>
  <id>4</id>
  <revision><id>40</id><sha1>abc</sha1></revision>
</page>
<page>
  <title>שלום</title>
  <ns>0</ns>
  <id>1</id>
  <revision>
    <id>10</id>
    <sha1>abc123</sha1>
    <text>== שלום ==
{{ניתוח דקדוקי|מין=זכר}}
# ברכה.</text>
  </revision>
</page>
</mediawiki>"#;
    let pages = read_pages(xml, false);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].title, "שלום");
}

#[test]
fn sequential_and_parallel_assembly_agree_on_the_resulting_page_set() {
    let xml = r#"<mediawiki>
<page>
  <title>שלום</title>
  <ns>0</ns>
  <id>1</id>
  <revision><id>10</id><sha1>abc</sha1><text>== שלום ==
# ברכה.</text></revision>
</page>
<page>
  <title>בוקר</title>
  <ns>0</ns>
  <id>2</id>
  <revision><id>11</id><sha1>def</sha1><text>== בוקר ==
# חלק מהיום.</text></revision>
</page>
</mediawiki>"#;
    let mut sequential = read_pages(xml, false);
    let mut parallel = read_pages(xml, true);
    sequential.sort_by(|a, b| a.pid.cmp(&b.pid));
    parallel.sort_by(|a, b| a.pid.cmp(&b.pid));
    assert_eq!(sequential, parallel);
}

#[test]
fn synonyms_and_antonyms_are_independent_mixed_reference_lists() {
    let text = "== מילה ==\n# הגדרה.\n=== מילים נרדפות ===\n* [[שמחה]]\n* פשוט\n=== ניגודים ===\n* [[עצב]]";
    let result = build_page(page(1, "מילה", text)).unwrap();
    let entry = &result.entries[0];
    assert_eq!(entry.synonyms.len(), 2);
    assert!(entry.synonyms.iter().any(|r| matches!(r, Reference::Plain { text } if text == "פשוט")));
    assert_eq!(entry.antonyms.len(), 1);
    assert!(entry.antonyms.iter().any(|r| matches!(r, Reference::Link(link) if link.link == "עצב")));
}
