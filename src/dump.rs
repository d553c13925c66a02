//! The Dump Driver: streams `<page>` elements out of a MediaWiki export
//! document, filters to the main namespace and Hebrew-only titles, and
//! assembles each into a [`Page`] with per-page failure isolation.

use crate::model::Page;
use crate::page::{build_page, RawPage};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Extracts, filters and assembles every page in `xml`. `parallel` selects
/// between sequential and `rayon`-driven page assembly; either way a page's
/// failure never affects its siblings, and output order is not a contract of
/// this function.
#[must_use]
pub fn read_pages(xml: &str, parallel: bool) -> Vec<Page> {
    let raw_pages = extract_raw_pages(xml);
    log::info!("extracted {} candidate page(s) from the dump", raw_pages.len());

    if parallel {
        use rayon::prelude::*;
        raw_pages.into_par_iter().filter_map(assemble).collect()
    } else {
        raw_pages.into_iter().filter_map(assemble).collect()
    }
}

fn assemble(raw: RawPage) -> Option<Page> {
    let title = raw.title.clone();
    match build_page(raw) {
        Ok(page) => Some(page),
        Err(error) => {
            log::warn!("dropping page {title:?}: {error}");
            None
        }
    }
}

/// True if `title` contains an ASCII letter — used to drop multi-language and
/// transliterated entries that are out of scope for this pipeline.
fn has_ascii_letter(title: &str) -> bool {
    title.chars().any(|c| c.is_ascii_alphabetic())
}

#[derive(Default)]
struct PageScratch {
    in_revision: bool,
    revision_id_seen: bool,
    ns: String,
    id: String,
    title: String,
    revision_id: Option<u64>,
    sha1: Option<String>,
    text: Option<String>,
}

/// Reads `<page>` elements one at a time from a streaming reader rather than
/// materializing the whole document as a DOM — namespace and title filtering
/// happen here too, so a skipped page never reaches the Page Assembler at all.
fn extract_raw_pages(xml: &str) -> Vec<RawPage> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut pages = Vec::new();
    let mut current_tag = String::new();
    let mut scratch = PageScratch::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) => {
                let tag = tag_name(&start);
                match tag.as_str() {
                    "page" => scratch = PageScratch::default(),
                    "revision" => scratch.in_revision = true,
                    _ => {}
                }
                current_tag = tag;
            }
            Ok(Event::Text(text)) => {
                let Ok(value) = text.unescape() else { continue };
                record_text(&mut scratch, &current_tag, &value);
            }
            Ok(Event::CData(cdata)) => {
                let value = String::from_utf8_lossy(cdata.as_ref()).into_owned();
                record_text(&mut scratch, &current_tag, &value);
            }
            Ok(Event::End(end)) => match tag_name_close(&end).as_str() {
                "revision" => scratch.in_revision = false,
                "page" => {
                    if scratch.ns == "0" && !has_ascii_letter(&scratch.title) {
                        pages.push(RawPage {
                            pid: scratch.id.parse().unwrap_or(0),
                            revision_id: scratch.revision_id,
                            sha1: scratch.sha1.take(),
                            title: scratch.title.clone(),
                            text: scratch.text.take(),
                        });
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(error) => {
                log::error!("stopping dump read after an XML error: {error}");
                break;
            }
            _ => {}
        }
        buf.clear();
    }
    pages
}

fn record_text(scratch: &mut PageScratch, tag: &str, value: &str) {
    match (tag, scratch.in_revision) {
        ("title", false) => scratch.title.push_str(value),
        ("ns", false) => scratch.ns.push_str(value),
        ("id", false) => scratch.id.push_str(value),
        // A revision's own <id> is its first child in MediaWiki's export
        // schema; later <id> elements belong to the nested <contributor> and
        // must not clobber it.
        ("id", true) if !scratch.revision_id_seen => {
            scratch.revision_id = value.parse().ok();
            scratch.revision_id_seen = true;
        }
        ("sha1", true) => scratch.sha1.get_or_insert_with(String::new).push_str(value),
        ("text", true) => scratch.text.get_or_insert_with(String::new).push_str(value),
        _ => {}
    }
}

fn tag_name(start: &quick_xml::events::BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn tag_name_close(end: &quick_xml::events::BytesEnd) -> String {
    String::from_utf8_lossy(end.name().as_ref()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"<mediawiki>
<page>
  <title>שלום</title>
  <ns>0</ns>
  <id>1</id>
  <revision>
    <id>10</id>
    <sha1>abc123</sha1>
    <text>== שלום ==
# ברכה.</text>
  </revision>
</page>
<page>
  <title>Talk:שלום</title>
  <ns>1</ns>
  <id>2</id>
  <revision><id>11</id><sha1>def</sha1><text>דיון</text></revision>
</page>
<page>
  <title>hello</title>
  <ns>0</ns>
  <id>3</id>
  <revision><id>12</id><sha1>ghi</sha1><text>טקסט</text></revision>
</page>
</mediawiki>"#;

    #[test]
    fn filters_non_main_namespace_and_ascii_titles() {
        let pages = read_pages(DUMP, false);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "שלום");
        assert_eq!(pages[0].pid, 1);
        assert_eq!(pages[0].revision_id, 10);
        assert_eq!(pages[0].sha1, "abc123");
    }

    #[test]
    fn sequential_and_parallel_assembly_agree() {
        let sequential = read_pages(DUMP, false);
        let parallel = read_pages(DUMP, true);
        assert_eq!(sequential.len(), parallel.len());
        assert_eq!(sequential[0].title, parallel[0].title);
    }
}
