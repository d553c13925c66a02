//! The Page Assembler: the strict failure-isolation boundary — one dump page
//! either fully succeeds or is dropped with a diagnostic, and its failure
//! never reaches a sibling page.

use crate::entry::build_entry;
use crate::model::Page;
use crate::section::level_two_sections;
use crate::tables::CONFIGURATION;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// The fields the Dump Driver extracts from one `<page>` XML element.
pub struct RawPage {
    pub pid: u64,
    pub revision_id: Option<u64>,
    pub sha1: Option<String>,
    pub title: String,
    pub text: Option<String>,
}

/// The strict-boundary error taxonomy: anything here means the whole page is
/// dropped. Normalizer-level failures never reach this type — they are
/// swallowed node-by-node instead, under a defensive/strict split between
/// normalization and assembly.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("page {0:?} has no <revision> element")]
    MissingRevision(String),
    #[error("page {0:?}'s revision has no <text> element")]
    MissingText(String),
    #[error("page {0:?} failed during section/entry assembly: {1}")]
    AssemblyFailed(String, String),
}

/// Builds a [`Page`] from its raw extracted fields, or a [`PageError`] naming
/// why the page is being dropped.
pub fn build_page(raw: RawPage) -> Result<Page, PageError> {
    let revision_id = raw.revision_id.ok_or_else(|| PageError::MissingRevision(raw.title.clone()))?;
    let sha1 = raw.sha1.ok_or_else(|| PageError::MissingRevision(raw.title.clone()))?;
    let text = raw.text.ok_or_else(|| PageError::MissingText(raw.title.clone()))?;

    let entries = panic::catch_unwind(AssertUnwindSafe(|| {
        let parsed = CONFIGURATION.parse(&text);
        let sections = level_two_sections(&text, &parsed.nodes);
        sections.iter().map(|section| build_entry(&text, section)).collect::<Vec<_>>()
    }))
    .map_err(|_| PageError::AssemblyFailed(raw.title.clone(), "section or entry assembly panicked".to_string()))?;

    Ok(Page { pid: raw.pid, revision_id, sha1, title: raw.title, entries })
}
