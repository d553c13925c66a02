//! Parse dictionary pages from the Hebrew language edition of Wiktionary into structured data.
//!
//! # Examples
//!
//! ```
//! let page = parse_wiktionary_he::page::build_page(parse_wiktionary_he::page::RawPage {
//!     pid: 1,
//!     revision_id: Some(1),
//!     sha1: Some("abc".to_string()),
//!     title: "שלום".to_string(),
//!     text: Some("== שלום ==\n{{ניתוח דקדוקי|מין=זכר}}\n# ברכה.".to_string()),
//! })
//! .unwrap();
//! assert_eq!(page.entries[0].definitions[0].definition, "ברכה.");
//! ```
//!
//! # Limitations
//!
//! Overview-template parameters with highly inconsistent formats (declension
//! tables, for example) are normalized on a best-effort basis; unrecognized
//! form-tag prefixes fall through to the `unknown` canonical tag rather than
//! being dropped, so downstream consumers still see the raw form text.

#![forbid(unsafe_code)]

pub mod configuration;
pub mod dump;
pub mod entry;
pub mod grammar;
pub mod list_extractor;
pub mod markup;
pub mod model;
pub mod page;
pub mod section;
pub mod tables;
pub mod util;
pub mod value_parsers;

pub use configuration::create_configuration;
pub use model::Page;
