// Builds the `parse_wiki_text` tokenizer configuration once, for Hebrew Wiktionary's
// namespace and magic-word vocabulary. Grounded on the identically-named module in
// `parse_wiktionary_de`, adapted to the Hebrew namespace aliases.

/// Builds the tokenizer configuration shared by every page parse.
///
/// This is a pure, infallible constructor: the configuration does not depend on any
/// dump content and is built once at process start (see `tables::configuration`).
#[must_use]
pub fn create_configuration() -> parse_wiki_text::Configuration {
    parse_wiki_text::Configuration::new(&parse_wiki_text::ConfigurationSource {
        category_namespaces: &["category", "קטגוריה"],
        extension_tags: &[
            "categorytree",
            "gallery",
            "graph",
            "imagemap",
            "indicator",
            "inputbox",
            "math",
            "nowiki",
            "poem",
            "pre",
            "ref",
            "references",
            "score",
            "section",
            "source",
            "syntaxhighlight",
            "templatedata",
            "timeline",
        ],
        file_namespaces: &["file", "image", "קובץ", "תמונה"],
        link_trail: "\u{5d0}-\u{5ea}a-zA-Z",
        magic_words: &[
            "DISAMBIG",
            "FORCETOC",
            "HIDDENCAT",
            "INDEX",
            "NEWSECTIONLINK",
            "NOCC",
            "NOCOLLABORATIONHUBTOC",
            "NOCONTENTCONVERT",
            "NOEDITSECTION",
            "NOGALLERY",
            "NOINDEX",
            "NONEWSECTIONLINK",
            "NOTC",
            "NOTITLECONVERT",
            "NOTOC",
            "STATICREDIRECT",
            "TOC",
        ],
        protocols: &[
            "//",
            "bitcoin:",
            "ftp://",
            "ftps://",
            "geo:",
            "git://",
            "gopher://",
            "http://",
            "https://",
            "irc://",
            "ircs://",
            "magnet:",
            "mailto:",
            "mms://",
            "news:",
            "nntp://",
            "redis://",
            "sftp://",
            "sip:",
            "sips:",
            "sms:",
            "ssh://",
            "svn://",
            "tel:",
            "telnet://",
            "urn:",
            "worldwind://",
            "xmpp:",
        ],
        redirect_magic_words: &["REDIRECT", "הפניה"],
    })
}
