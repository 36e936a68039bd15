//! Plain-text extraction from HTML and PDF documents.
//!
//! Both extractors are approximations. HTML loses its structure entirely;
//! PDF extraction only sees text shown by uncompressed content streams.

use crate::lint::lazy_regex;

lazy_regex!(INVISIBLE, r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>");
lazy_regex!(COMMENT, r"(?s)<!--.*?-->");
lazy_regex!(TAG, r"<[^>]+>");
lazy_regex!(WHITESPACE, r"\s+");
lazy_regex!(TEXT_OBJECT, r"(?s)\bBT\b(.*?)\bET\b");
lazy_regex!(LITERAL, r"\(((?:[^()\\]|\\.)*)\)");

/// Strip tags and collapse whitespace.
pub fn html_to_text(html: &str) -> String {
    let text = INVISIBLE.replace_all(html, " ");
    let text = COMMENT.replace_all(&text, " ");
    let text = TAG.replace_all(&text, " ");
    let text = decode_entities(&text);
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Text shown by literal strings inside `BT ... ET` text objects.
pub fn pdf_to_text(bytes: &[u8]) -> String {
    // Latin-1 maps every byte to one char, keeping offsets aligned.
    let raw: String = bytes.iter().map(|&b| b as char).collect();
    TEXT_OBJECT
        .captures_iter(&raw)
        .map(|object| {
            LITERAL
                .captures_iter(&object[1])
                .map(|lit| unescape_literal(&lit[1]))
                .collect::<Vec<_>>()
                .join("")
        })
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `bytes` starts like a PDF file.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}

fn unescape_literal(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
