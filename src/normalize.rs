//! Text normalization for extracted field values.
//!
//! Every company or role candidate passes through [`normalize`] before it is
//! checked against length bounds or blocklists, so the values returned by the
//! extractor never carry raw whitespace runs, markup entities or stray
//! punctuation.

use crate::patterns::{DISALLOWED_CHARS, HTML_ENTITY, INVISIBLE_CHARS, WHITESPACE_NORMALIZE};

/// Clean raw extracted text.
///
/// Steps, in order:
/// 1. Decode `&nbsp; &amp; &lt; &gt; &quot; &apos; &#39; &#34; &ndash; &mdash;`
/// 2. Strip zero-width and control characters
/// 3. Drop characters outside word characters, whitespace and `& . , ( ) -`
/// 4. Collapse whitespace runs and trim
///
/// The function is total and idempotent.
///
/// # Example
///
/// ```rust
/// use jobscout::normalize::normalize;
///
/// assert_eq!(normalize("  Acme&nbsp;&amp;\n Sons™ "), "Acme & Sons");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let decoded = HTML_ENTITY.replace_all(raw, |caps: &regex::Captures| {
        match &caps[1] {
            "nbsp" => " ",
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" | "#34" => "\"",
            "apos" | "#39" => "'",
            // ndash, mdash
            _ => "-",
        }
    });
    let visible = INVISIBLE_CHARS.replace_all(&decoded, "");
    let allowed = DISALLOWED_CHARS.replace_all(&visible, "");

    WHITESPACE_NORMALIZE
        .replace_all(&allowed, " ")
        .trim()
        .to_string()
}

/// Character count used for all length bounds.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Title-case a single domain label ("acme" -> "Acme").
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("Senior\n\n   Backend\tEngineer"), "Senior Backend Engineer");
    }

    #[test]
    fn test_decodes_entities_before_filtering() {
        assert_eq!(normalize("Procter &amp; Gamble"), "Procter & Gamble");
        assert_eq!(normalize("A&nbsp;B"), "A B");
        assert_eq!(normalize("Dev &ndash; Remote"), "Dev - Remote");
        // Decoded quotes are themselves filtered out
        assert_eq!(normalize("&quot;Acme&quot;"), "Acme");
    }

    #[test]
    fn test_strips_invisible_characters() {
        assert_eq!(normalize("Ac\u{200B}me\u{FEFF} Corp"), "Acme Corp");
        assert_eq!(normalize("\u{00AD}Data\u{200D}"), "Data");
    }

    #[test]
    fn test_removes_disallowed_characters() {
        assert_eq!(normalize("Engineer! (Remote) @ Acme, Inc."), "Engineer (Remote) Acme, Inc.");
        assert_eq!(normalize("C++ / Rust"), "C Rust");
    }

    #[test]
    fn test_keeps_unicode_letters() {
        assert_eq!(normalize("Zürich Ingénieur"), "Zürich Ingénieur");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_idempotent_on_tricky_inputs() {
        let samples = [
            "&amp;amp; nested",
            "  Acme &nbsp;&nbsp; Corp  ",
            "a ! b ? c",
            "\u{200B}\n\u{200B}x",
            "Data &mdash;&gt; Science",
            "naïve — café | Jobs",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("acme"), "Acme");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ørsted"), "Ørsted");
    }
}
