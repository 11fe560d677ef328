//! Paragraph text extraction from HTML.
//!
//! Only `<p>` elements are read. Markup inside a paragraph (links, emphasis,
//! citations) is removed and its text kept. Script, style and comment blocks
//! are dropped before paragraphs are located.
//!
//! # Examples
//!
//! ```
//! use folio::fetch::html::extract_paragraph_text;
//!
//! let html = r#"<h1>Revenue</h1>
//! <p>In <a href="/wiki/Accounting">accounting</a>, revenue is income.</p>
//! <p>Profit &amp; loss.</p>"#;
//!
//! assert_eq!(
//!     extract_paragraph_text(html),
//!     "In accounting, revenue is income.\nProfit & loss."
//! );
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

static HIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("hidden block pattern is valid")
});

static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").expect("paragraph pattern is valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").expect("entity pattern is valid")
});

/// Text of every `<p>` element in document order, joined with `\n`.
///
/// Empty paragraphs contribute empty lines. A document without paragraphs
/// gives an empty string.
pub fn extract_paragraph_text(html: &str) -> String {
    let visible = HIDDEN.replace_all(html, "");
    PARAGRAPH
        .captures_iter(&visible)
        .map(|caps| {
            let inner = caps.get(1).map_or("", |m| m.as_str());
            decode_entities(&TAG.replace_all(inner, ""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode named and numeric character references. Unknown names are left as-is.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(name)
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "hellip" => '…',
        "copy" => '©',
        "reg" => '®',
        "euro" => '€',
        "pound" => '£',
        "times" => '×',
        "deg" => '°',
        "Agrave" => 'À',
        "Aacute" => 'Á',
        "Acirc" => 'Â',
        "Atilde" => 'Ã',
        "Auml" => 'Ä',
        "Aring" => 'Å',
        "AElig" => 'Æ',
        "Ccedil" => 'Ç',
        "Egrave" => 'È',
        "Eacute" => 'É',
        "Ecirc" => 'Ê',
        "Euml" => 'Ë',
        "Igrave" => 'Ì',
        "Iacute" => 'Í',
        "Icirc" => 'Î',
        "Iuml" => 'Ï',
        "ETH" => 'Ð',
        "Ntilde" => 'Ñ',
        "Ograve" => 'Ò',
        "Oacute" => 'Ó',
        "Ocirc" => 'Ô',
        "Otilde" => 'Õ',
        "Ouml" => 'Ö',
        "Oslash" => 'Ø',
        "Ugrave" => 'Ù',
        "Uacute" => 'Ú',
        "Ucirc" => 'Û',
        "Uuml" => 'Ü',
        "Yacute" => 'Ý',
        "THORN" => 'Þ',
        "szlig" => 'ß',
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "atilde" => 'ã',
        "auml" => 'ä',
        "aring" => 'å',
        "aelig" => 'æ',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "euml" => 'ë',
        "igrave" => 'ì',
        "iacute" => 'í',
        "icirc" => 'î',
        "iuml" => 'ï',
        "eth" => 'ð',
        "ntilde" => 'ñ',
        "ograve" => 'ò',
        "oacute" => 'ó',
        "ocirc" => 'ô',
        "otilde" => 'õ',
        "ouml" => 'ö',
        "oslash" => 'ø',
        "ugrave" => 'ù',
        "uacute" => 'ú',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "yacute" => 'ý',
        "thorn" => 'þ',
        "yuml" => 'ÿ',
        "OElig" => 'Œ',
        "oelig" => 'œ',
        "Scaron" => 'Š',
        "scaron" => 'š',
        "Yuml" => 'Ÿ',
        "iexcl" => '¡',
        "cent" => '¢',
        "yen" => '¥',
        "sect" => '§',
        "uml" => '¨',
        "laquo" => '«',
        "raquo" => '»',
        "middot" => '·',
        "para" => '¶',
        "iquest" => '¿',
        "divide" => '÷',
        "plusmn" => '±',
        "frac12" => '½',
        "frac14" => '¼',
        "frac34" => '¾',
        "shy" => '\u{ad}',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_markup_and_attributes() {
        let html = r#"<P class="lead">Gross <b>margin</b><sup>[1]</sup> is
revenue minus cost.</P><pre>not a paragraph</pre><param name="x">"#;
        assert_eq!(
            extract_paragraph_text(html),
            "Gross margin[1] is\nrevenue minus cost."
        );
    }

    #[test]
    fn test_latin1_letters_decoded() {
        assert_eq!(decode_entities("caf&eacute;"), "café");
        assert_eq!(
            decode_entities("&Agrave; la na&iuml;ve &AElig;neas, &szlig; &yuml;"),
            "À la naïve Æneas, ß ÿ"
        );
        assert_eq!(
            extract_paragraph_text("<p>Caf&eacute; cr&egrave;me &laquo;ici&raquo;</p>"),
            "Café crème «ici»"
        );
        assert_eq!(decode_entities("&frac12; &bogus;"), "½ &bogus;");
    }

    #[test]
    fn test_hidden_blocks_removed() {
        let html = "<script>var p = '<p>fake</p>';</script><!-- <p>old</p> --><p>real</p>";
        assert_eq!(extract_paragraph_text(html), "real");
    }

    #[test]
    fn test_empty_paragraphs_and_no_paragraphs() {
        assert_eq!(extract_paragraph_text("<p>a</p><p></p><p>b</p>"), "a\n\nb");
        assert_eq!(extract_paragraph_text("<div>nothing</div>"), "");
        assert_eq!(extract_paragraph_text(""), "");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("&lt;p&gt; &#39;x&#x27; &eacute;"), "<p> 'x' &eacute;");
        assert_eq!(decode_entities("R&amp;D"), "R&D");
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
    }
}
