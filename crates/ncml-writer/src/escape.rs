//! String escaping for NCML attribute values.

/// Make a raw string safe for embedding in an XML attribute value.
///
/// Substitutions run sequentially in a fixed order: `"` first, then `&`,
/// then (when `collapse_spaces` is set) space to `_`, then `<` and `>`.
/// Because the `&` pass runs after the quote pass, a literal `"` comes out
/// as `&amp;quote;` — this matches the legacy output grammar downstream
/// consumers parse and must not be reordered.
///
/// Escaping is single-pass: applying it twice double-escapes ampersands.
pub fn sanitize(raw: &str, collapse_spaces: bool) -> String {
    let mut s = raw.replace('"', "&quote;");
    s = s.replace('&', "&amp;");
    if collapse_spaces {
        s = s.replace(' ', "_");
    }
    s = s.replace('<', "&lt;");
    s.replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_string_passes_through() {
        assert_eq!(sanitize("temperature", true), "temperature");
    }

    #[test]
    fn test_spaces_collapse_to_underscores() {
        assert_eq!(sanitize("sea surface", true), "sea_surface");
    }

    #[test]
    fn test_spaces_kept_when_disabled() {
        assert_eq!(sanitize("sea surface", false), "sea surface");
    }

    #[test]
    fn test_ampersand() {
        assert_eq!(sanitize("salt & pepper", false), "salt &amp; pepper");
    }

    #[test]
    fn test_angle_brackets() {
        assert_eq!(sanitize("a<b>c", true), "a&lt;b&gt;c");
    }

    #[test]
    fn test_quote_is_double_processed() {
        // The quote pass emits &quote; whose ampersand is then caught by
        // the & pass. Legacy ordering, asserted exactly.
        assert_eq!(sanitize("\"", true), "&amp;quote;");
    }

    #[test]
    fn test_not_idempotent() {
        let once = sanitize("&", true);
        assert_eq!(once, "&amp;");
        assert_eq!(sanitize(&once, true), "&amp;amp;");
    }

    #[test]
    fn test_no_unescaped_specials_survive() {
        let out = sanitize("\"x\" & <y> z", true);
        assert!(!out.contains('"'));
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains(' '));
    }
}
