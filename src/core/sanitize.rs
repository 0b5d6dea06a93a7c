// src/core/sanitize.rs

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `Some(trimmed)` unless the text is blank.
pub fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}

/// Search keywords go out lower-cased with spaces as `+`.
/// Everything else is form-encoded.
pub fn query_term(s: &str) -> String {
    let lowered = normalize_ws(s).to_lowercase();
    url::form_urlencoded::byte_serialize(lowered.as_bytes()).collect()
}

/// Form-encode without changing case (locations keep their capitalisation).
pub fn query_value(s: &str) -> String {
    url::form_urlencoded::byte_serialize(normalize_ws(s).as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }

    #[test]
    fn blank_is_none() {
        assert_eq!(non_blank(" \n "), None);
        assert_eq!(non_blank(" x "), Some(s!("x")));
    }

    #[test]
    fn keyword_is_lowered_and_plussed() {
        assert_eq!(query_term("Junior  Data"), "junior+data");
        assert_eq!(query_term("C++ dev"), "c%2B%2B+dev");
    }

    #[test]
    fn location_keeps_case() {
        assert_eq!(query_value("Greater London"), "Greater+London");
    }
}
