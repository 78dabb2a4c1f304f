//! Doc comment reformatting.
//!
//! Extraction lives in the front end (it owns the comment map); this module
//! only reshapes the extracted text into Rust doc syntax.

/// Prefix every line with the Rust doc marker, preserving line order and
/// count. Empty input yields empty output — no spurious markers.
pub fn reformat(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    raw.lines()
        .map(|line| {
            if line.is_empty() {
                "///".to_string()
            } else {
                format!("/// {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(reformat(""), "");
    }

    #[test]
    fn prefixes_each_line_in_order() {
        assert_eq!(reformat("one\ntwo\nthree"), "/// one\n/// two\n/// three");
    }

    #[test]
    fn blank_interior_lines_keep_a_bare_marker() {
        assert_eq!(reformat("one\n\ntwo"), "/// one\n///\n/// two");
    }

    #[test]
    fn line_count_is_preserved() {
        let raw = "a\nb\nc";
        assert_eq!(reformat(raw).lines().count(), raw.lines().count());
    }
}
