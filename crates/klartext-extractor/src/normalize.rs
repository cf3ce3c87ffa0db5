//! Deterministic text cleanup for raw material descriptions

/// Normalize a raw description string
///
/// Collapses whitespace runs to single spaces, rewrites the `//` separator
/// to ` | `, and trims. After the first collapse the only whitespace that
/// can surround a pipe is a single space, so re-collapsing after the
/// rewrite also normalizes pipe spacing.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
///
/// # Examples
///
/// ```
/// use klartext_extractor::normalize;
///
/// let cleaned = normalize("  für APIC  Wasserfilter//Ref: 9000  ");
/// assert_eq!(cleaned, "für APIC Wasserfilter | Ref: 9000");
/// ```
pub fn normalize(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let piped = collapsed.replace("//", " | ");
    collapse_whitespace(&piped)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("Siemens   Schütz\t230V"), "Siemens Schütz 230V");
    }

    #[test]
    fn test_double_slash_becomes_pipe() {
        assert_eq!(normalize("a//b"), "a | b");
        assert_eq!(normalize("a // b"), "a | b");
    }

    #[test]
    fn test_pipe_spacing_normalized() {
        assert_eq!(normalize("a   |   b"), "a | b");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  Lager 6204  "), "Lager 6204");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t  "), "");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "für APIC Wasserfilter FMA 9000 | Ref: 9000/CPF01/230/VH | Pos. 48",
            "a//b//c",
            "  x  //  y ",
            "a///b",
            "////",
            "a | b",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }
}
