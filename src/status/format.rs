//! Joining fragments into a status line.

use crate::config::LineFormat;

/// Drop empty fragments, join the rest and wrap them.
///
/// An omitted fragment never leaves a separator behind. When every
/// fragment is empty only the prefix and suffix remain.
pub fn join_fragments<S: AsRef<str>>(fragments: &[S], format: &LineFormat) -> String {
    let joined = fragments
        .iter()
        .map(AsRef::as_ref)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(&format.separator);

    let mut line = String::with_capacity(format.prefix.len() + joined.len() + format.suffix.len());
    line.push_str(&format.prefix);
    line.push_str(&joined);
    line.push_str(&format.suffix);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe() -> LineFormat {
        LineFormat {
            separator: " | ".to_string(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    #[test]
    fn test_default_wrapping() {
        let line = join_fragments(&["ωhome/130/-42", "β57-", "τ03/09-07:05"], &LineFormat::default());
        assert_eq!(line, " ωhome/130/-42 β57- τ03/09-07:05 ");
    }

    #[test]
    fn test_empty_fragments_leave_no_separator() {
        let line = join_fragments(&["", "a", "", "", "b", ""], &pipe());
        assert_eq!(line, "a | b");
        assert!(!line.contains(" |  | "));
    }

    #[test]
    fn test_all_empty() {
        let empty: [&str; 3] = ["", "", ""];
        assert_eq!(join_fragments(&empty, &pipe()), "");
        assert_eq!(join_fragments(&empty, &LineFormat::default()), "  ");
    }

    #[test]
    fn test_order_is_preserved() {
        let line = join_fragments(&["z", "a", "m"], &pipe());
        assert_eq!(line, "z | a | m");
    }
}
