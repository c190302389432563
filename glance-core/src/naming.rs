use regex::Regex;

/// Convert a mixed-case base name to its lowercase underscore-delimited form.
///
/// Runs of non-word characters collapse to a single separator, and a new
/// word also starts at every uppercase letter, so `PascalCase`, spaced, and
/// punctuated names all normalize the same way: `"IconArrowRight 2"` →
/// `"icon_arrow_right_2"`. Names that are already snake_case pass through
/// unchanged. Degenerate input produces an empty or underscore-only result
/// rather than an error.
pub fn snake_case(name: &str) -> String {
    let non_word_re = Regex::new(r"[^0-9A-Za-z_]+").unwrap();
    let spaced = non_word_re.replace_all(name, " ");

    // Split at separators (keeping empty tokens, mirroring a plain
    // split-then-join) and at each uppercase letter, which starts a new
    // token without being consumed.
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in spaced.chars() {
        if ch == ' ' {
            tokens.push(std::mem::take(&mut current));
        } else if ch.is_uppercase() && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    tokens.push(current);

    tokens
        .iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_splits_at_uppercase() {
        assert_eq!(snake_case("IconArrowRight"), "icon_arrow_right");
        assert_eq!(snake_case("IconHome"), "icon_home");
    }

    #[test]
    fn mixed_punctuation_and_digits() {
        assert_eq!(snake_case("IconArrowRight 2"), "icon_arrow_right_2");
        assert_eq!(snake_case("arrow-right.big"), "arrow_right_big");
    }

    #[test]
    fn existing_snake_case_is_preserved() {
        assert_eq!(snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn single_letter() {
        assert_eq!(snake_case("A"), "a");
        assert_eq!(snake_case("a"), "a");
    }

    #[test]
    fn consecutive_uppercase_split_individually() {
        assert_eq!(snake_case("ABC"), "a_b_c");
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        assert_eq!(snake_case(""), "");
        assert_eq!(snake_case("---"), "_");
    }
}
