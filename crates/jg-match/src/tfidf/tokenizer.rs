use unicode_normalization::UnicodeNormalization;

/// Lowercased NFKC tokens of at least two characters, split on anything
/// that is not alphanumeric.
pub fn tokenize(text: &str) -> Vec<String> {
    let folded = text.nfkc().collect::<String>().to_lowercase();
    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        assert_eq!(
            tokenize("python, django/flask"),
            vec!["python", "django", "flask"]
        );
    }

    #[test]
    fn drops_single_character_tokens() {
        assert_eq!(tokenize("c r2 d"), vec!["r2"]);
    }

    #[test]
    fn folds_fullwidth_forms() {
        assert_eq!(tokenize("Ｐｙｔｈｏｎ"), vec!["python"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  .  ").is_empty());
    }
}
