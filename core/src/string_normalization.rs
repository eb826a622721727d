use unidecode::unidecode;

/// Fold a display name into its lookup key: ASCII, lowercase, single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Clean form with punctuation removed, so `Mélanie Laurent` matches
/// `melanie laurent` and `J.J. Abrams` matches `jj abrams`.
pub fn search_key(input: &str) -> String {
    clean_str(input)
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
