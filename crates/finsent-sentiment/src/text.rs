/// A whitespace-delimited word with surrounding punctuation removed.
pub(crate) struct Token<'a> {
    /// Original casing, used for emphasis detection.
    pub(crate) raw: &'a str,
    pub(crate) lower: String,
}

/// Split on whitespace and strip leading/trailing non-alphanumeric characters.
/// Inner apostrophes and hyphens survive (`isn't`, `sell-off`). Tokens that
/// are pure punctuation are dropped.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .filter_map(|word| {
            let raw = word.trim_matches(|c: char| !c.is_alphanumeric());
            if raw.is_empty() {
                None
            } else {
                Some(Token {
                    raw,
                    lower: raw.to_lowercase(),
                })
            }
        })
        .collect()
}

pub(crate) fn is_negation(word: &str) -> bool {
    const NEGATIONS: &[&str] = &[
        "not", "no", "never", "neither", "nor", "none", "nothing", "nobody", "nowhere",
        "cannot", "without", "hardly", "barely", "scarcely",
    ];
    NEGATIONS.contains(&word) || word.ends_with("n't")
}
