use thiserror::Error;

/// Errors raised while loading or querying a rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The queried category is not declared in the conditional ban table.
    #[error("unknown map category `{category}`")]
    UnknownCategory { category: String },
    /// The rule document is malformed or has the wrong shape.
    #[error("rule document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A list holds an empty or whitespace-only matcher.
    #[error("{list} contains a blank matcher")]
    BlankEntry { list: String },
    /// A list holds the same matcher twice.
    #[error("{list} lists `{entry}` more than once")]
    DuplicateEntry { list: String, entry: String },
    /// A conditional entry has an empty or whitespace-only category key.
    #[error("conditional ban table declares a blank category key")]
    BlankCategory,
    /// A category key starts or ends with whitespace.
    #[error("category `{category}` has leading or trailing whitespace")]
    PaddedCategory { category: String },
    /// Two conditional entries share a category key.
    #[error("category `{category}` is declared more than once")]
    DuplicateCategory { category: String },
}

impl RuleError {
    pub(crate) fn unknown_category(category: &str) -> Self {
        Self::UnknownCategory {
            category: category.to_string(),
        }
    }

    /// Whether this error came from a lookup rather than from loading data.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::UnknownCategory { .. })
    }
}
