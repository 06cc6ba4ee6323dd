//! Process-wide map rule table.
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use crate::constants::LOG_TARGET;
use crate::document::RuleDocument;
use crate::error::RuleError;

const DEFAULT_RULES_DATA: &str = include_str!("../data/rules.json");

/// Matchers permitted only inside maps of one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct CategoryRules {
    note: Option<String>,
    matchers: BTreeSet<String>,
}

/// Immutable ban, override and conditional-ban data for the map checker.
///
/// The table stores matcher strings and answers membership questions. It
/// never compares a matcher against a map object name; whether a ban matcher
/// is an exact name, a prefix or a substring is up to the checker. Checkers
/// are expected to apply the rules in this order:
///
/// 1. [`is_legal_override`](Self::is_legal_override) makes a name legal.
/// 2. [`is_absolutely_banned`](Self::is_absolutely_banned) makes it illegal.
/// 3. A hit in [`conditional_matchers_for`](Self::conditional_matchers_for)
///    makes it illegal unless the map belongs to that category.
/// 4. Anything else is legal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleTable {
    absolute_bans: BTreeSet<String>,
    legal_overrides: BTreeSet<String>,
    conditional: BTreeMap<String, CategoryRules>,
}

impl RuleTable {
    /// Shared table built from the bundled `data/rules.json`.
    ///
    /// # Panics
    ///
    /// Panics on first use if the bundled rule data is invalid.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static TABLE: OnceLock<RuleTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::load_from_static().expect("valid bundled map rules"))
    }

    /// Build a fresh table from the bundled rule data.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON fails to parse or validate.
    pub fn load_from_static() -> Result<Self, RuleError> {
        Self::from_json(DEFAULT_RULES_DATA)
    }

    /// Build a table from a JSON rule document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the document repeats or
    /// blanks out an entry or category.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        Self::from_document(RuleDocument::from_json(json)?)
    }

    /// Build a table from an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document fails [`RuleDocument::validate`].
    pub fn from_document(document: RuleDocument) -> Result<Self, RuleError> {
        document.validate()?;

        let conditional = document
            .conditionally_illegal_matches
            .into_iter()
            .map(|entry| {
                let rules = CategoryRules {
                    note: entry.note,
                    matchers: entry.matchers.into_iter().collect(),
                };
                (entry.category, rules)
            })
            .collect();
        let table = Self {
            absolute_bans: document.illegal_matches.into_iter().collect(),
            legal_overrides: document.legal_overrides.into_iter().collect(),
            conditional,
        };

        log::debug!(
            target: LOG_TARGET,
            "loaded map rules: {} bans, {} overrides, {} categories",
            table.absolute_bans.len(),
            table.legal_overrides.len(),
            table.conditional.len()
        );
        let shadowed: Vec<&str> = table.overridden_bans().collect();
        if !shadowed.is_empty() {
            log::debug!(target: LOG_TARGET, "overrides shadow bans: {shadowed:?}");
        }
        Ok(table)
    }

    /// Whether `name` is one of the absolute ban matchers.
    ///
    /// This is whole-string membership of the stored matcher. Checkers that
    /// treat bans as prefixes should iterate [`absolute_bans`](Self::absolute_bans).
    #[must_use]
    pub fn is_absolutely_banned(&self, name: &str) -> bool {
        self.absolute_bans.contains(name)
    }

    /// Whether `name` is an always-legal object.
    ///
    /// Exact match only. Suffixes and prefixes are never considered, so
    /// `ShowcaseRobotBroken` is not covered by `ShowcaseRobot`.
    #[must_use]
    pub fn is_legal_override(&self, name: &str) -> bool {
        self.legal_overrides.contains(name)
    }

    /// Matchers that are illegal outside maps of `category`.
    ///
    /// Declared categories with no matchers yield an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownCategory`] if `category` is not declared.
    pub fn conditional_matchers_for(
        &self,
        category: &str,
    ) -> Result<&BTreeSet<String>, RuleError> {
        self.category(category).map(|rules| &rules.matchers)
    }

    /// Free-text note attached to `category`, if the data carries one.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownCategory`] if `category` is not declared.
    pub fn category_note(&self, category: &str) -> Result<Option<&str>, RuleError> {
        self.category(category).map(|rules| rules.note.as_deref())
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.conditional.contains_key(category)
    }

    /// All declared category keys, sorted.
    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.conditional.keys().map(String::as_str)
    }

    pub fn absolute_bans(&self) -> impl Iterator<Item = &str> + '_ {
        self.absolute_bans.iter().map(String::as_str)
    }

    pub fn legal_overrides(&self) -> impl Iterator<Item = &str> + '_ {
        self.legal_overrides.iter().map(String::as_str)
    }

    /// Entries listed verbatim as both an override and an absolute ban.
    pub fn overridden_bans(&self) -> impl Iterator<Item = &str> + '_ {
        self.legal_overrides
            .intersection(&self.absolute_bans)
            .map(String::as_str)
    }

    fn category(&self, category: &str) -> Result<&CategoryRules, RuleError> {
        self.conditional
            .get(category)
            .ok_or_else(|| RuleError::unknown_category(category))
    }
}
