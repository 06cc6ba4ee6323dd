//! Serialized shape of a rule table.
use serde::Deserialize;
use std::collections::HashSet;

use crate::constants::{LIST_CONDITIONAL_PREFIX, LIST_ILLEGAL, LIST_OVERRIDES, LOG_TARGET};
use crate::error::RuleError;

/// Rule literal as authored in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RuleDocument {
    /// Matchers that are illegal in every map.
    #[serde(default)]
    pub illegal_matches: Vec<String>,
    /// Exact object names that are always legal.
    #[serde(default)]
    pub legal_overrides: Vec<String>,
    /// Matchers that are only legal inside maps of the keyed category.
    #[serde(default)]
    pub conditionally_illegal_matches: Vec<ConditionalEntry>,
}

/// One category of the conditional ban table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionalEntry {
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub matchers: Vec<String>,
}

impl RuleDocument {
    /// Parse a rule document without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or does not have the rule
    /// document shape.
    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the document for blank or repeated entries and categories.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning bans, then overrides, then
    /// the conditional table in declaration order.
    pub fn validate(&self) -> Result<(), RuleError> {
        let outcome = self.check();
        if let Err(err) = &outcome {
            log::warn!(target: LOG_TARGET, "rejected rule document: {err}");
        }
        outcome
    }

    fn check(&self) -> Result<(), RuleError> {
        check_list(LIST_ILLEGAL, &self.illegal_matches)?;
        check_list(LIST_OVERRIDES, &self.legal_overrides)?;

        let mut seen = HashSet::with_capacity(self.conditionally_illegal_matches.len());
        for entry in &self.conditionally_illegal_matches {
            if entry.category.trim().is_empty() {
                return Err(RuleError::BlankCategory);
            }
            if entry.category.trim() != entry.category {
                return Err(RuleError::PaddedCategory {
                    category: entry.category.clone(),
                });
            }
            if !seen.insert(entry.category.as_str()) {
                return Err(RuleError::DuplicateCategory {
                    category: entry.category.clone(),
                });
            }
            let label = format!("{LIST_CONDITIONAL_PREFIX}{}", entry.category);
            check_list(&label, &entry.matchers)?;
        }
        Ok(())
    }
}

fn check_list(list: &str, entries: &[String]) -> Result<(), RuleError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.trim().is_empty() {
            return Err(RuleError::BlankEntry {
                list: list.to_string(),
            });
        }
        if !seen.insert(entry.as_str()) {
            return Err(RuleError::DuplicateEntry {
                list: list.to_string(),
                entry: entry.clone(),
            });
        }
    }
    Ok(())
}
