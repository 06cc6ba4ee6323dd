//! Map Checker Rules
//!
//! Static rule data consumed by the map checker: objects that are banned in
//! every map, objects that are always legal, and objects that are only legal
//! in maps of a given category (a shipyard faction, points of interest).
//! This crate holds and exposes the rules; matching map contents against them
//! is the checker's job.
//!
//! ```
//! use mapchecker_rules::{RuleTable, constants::POINT_OF_INTEREST};
//!
//! let rules = RuleTable::builtin();
//! assert!(rules.is_legal_override("ShowcaseRobot"));
//! assert!(rules.is_absolutely_banned("DEBUG"));
//! let poi = rules.conditional_matchers_for(POINT_OF_INTEREST)?;
//! assert!(poi.contains("ClosetMaintenanceFilledRandom"));
//! assert!(rules.conditional_matchers_for("Nonexistent").is_err());
//! # Ok::<(), mapchecker_rules::RuleError>(())
//! ```

pub mod constants;
pub mod document;
pub mod error;
pub mod table;

// Re-export commonly used types
pub use document::{ConditionalEntry, RuleDocument};
pub use error::RuleError;
pub use table::RuleTable;

/// Shorthand for [`RuleTable::builtin`].
#[must_use]
pub fn rules() -> &'static RuleTable {
    RuleTable::builtin()
}
