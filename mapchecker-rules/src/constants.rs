//! Well-known keys and labels shared by the rule table.
//!
//! Category keys mirror the `category` values in `data/rules.json`.

// Category keys ------------------------------------------------------------
pub const SHIPYARD: &str = "Shipyard";
pub const SCRAP: &str = "Scrap";
pub const EXPEDITION: &str = "Expedition";
pub const CUSTOM: &str = "Custom";
pub const SECURITY: &str = "Security";
pub const SYNDICATE: &str = "Syndicate";
pub const BLACK_MARKET: &str = "BlackMarket";
pub const SR: &str = "Sr";
pub const MEDICAL: &str = "Medical";
pub const USSP: &str = "Ussp";
pub const POINT_OF_INTEREST: &str = "PointOfInterest";

/// Every category declared by the bundled rules, in declaration order.
pub const BUILTIN_CATEGORIES: [&str; 11] = [
    SHIPYARD,
    SCRAP,
    EXPEDITION,
    CUSTOM,
    SECURITY,
    SYNDICATE,
    BLACK_MARKET,
    SR,
    MEDICAL,
    USSP,
    POINT_OF_INTEREST,
];

// Document list labels -----------------------------------------------------
pub(crate) const LIST_ILLEGAL: &str = "illegal_matches";
pub(crate) const LIST_OVERRIDES: &str = "legal_overrides";
pub(crate) const LIST_CONDITIONAL_PREFIX: &str = "conditionally_illegal_matches.";

// Logging ------------------------------------------------------------------
pub(crate) const LOG_TARGET: &str = "mapchecker_rules";
