//! Header-name heuristics.
//!
//! Several analyzers decide what a column means from its header alone.
//! Each meaning is a [`ColumnRole`] with a fixed keyword list matched
//! case-insensitively as a substring. Identifier detection is routed
//! through [`HeaderMatcher::is_identifier`] so its strategy can change
//! without touching the scoring code.

use super::config::IdentifierMatching;

/// Inferred meaning of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    /// Email addresses (validity)
    Email,
    /// Calendar dates (validity)
    Date,
    /// Phone numbers (validity)
    Phone,
    /// Quantities that must not be negative (validity)
    NonNegative,
    /// Person ages (accuracy business rules)
    Age,
    /// Monetary amounts (accuracy business rules)
    Financial,
    /// Counts and totals (accuracy business rules)
    Count,
    /// Values expected to be unique (uniqueness)
    Identifier,
}

impl ColumnRole {
    /// Every role, in documentation order.
    pub const ALL: [Self; 8] = [
        Self::Email,
        Self::Date,
        Self::Phone,
        Self::NonNegative,
        Self::Age,
        Self::Financial,
        Self::Count,
        Self::Identifier,
    ];

    /// Lowercase header keywords that assign this role.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Email => &["email"],
            Self::Date => &["date"],
            Self::Phone => &["phone"],
            Self::NonNegative => &["age", "quantity", "amount"],
            Self::Age => &["age"],
            Self::Financial => &["salary", "price", "amount", "cost"],
            Self::Count => &["count", "quantity", "number", "total"],
            Self::Identifier => &["id", "key", "email"],
        }
    }

    /// Short description used in listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Email => "email format (validity)",
            Self::Date => "YYYY-MM-DD or M/D/YYYY date (validity)",
            Self::Phone => "10-15 digit phone number (validity)",
            Self::NonNegative => "non-negative number (validity)",
            Self::Age => "age between 16 and 100 (accuracy)",
            Self::Financial => "non-negative amount, at most 3x median (accuracy)",
            Self::Count => "non-negative count (accuracy)",
            Self::Identifier => "values expected to be unique (uniqueness)",
        }
    }

    /// Case-insensitive substring match against the keyword list.
    pub fn matches(&self, header: &str) -> bool {
        let lower = header.to_lowercase();
        self.keywords().iter().any(|keyword| lower.contains(keyword))
    }
}

/// Applies [`ColumnRole`] heuristics with a configurable identifier strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderMatcher {
    identifier_matching: IdentifierMatching,
}

impl HeaderMatcher {
    /// Creates a matcher using the given identifier strategy.
    pub fn new(identifier_matching: IdentifierMatching) -> Self {
        Self {
            identifier_matching,
        }
    }

    /// Returns true if `header` carries `role`.
    pub fn has_role(&self, header: &str, role: ColumnRole) -> bool {
        match role {
            ColumnRole::Identifier => self.is_identifier(header),
            _ => role.matches(header),
        }
    }

    /// Returns true if values under `header` are expected to be unique.
    pub fn is_identifier(&self, header: &str) -> bool {
        match self.identifier_matching {
            IdentifierMatching::Substring => ColumnRole::Identifier.matches(header),
            IdentifierMatching::Token => header_tokens(header).iter().any(|token| {
                ColumnRole::Identifier
                    .keywords()
                    .contains(&token.as_str())
            }),
        }
    }
}

/// Splits a header into lowercase word tokens.
///
/// Breaks on any non-alphanumeric character and on camelCase boundaries,
/// keeping acronyms together (`APIKey` becomes `api`, `key`).
fn header_tokens(header: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in header.split(|c: char| !c.is_alphanumeric()) {
        let chars: Vec<char> = word.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let previous = i.checked_sub(1).and_then(|p| chars.get(p));
            let next = chars.get(i.saturating_add(1));
            let boundary = c.is_uppercase()
                && previous.is_some_and(|prev| {
                    prev.is_lowercase()
                        || (prev.is_uppercase() && next.is_some_and(|n| n.is_lowercase()))
                });
            if boundary && !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
        }
        if !current.is_empty() {
            tokens.push(current);
        }
    }
    tokens
}
