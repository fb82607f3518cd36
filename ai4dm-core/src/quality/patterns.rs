//! Pre-compiled value format patterns.

use std::sync::OnceLock;

use regex::Regex;

/// Pre-compiled regex patterns shared by the consistency and validity
/// analyzers.
///
/// Uses `OnceLock` for thread-safe lazy initialization.
pub struct FormatPatterns {
    /// `local@domain.tld`; the TLD class also admits a literal `|`
    pub email: Regex,
    /// Leading `YYYY-MM-DD`
    pub iso_date_prefix: Regex,
    /// Leading `M/D/YY` through `MM/DD/YYYY`
    pub slash_date_prefix: Regex,
    /// Optional `+` followed by 10-15 digits
    pub phone: Regex,
    /// Separators removed before phone validation
    pub phone_separators: Regex,
}

impl FormatPatterns {
    /// Gets the singleton instance of pre-compiled format patterns.
    pub fn instance() -> &'static Self {
        static PATTERNS: OnceLock<FormatPatterns> = OnceLock::new();
        PATTERNS.get_or_init(Self::compile)
    }

    /// Compiles all format patterns.
    ///
    /// This is called once during initialization.
    #[allow(clippy::expect_used)]
    fn compile() -> Self {
        Self {
            email: Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$")
                .expect("Invalid email pattern"),
            iso_date_prefix: Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("Invalid ISO date pattern"),
            slash_date_prefix: Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}")
                .expect("Invalid slash date pattern"),
            phone: Regex::new(r"^\+?\d{10,15}$").expect("Invalid phone pattern"),
            phone_separators: Regex::new(r"[\s\-()]").expect("Invalid phone separator pattern"),
        }
    }

    /// Returns true if `value` looks like an email address.
    pub fn is_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    /// Returns true if `value` starts with an ISO date.
    pub fn is_iso_date(&self, value: &str) -> bool {
        self.iso_date_prefix.is_match(value)
    }

    /// Returns true if `value` starts with an ISO or slash-separated date.
    pub fn is_date(&self, value: &str) -> bool {
        self.is_iso_date(value) || self.slash_date_prefix.is_match(value)
    }

    /// Returns true if `value` is a phone number once spaces, hyphens and
    /// parentheses are removed.
    pub fn is_phone(&self, value: &str) -> bool {
        let cleaned = self.phone_separators.replace_all(value, "");
        self.phone.is_match(&cleaned)
    }
}
