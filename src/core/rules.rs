use regex::Regex;

/// Standalone identifier kinds. Each kind carries its own full-string
/// pattern and masking transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandaloneKind {
    Phone,
    Aadhar,
    Passport,
    Upi,
}

/// Field-name vocabulary for standalone identifiers. Detection and masking
/// both iterate this table, so it is the single source of truth for which
/// fields are examined.
pub const STANDALONE_FIELDS: &[(&str, StandaloneKind)] = &[
    ("phone", StandaloneKind::Phone),
    ("contact", StandaloneKind::Phone),
    ("aadhar", StandaloneKind::Aadhar),
    ("passport", StandaloneKind::Passport),
    ("upi_id", StandaloneKind::Upi),
];

/// Compiled detection patterns, built once per pipeline.
///
/// All patterns are anchored: a value matches only as a whole string.
/// The UPI pattern accepts any `local@letters` handle and so overlaps the
/// email pattern on dot-free domains; the overlap is inherited behavior,
/// pinned by tests rather than resolved here.
#[derive(Debug)]
pub struct RuleSet {
    phone: Regex,
    aadhar: Regex,
    passport: Regex,
    email: Regex,
    upi: Regex,
    ipv4: Regex,
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            phone: Regex::new(r"^\d{10}$").unwrap(),
            aadhar: Regex::new(r"^\d{12}$").unwrap(),
            passport: Regex::new(r"^[A-Z][0-9]{7}$").unwrap(),
            email: Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").unwrap(),
            upi: Regex::new(r"^[A-Za-z0-9.\-_]+@[A-Za-z]{2,}$").unwrap(),
            ipv4: Regex::new(r"^((25[0-5]|2[0-4]\d|1?\d?\d)\.){3}(25[0-5]|2[0-4]\d|1?\d?\d)$")
                .unwrap(),
        }
    }

    pub fn matches_kind(&self, kind: StandaloneKind, value: &str) -> bool {
        match kind {
            StandaloneKind::Phone => self.phone.is_match(value),
            StandaloneKind::Aadhar => self.aadhar.is_match(value),
            StandaloneKind::Passport => self.passport.is_match(value),
            StandaloneKind::Upi => self.upi.is_match(value),
        }
    }

    pub fn is_email(&self, value: &str) -> bool {
        self.email.is_match(value)
    }

    pub fn is_ipv4(&self, value: &str) -> bool {
        self.ipv4.is_match(value)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
