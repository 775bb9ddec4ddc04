use crate::core::detect::{detect_combinatorial, detect_standalone};
use crate::core::mask;
use crate::core::rules::{RuleSet, StandaloneKind, STANDALONE_FIELDS};
use crate::domain::model::{CategoryFlags, Record};

/// At least this many quasi-identifier categories must co-occur before a
/// record is considered combinatorial PII.
const COMBINATORIAL_THRESHOLD: usize = 2;

/// Evaluates and redacts one record at a time. Stateless across records;
/// the compiled rule set is the only thing it holds.
pub struct RecordProcessor {
    rules: RuleSet,
}

impl RecordProcessor {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }

    /// Takes ownership of the working copy, returns it with any masking
    /// applied plus the overall PII flag. The flag is true iff at least
    /// one field was masked or eligible under the combinatorial rule.
    pub fn process(&self, mut record: Record) -> (Record, bool) {
        let mut pii = false;

        if detect_standalone(&self.rules, &record) {
            pii = true;
            self.redact_standalone(&mut record);
        }

        let flags = detect_combinatorial(&self.rules, &record);
        if flags.count() >= COMBINATORIAL_THRESHOLD {
            pii = true;
            redact_combinatorial(&mut record, flags);
        }

        (record, pii)
    }

    /// Masks every standalone field whose trimmed value full-matches its
    /// pattern. Fields that triggered detection and fields that merely
    /// match are treated alike, so one matching phone also masks a
    /// matching contact.
    fn redact_standalone(&self, record: &mut Record) {
        for (field, kind) in STANDALONE_FIELDS {
            if !record.contains(field) {
                continue;
            }
            let value = record.text(field);
            if !self.rules.matches_kind(*kind, &value) {
                continue;
            }
            let masked = match kind {
                StandaloneKind::Phone => mask::mask_phone(&value),
                StandaloneKind::Aadhar => mask::mask_aadhar(&value),
                StandaloneKind::Passport => mask::mask_passport(&value),
                StandaloneKind::Upi => mask::mask_handle(&value),
            };
            record.set(field, masked);
        }
    }
}

impl Default for RecordProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Masks every category that is individually true once the threshold is
/// met, not just the ones needed to reach it.
fn redact_combinatorial(record: &mut Record, flags: CategoryFlags) {
    if flags.name {
        for field in ["name", "first_name", "last_name"] {
            if record.truthy(field) {
                let masked = mask::mask_name(&record.raw_text(field));
                record.set(field, masked);
            }
        }
    }
    if flags.email && record.truthy("email") {
        let masked = mask::mask_handle(&record.text("email"));
        record.set("email", masked);
    }
    if flags.address {
        for field in ["address", "city", "pin_code"] {
            if record.truthy(field) {
                record.set(field, mask::REDACTED.to_string());
            }
        }
    }
    if flags.device {
        for field in ["device_id", "ip_address"] {
            if record.truthy(field) {
                record.set(field, mask::REDACTED.to_string());
            }
        }
    }
}
