//! Standalone and combinatorial PII detectors.
//!
//! Both are pure functions over a record and the compiled rule set; they
//! never mutate the record and never decide masking on their own.

use crate::core::rules::{RuleSet, STANDALONE_FIELDS};
use crate::domain::model::{CategoryFlags, Record};

/// True iff any standalone identifier field full-matches its pattern.
/// Missing fields coerce to the empty string and never match.
pub fn detect_standalone(rules: &RuleSet, record: &Record) -> bool {
    STANDALONE_FIELDS
        .iter()
        .any(|(field, kind)| rules.matches_kind(*kind, &record.text(field)))
}

/// Computes the four quasi-identifier category flags independently.
pub fn detect_combinatorial(rules: &RuleSet, record: &Record) -> CategoryFlags {
    CategoryFlags {
        name: looks_like_full_name(record),
        email: rules.is_email(&record.text("email")),
        address: has_physical_address(record),
        device: record.truthy("device_id") || rules.is_ipv4(&record.text("ip_address")),
    }
}

/// A `name` with two or more whitespace-separated tokens, or both
/// `first_name` and `last_name` present.
fn looks_like_full_name(record: &Record) -> bool {
    if record.text("name").split_whitespace().count() >= 2 {
        return true;
    }
    record.truthy("first_name") && record.truthy("last_name")
}

/// Address counts only as the conjunction of street, city and postal code.
fn has_physical_address(record: &Record) -> bool {
    record.truthy("address") && record.truthy("city") && record.truthy("pin_code")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(fields) => Record::new(fields),
            _ => panic!("test records must be JSON objects"),
        }
    }

    #[test]
    fn test_standalone_phone_and_contact() {
        let rules = RuleSet::new();
        assert!(detect_standalone(&rules, &record(json!({"phone": "9876543210"}))));
        assert!(detect_standalone(&rules, &record(json!({"contact": "9876543210"}))));
        // Surrounding whitespace is trimmed before matching
        assert!(detect_standalone(&rules, &record(json!({"phone": " 9876543210 "}))));
        assert!(!detect_standalone(&rules, &record(json!({"phone": "98765"}))));
        assert!(!detect_standalone(&rules, &record(json!({}))));
    }

    #[test]
    fn test_standalone_numeric_json_values_coerce() {
        let rules = RuleSet::new();
        // A phone arriving as a JSON number still matches
        assert!(detect_standalone(&rules, &record(json!({"phone": 9876543210u64}))));
    }

    #[test]
    fn test_combinatorial_name_variants() {
        let rules = RuleSet::new();
        let flags = detect_combinatorial(&rules, &record(json!({"name": "Jane Doe"})));
        assert!(flags.name);
        let flags = detect_combinatorial(
            &rules,
            &record(json!({"first_name": "Jane", "last_name": "Doe"})),
        );
        assert!(flags.name);
        let flags = detect_combinatorial(&rules, &record(json!({"name": "Jane"})));
        assert!(!flags.name);
        let flags = detect_combinatorial(&rules, &record(json!({"first_name": "Jane"})));
        assert!(!flags.name);
    }

    #[test]
    fn test_combinatorial_address_is_a_conjunction() {
        let rules = RuleSet::new();
        let flags = detect_combinatorial(
            &rules,
            &record(json!({"address": "12 High St", "city": "Pune", "pin_code": "411001"})),
        );
        assert!(flags.address);
        let flags = detect_combinatorial(
            &rules,
            &record(json!({"address": "12 High St", "city": "Pune"})),
        );
        assert!(!flags.address);
    }

    #[test]
    fn test_combinatorial_device() {
        let rules = RuleSet::new();
        let flags = detect_combinatorial(&rules, &record(json!({"device_id": "dev-42"})));
        assert!(flags.device);
        let flags = detect_combinatorial(&rules, &record(json!({"ip_address": "10.0.0.1"})));
        assert!(flags.device);
        let flags = detect_combinatorial(&rules, &record(json!({"ip_address": "999.0.0.1"})));
        assert!(!flags.device);
        let flags = detect_combinatorial(&rules, &record(json!({"device_id": ""})));
        assert!(!flags.device);
    }

    #[test]
    fn test_flag_count() {
        let rules = RuleSet::new();
        let flags = detect_combinatorial(
            &rules,
            &record(json!({"name": "Jane Doe", "email": "jane@mail.com"})),
        );
        assert_eq!(flags.count(), 2);
    }
}
