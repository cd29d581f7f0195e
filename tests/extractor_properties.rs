use agrifresh::domain::decision::{extract_decision, DecisionRecord};
use agrifresh::domain::foundation::Priority;
use proptest::prelude::*;

fn assert_schema(record: &DecisionRecord) -> Result<(), TestCaseError> {
    prop_assert!(Priority::ALL.contains(&record.priority));
    prop_assert!(!record.recommended_action.trim().is_empty());
    if let Some(confidence) = record.confidence {
        prop_assert!((0.0..=1.0).contains(&confidence.value()));
    }
    Ok(())
}

// ── Arbitrary input never panics and always yields a well-formed record ──

proptest! {
    #[test]
    fn arbitrary_text_yields_well_formed_record(raw in any::<String>()) {
        let record = extract_decision(&raw);
        assert_schema(&record)?;
    }

    #[test]
    fn brace_heavy_text_yields_well_formed_record(raw in r#"[{}":,\\a-z0-9 .\-]{0,64}"#) {
        let record = extract_decision(&raw);
        assert_schema(&record)?;
    }
}

// ── Any numeric confidence is clamped into [0, 1] ──

proptest! {
    #[test]
    fn numeric_confidence_is_clamped(
        confidence in (-100_000i32..100_000).prop_map(|n| f64::from(n) / 100.0),
        priority in prop::sample::select(vec!["P1", "p2", "P3"]),
        prefix in "[a-zA-Z ]{0,20}",
    ) {
        let raw = format!(
            r#"{prefix} {{"priority":"{priority}","recommended_action":"Act","confidence":{confidence}}}"#
        );
        let record = extract_decision(&raw);

        prop_assert!(
            matches!(record.priority, Priority::P1 | Priority::P2 | Priority::P3),
            "unexpected fallback for {}",
            raw
        );
        let value = record.confidence.map(|c| c.value()).unwrap_or(f64::NAN);
        prop_assert!((value - confidence.clamp(0.0, 1.0)).abs() < 1e-9);
    }
}

// ── Extraction is idempotent ──

proptest! {
    #[test]
    fn extraction_is_idempotent(raw in any::<String>()) {
        prop_assert_eq!(extract_decision(&raw), extract_decision(&raw));
    }

    #[test]
    fn extraction_of_serialized_record_is_fixed_point(
        priority in prop::sample::select(vec![Priority::P1, Priority::P2, Priority::P3]),
        action in "[A-Za-z][A-Za-z ]{0,30}",
        confidence in (0u32..=100).prop_map(|n| f64::from(n) / 100.0),
    ) {
        let raw = format!(
            r#"{{"priority":"{priority}","recommended_action":"{action}","confidence":{confidence}}}"#
        );
        let first = extract_decision(&raw);
        let reserialized = serde_json::to_string(&first).unwrap();
        prop_assert_eq!(extract_decision(&reserialized), first);
    }
}
