//! Instruction prompt sent to the text generator.

use super::DecisionRequest;

/// System message pinning the reply format.
pub const SYSTEM_PROMPT: &str = "Return raw JSON only.";

/// Renders the user prompt for a decision request.
///
/// The text is a pure function of the request so identical requests
/// always produce identical prompts.
pub fn decision_prompt(request: &DecisionRequest) -> String {
    format!(
        r#"You are an Agricultural Warehouse Optimization AI.

ML Predictions:
- Produce: {produce}
- Spoilage Risk: {risk}
- Remaining Days: {days}

Decision Rules:
- High risk OR remaining_days <= 2 → Priority P1
- Medium risk OR remaining_days <= 5 → Priority P2
- Otherwise → Priority P3

Return ONLY valid JSON in this format:

{{
  "priority": "P1 | P2 | P3",
  "recommended_action": "short action sentence",
  "confidence": number between 0 and 1
}}

Do NOT include explanation.
Do NOT use markdown.
Return only raw JSON.
"#,
        produce = request.produce(),
        risk = request.risk(),
        days = request.remaining_days(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RiskLevel;

    #[test]
    fn prompt_embeds_request_fields() {
        let request = DecisionRequest::new("Tomato", RiskLevel::High, 1.5).unwrap();
        let prompt = decision_prompt(&request);

        assert!(prompt.contains("- Produce: Tomato"));
        assert!(prompt.contains("- Spoilage Risk: High"));
        assert!(prompt.contains("- Remaining Days: 1.5"));
    }

    #[test]
    fn prompt_states_business_rule() {
        let request = DecisionRequest::new("Tomato", RiskLevel::Low, 9.0).unwrap();
        let prompt = decision_prompt(&request);

        assert!(prompt.contains("High risk OR remaining_days <= 2 → Priority P1"));
        assert!(prompt.contains("Medium risk OR remaining_days <= 5 → Priority P2"));
        assert!(prompt.contains("Otherwise → Priority P3"));
        assert!(prompt.contains("\"recommended_action\""));
    }

    #[test]
    fn prompt_passes_opaque_risk_through() {
        let request = DecisionRequest::new("Okra", RiskLevel::from("Severe"), 3.0).unwrap();
        assert!(decision_prompt(&request).contains("- Spoilage Risk: Severe"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let request = DecisionRequest::new("Okra", RiskLevel::Medium, 3.0).unwrap();
        assert_eq!(decision_prompt(&request), decision_prompt(&request));
    }
}
