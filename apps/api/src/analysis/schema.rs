//! Declared output schema for the analysis call, in Gemini's OpenAPI-subset dialect.

use serde_json::{json, Map, Value};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn number() -> Value {
    json!({ "type": "NUMBER" })
}

/// Object schema whose every property is required.
fn object(properties: Vec<(&str, Value)>) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
        "propertyOrdering": required,
    })
}

fn score_card() -> Value {
    object(vec![
        (
            "scores",
            object(vec![
                ("ats_structure", number()),
                ("keyword_match", number()),
                ("experience_impact", number()),
                ("formatting_readability", number()),
                ("seniority_alignment", number()),
            ]),
        ),
        ("final_ats_score", number()),
        ("ats_confidence_level", number()),
        ("ats_rejection_risk", string()),
    ])
}

/// Schema mirroring `models::analysis::AnalysisResult`.
pub fn analysis_response_schema() -> Value {
    object(vec![
        (
            "audit_findings",
            json!({
                "type": "ARRAY",
                "items": object(vec![
                    ("issue", string()),
                    ("why_it_is_a_problem", string()),
                    ("ats_real_world_impact", string()),
                    ("correction_applied", string()),
                ]),
            }),
        ),
        ("corrected_before_optimization", score_card()),
        (
            "corrected_optimized_resume",
            object(vec![
                ("plain_text", string()),
                (
                    "sections",
                    object(vec![
                        ("summary", string()),
                        ("experience", string()),
                        ("skills", string()),
                        ("education", string()),
                    ]),
                ),
            ]),
        ),
        ("corrected_after_optimization", score_card()),
        (
            "credibility_verdict",
            object(vec![
                ("score_change_rationale", string()),
                ("trust_level", string()),
                ("enterprise_readiness", string()),
            ]),
        ),
    ])
}
