//! Analysis Result — the structured document produced per request.
//!
//! Every field is required. A document missing any of them fails to decode,
//! which the service treats as an upstream failure and the client as a decode error.

use serde::{Deserialize, Serialize};

/// One problem found in the submitted resume and the fix applied for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub issue: String,
    pub why_it_is_a_problem: String,
    pub ats_real_world_impact: String,
    pub correction_applied: String,
}

/// Five weighted sub-scores, each on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub ats_structure: f64,
    pub keyword_match: f64,
    pub experience_impact: f64,
    pub formatting_readability: f64,
    pub seniority_alignment: f64,
}

/// Scoring snapshot of a resume, before or after optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub scores: SubScores,
    pub final_ats_score: f64,
    pub ats_confidence_level: f64,
    pub ats_rejection_risk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub summary: String,
    pub experience: String,
    pub skills: String,
    pub education: String,
}

/// The rewritten resume, as free text and split into sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedResume {
    pub plain_text: String,
    pub sections: ResumeSections,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityVerdict {
    pub score_change_rationale: String,
    pub trust_level: String,
    pub enterprise_readiness: String,
}

/// Full structured output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub audit_findings: Vec<AuditFinding>,
    pub corrected_before_optimization: ScoreCard,
    pub corrected_optimized_resume: OptimizedResume,
    pub corrected_after_optimization: ScoreCard,
    pub credibility_verdict: CredibilityVerdict,
}
