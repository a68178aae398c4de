use crate::types::assessment::{RiskAssessment, RiskCategory};
use serde::Serialize;

pub const TUTORING_NOTE: &str = "Tutoring/support added; schedule now feels more manageable!";

/// What the advisor sees for an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub label: &'static str,
    pub color: &'static str,
    pub message: String,
}

pub fn label(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Low => "Low Risk",
        RiskCategory::Moderate => "Moderate Risk",
        RiskCategory::High => "High Risk",
    }
}

pub fn color(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Low => "#28a745",
        RiskCategory::Moderate => "#ffc107",
        RiskCategory::High => "#a6192e",
    }
}

pub fn message(category: RiskCategory, tutored: bool, most_challenging: Option<&str>) -> String {
    let example = most_challenging
        .map(|course| format!(" (e.g., {course})"))
        .unwrap_or_default();
    match (category, tutored) {
        (RiskCategory::Low, false) => {
            "Great fit! This schedule aligns well with the student's preparation.".to_string()
        }
        (RiskCategory::Low, true) => {
            "Great fit! With tutoring, this schedule aligns well.".to_string()
        }
        (RiskCategory::Moderate, false) => format!(
            "Manageable with support. Consider reviewing courses{example} or adding tutoring."
        ),
        (RiskCategory::Moderate, true) => {
            format!("Manageable with tutoring. Consider reviewing courses{example}.")
        }
        (RiskCategory::High, false) => format!(
            "Ambitious schedule! Consider tutoring or adjusting courses{example} to ensure success."
        ),
        (RiskCategory::High, true) => {
            format!("Still ambitious with tutoring. Consider adjusting courses{example}.")
        }
    }
}

pub fn advise(assessment: &RiskAssessment) -> Advice {
    Advice {
        label: label(assessment.category),
        color: color(assessment.category),
        message: message(
            assessment.category,
            assessment.has_tutoring(),
            assessment.most_challenging.as_deref(),
        ),
    }
}
