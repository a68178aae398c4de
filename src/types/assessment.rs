use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Moderate => "moderate",
            RiskCategory::High => "high",
        }
    }
}

/// A scheduled course after tutoring adjustment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRisk {
    pub name: String,
    pub dfw_rate: f64,
    pub effective_rate: f64,
    pub tutored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub challenge_score: f64,
    pub category: RiskCategory,
    pub most_challenging: Option<String>,
    pub average_effective_rate: f64,
    pub courses: Vec<CourseRisk>,
    pub tutored: Vec<String>,
}

impl RiskAssessment {
    pub fn empty() -> Self {
        Self {
            challenge_score: 0.0,
            category: RiskCategory::Low,
            most_challenging: None,
            average_effective_rate: 0.0,
            courses: Vec::new(),
            tutored: Vec::new(),
        }
    }

    pub fn has_tutoring(&self) -> bool {
        !self.tutored.is_empty()
    }
}
