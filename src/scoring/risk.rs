use crate::types::assessment::{CourseRisk, RiskAssessment, RiskCategory};
use crate::types::course::Catalog;
use crate::types::schedule::{ScheduleSelection, TutoringSet};

/// Multiplier applied to a tutored course's DFW rate.
pub const TUTORING_REDUCTION: f64 = 0.5;
/// Challenge scores below this are low risk.
pub const RISK_LOW_THRESHOLD: f64 = 0.15;
/// Challenge scores below this (and at or above the low threshold) are moderate risk.
pub const RISK_MODERATE_THRESHOLD: f64 = 0.35;

pub fn categorize(challenge_score: f64) -> RiskCategory {
    if challenge_score < RISK_LOW_THRESHOLD {
        RiskCategory::Low
    } else if challenge_score < RISK_MODERATE_THRESHOLD {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}

pub fn challenge_score(average_rate: f64, strength: f64) -> f64 {
    (average_rate / 100.0) * (1.0 - strength / 100.0)
}

pub struct RiskEvaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> RiskEvaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn evaluate(
        &self,
        strength: f64,
        schedule: &ScheduleSelection,
        tutored: &TutoringSet,
    ) -> RiskAssessment {
        let courses = self.resolve(schedule, tutored);
        if courses.is_empty() {
            tracing::debug!("empty schedule, nothing to assess");
            return RiskAssessment::empty();
        }

        let average_effective_rate =
            courses.iter().map(|course| course.effective_rate).sum::<f64>() / courses.len() as f64;
        let challenge_score = challenge_score(average_effective_rate, strength);
        let category = categorize(challenge_score);

        let most_challenging = if challenge_score >= RISK_LOW_THRESHOLD {
            hardest_course(&courses).map(|course| course.name.clone())
        } else {
            None
        };

        tracing::debug!(
            strength,
            average_effective_rate,
            challenge_score,
            category = category.as_str(),
            most_challenging = most_challenging.as_deref().unwrap_or("-"),
            "evaluated schedule"
        );

        RiskAssessment {
            challenge_score,
            category,
            most_challenging,
            average_effective_rate,
            tutored: courses
                .iter()
                .filter(|course| course.tutored)
                .map(|course| course.name.clone())
                .collect(),
            courses,
        }
    }

    fn resolve(&self, schedule: &ScheduleSelection, tutored: &TutoringSet) -> Vec<CourseRisk> {
        schedule
            .iter()
            .filter_map(|name| {
                let Some(record) = self.catalog.get(name) else {
                    tracing::warn!(course = name, "course not in catalog, excluded from schedule");
                    return None;
                };
                let is_tutored = tutored.contains(name);
                let dfw_rate = record.dfw_rate();
                let effective_rate = if is_tutored {
                    dfw_rate * TUTORING_REDUCTION
                } else {
                    dfw_rate
                };
                Some(CourseRisk {
                    name: record.name.clone(),
                    dfw_rate,
                    effective_rate,
                    tutored: is_tutored,
                })
            })
            .collect()
    }
}

/// Highest effective rate wins; the earliest course keeps a tie.
fn hardest_course(courses: &[CourseRisk]) -> Option<&CourseRisk> {
    courses.iter().fold(None, |best, course| match best {
        Some(current) if current.effective_rate >= course.effective_rate => Some(current),
        _ => Some(course),
    })
}
