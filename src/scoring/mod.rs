pub mod advice;
pub mod risk;
pub mod strength;

use crate::types::assessment::RiskAssessment;
use crate::types::course::Catalog;
use crate::types::schedule::{ScheduleSelection, TutoringSet};
use crate::types::student::StudentProfile;
use advice::Advice;
use risk::RiskEvaluator;
use serde::Serialize;
use strength::StrengthBreakdown;

/// Everything the report layer renders for one student and schedule.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub student_id: String,
    pub strength: StrengthBreakdown,
    pub assessment: RiskAssessment,
    pub advice: Advice,
}

pub fn assess(
    student: &StudentProfile,
    catalog: &Catalog,
    schedule: &ScheduleSelection,
    tutored: &TutoringSet,
) -> AssessmentReport {
    let strength = strength::strength_breakdown(student);
    let assessment = RiskEvaluator::new(catalog).evaluate(strength.total, schedule, tutored);
    let advice = advice::advise(&assessment);
    AssessmentReport {
        student_id: student.id.clone(),
        strength,
        assessment,
        advice,
    }
}
