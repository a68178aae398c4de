use crate::scoring::advice::TUTORING_NOTE;
use crate::scoring::AssessmentReport;

pub fn to_markdown(report: &AssessmentReport) -> String {
    let strength = &report.strength;
    let assessment = &report.assessment;

    let mut output = String::new();
    output.push_str("# Schedule Assessment\n\n");
    output.push_str(&format!("Student ID: {}\n\n", report.student_id));

    output.push_str("## Student Strength\n\n");
    output.push_str(&format!(
        "- gpa: {:.2}\n- class_rank: {:.2}\n- act: {:.2}\n- dual_credit: {:.2}\n- first_generation: {:.2}\n- total: {:.2}\n\n",
        strength.gpa,
        strength.rank,
        strength.act,
        strength.dual_credit,
        strength.first_generation,
        strength.total
    ));

    output.push_str("## Selected Schedule\n\n");
    if assessment.courses.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Course Name | Effective DFW (%) | Tutoring |\n");
        output.push_str("|---|---|---|\n");
        for course in &assessment.courses {
            let name = if assessment.most_challenging.as_deref() == Some(course.name.as_str()) {
                format!("**{}**", course.name)
            } else {
                course.name.clone()
            };
            output.push_str(&format!(
                "| {} | {:.1} | {} |\n",
                name,
                course.effective_rate,
                if course.tutored { "yes" } else { "no" }
            ));
        }
        output.push('\n');
    }

    output.push_str("## Challenge Level\n\n");
    output.push_str(&format!(
        "{} (score {:.4})\n\n",
        report.advice.label, assessment.challenge_score
    ));
    output.push_str(&report.advice.message);
    output.push('\n');
    if assessment.has_tutoring() {
        output.push('\n');
        output.push_str(TUTORING_NOTE);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::assess;
    use crate::types::course::{Catalog, CourseRecord};
    use crate::types::schedule::{ScheduleSelection, TutoringSet};
    use crate::types::student::StudentProfile;

    fn student() -> StudentProfile {
        StudentProfile {
            id: "1003".to_string(),
            high_school_gpa: Some(2.0),
            class_rank: Some("180/200".to_string()),
            act_composite: Some(15.0),
            first_generation: true,
            college_gpa: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CourseRecord::new("MATH 1203", 30.0),
            CourseRecord::new("ENGL 1013", 70.0),
        ])
    }

    #[test]
    fn markdown_report_highlights_most_challenging_course() {
        let catalog = catalog();
        let schedule =
            ScheduleSelection::new(["ENGL 1013", "MATH 1203"]).expect("schedule should build");
        let report = assess(&student(), &catalog, &schedule, &TutoringSet::default());

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Schedule Assessment"));
        assert!(rendered.contains("## Student Strength"));
        assert!(rendered.contains("| **MATH 1203** | 70.0 | no |"));
        assert!(rendered.contains("| ENGL 1013 | 30.0 | no |"));
        assert!(rendered.contains("High Risk"));
        assert!(!rendered.contains(TUTORING_NOTE));
    }

    #[test]
    fn markdown_report_mentions_tutoring() {
        let catalog = catalog();
        let schedule =
            ScheduleSelection::new(["ENGL 1013", "MATH 1203"]).expect("schedule should build");
        let tutored =
            TutoringSet::for_selection(&schedule, ["MATH 1203"]).expect("tutoring should build");
        let report = assess(&student(), &catalog, &schedule, &tutored);

        let rendered = to_markdown(&report);
        assert!(rendered.contains("| **MATH 1203** | 35.0 | yes |"));
        assert!(rendered.contains(TUTORING_NOTE));
    }

    #[test]
    fn markdown_report_handles_empty_schedule() {
        let report = assess(
            &student(),
            &catalog(),
            &ScheduleSelection::default(),
            &TutoringSet::default(),
        );
        let rendered = to_markdown(&report);
        assert!(rendered.contains("## Selected Schedule\n\n- none"));
        assert!(rendered.contains("Low Risk (score 0.0000)"));
    }
}
