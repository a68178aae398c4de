use crate::types::student::StudentProfile;
use serde::Serialize;

pub const GPA_WEIGHT: f64 = 40.0;
pub const RANK_WEIGHT: f64 = 30.0;
pub const ACT_WEIGHT: f64 = 20.0;
pub const DUAL_CREDIT_BONUS: f64 = 5.0;
pub const FIRST_GEN_PENALTY: f64 = -5.0;
pub const MIN_STRENGTH: f64 = 0.0;
pub const MAX_STRENGTH: f64 = 100.0;

const GPA_SCALE: f64 = 4.0;
const ACT_SCALE: f64 = 36.0;

/// Individual terms of the strength score. `total` is the clamped sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthBreakdown {
    pub gpa: f64,
    pub rank: f64,
    pub act: f64,
    pub dual_credit: f64,
    pub first_generation: f64,
    pub total: f64,
}

pub fn strength_breakdown(profile: &StudentProfile) -> StrengthBreakdown {
    let gpa = profile
        .gpa()
        .map(|gpa| gpa / GPA_SCALE * GPA_WEIGHT)
        .unwrap_or(0.0);
    let rank = profile
        .rank()
        .map(|rank| rank.percentile() * RANK_WEIGHT)
        .unwrap_or(0.0);
    let act = profile
        .act()
        .map(|act| act / ACT_SCALE * ACT_WEIGHT)
        .unwrap_or(0.0);
    let dual_credit = if profile.is_dual_enrolled() {
        DUAL_CREDIT_BONUS
    } else {
        0.0
    };
    let first_generation = if profile.first_generation {
        FIRST_GEN_PENALTY
    } else {
        0.0
    };

    let total =
        (gpa + rank + act + dual_credit + first_generation).clamp(MIN_STRENGTH, MAX_STRENGTH);
    tracing::debug!(
        student = %profile.id,
        gpa,
        rank,
        act,
        dual_credit,
        first_generation,
        total,
        "computed student strength"
    );

    StrengthBreakdown {
        gpa,
        rank,
        act,
        dual_credit,
        first_generation,
        total,
    }
}

/// Preparedness score in `[0, 100]`.
pub fn compute_strength(profile: &StudentProfile) -> f64 {
    strength_breakdown(profile).total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(gpa: f64, rank: &str, act: f64) -> StudentProfile {
        StudentProfile {
            id: "1001".to_string(),
            high_school_gpa: Some(gpa),
            class_rank: Some(rank.to_string()),
            act_composite: Some(act),
            first_generation: false,
            college_gpa: None,
        }
    }

    #[test]
    fn strength_matches_reference_student() {
        let breakdown = strength_breakdown(&profile(3.6, "10/200", 28.0));
        assert!((breakdown.gpa - 36.0).abs() < 1e-9);
        assert!((breakdown.rank - 28.5).abs() < 1e-9);
        assert!((breakdown.act - 15.5556).abs() < 1e-4);
        assert!((breakdown.total - 80.0556).abs() < 1e-4);
    }

    #[test]
    fn dual_credit_and_first_gen_adjust_total() {
        let mut student = profile(3.0, "50/100", 18.0);
        let base = compute_strength(&student);

        student.college_gpa = Some(3.2);
        assert!((compute_strength(&student) - (base + 5.0)).abs() < 1e-9);

        student.first_generation = true;
        assert!((compute_strength(&student) - base).abs() < 1e-9);
    }

    #[test]
    fn strength_clamps_to_bounds() {
        let mut top = profile(5.0, "1/1000", 40.0);
        top.college_gpa = Some(4.0);
        assert_eq!(compute_strength(&top), MAX_STRENGTH);

        let mut bottom = profile(0.0, "900/100", 0.0);
        bottom.first_generation = true;
        assert_eq!(compute_strength(&bottom), MIN_STRENGTH);

        for gpa in [0.0, 1.0, 2.5, 4.0, 4.5] {
            for act in [0.0, 12.0, 36.0, 40.0] {
                for rank in ["1/10", "10/10", "abc", "20/10"] {
                    let strength = compute_strength(&profile(gpa, rank, act));
                    assert!((MIN_STRENGTH..=MAX_STRENGTH).contains(&strength));
                }
            }
        }
    }

    #[test]
    fn malformed_rank_contributes_nothing() {
        let mut no_rank = profile(3.2, "", 24.0);
        no_rank.class_rank = None;
        let expected = compute_strength(&no_rank);

        for raw in ["abc", "5/0", "5", "1/2/3"] {
            let strength = compute_strength(&profile(3.2, raw, 24.0));
            assert!((strength - expected).abs() < 1e-12, "rank {raw:?}");
        }
    }

    #[test]
    fn missing_scores_contribute_nothing() {
        let student = StudentProfile {
            id: "1002".to_string(),
            high_school_gpa: None,
            class_rank: Some("1/2".to_string()),
            act_composite: None,
            first_generation: false,
            college_gpa: None,
        };
        assert!((compute_strength(&student) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_scores_keep_strength_in_range() {
        let reference = compute_strength(&StudentProfile {
            high_school_gpa: None,
            act_composite: None,
            ..profile(0.0, "10/200", 0.0)
        });

        for (gpa, act) in [
            (f64::NAN, f64::NAN),
            (f64::INFINITY, f64::INFINITY),
            (f64::NEG_INFINITY, f64::INFINITY),
        ] {
            let mut student = profile(gpa, "10/200", act);
            student.college_gpa = Some(f64::NAN);
            let strength = compute_strength(&student);
            assert!((MIN_STRENGTH..=MAX_STRENGTH).contains(&strength));
            assert!((strength - reference).abs() < 1e-12, "gpa {gpa} act {act}");
        }
    }

    #[test]
    fn strength_is_monotonic_in_each_input() {
        let mut previous = compute_strength(&profile(0.0, "50/100", 20.0));
        for step in 1..=8 {
            let current = compute_strength(&profile(f64::from(step) * 0.5, "50/100", 20.0));
            assert!(current >= previous);
            previous = current;
        }

        let mut previous = compute_strength(&profile(3.0, "100/100", 20.0));
        for position in (1..100).rev() {
            let current = compute_strength(&profile(3.0, &format!("{position}/100"), 20.0));
            assert!(current >= previous);
            previous = current;
        }

        let mut previous = compute_strength(&profile(3.0, "50/100", 0.0));
        for act in 1..=36 {
            let current = compute_strength(&profile(3.0, "50/100", f64::from(act)));
            assert!(current >= previous);
            previous = current;
        }
    }
}
