use serde::{Deserialize, Deserializer, Serialize};

/// One row of the student directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(rename = "Student ID")]
    pub id: String,
    #[serde(
        rename = "High School GPA",
        default,
        deserialize_with = "deserialize_finite"
    )]
    pub high_school_gpa: Option<f64>,
    #[serde(rename = "High School Class Rank", default)]
    pub class_rank: Option<String>,
    #[serde(
        rename = "ACT Composite",
        default,
        deserialize_with = "deserialize_finite"
    )]
    pub act_composite: Option<f64>,
    #[serde(
        rename = "First Generation College Student",
        default,
        deserialize_with = "deserialize_flag"
    )]
    pub first_generation: bool,
    #[serde(
        rename = "College GPA",
        default,
        deserialize_with = "deserialize_finite"
    )]
    pub college_gpa: Option<f64>,
}

impl StudentProfile {
    pub fn rank(&self) -> Option<ClassRank> {
        self.class_rank.as_deref().and_then(ClassRank::parse)
    }

    pub fn gpa(&self) -> Option<f64> {
        self.high_school_gpa.filter(|gpa| gpa.is_finite())
    }

    pub fn act(&self) -> Option<f64> {
        self.act_composite.filter(|act| act.is_finite())
    }

    /// A non-finite college GPA counts as absent.
    pub fn is_dual_enrolled(&self) -> bool {
        self.college_gpa.is_some_and(|gpa| gpa.is_finite())
    }
}

/// Class rank as `position/total`, e.g. `10/200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRank {
    pub position: u32,
    pub total: u32,
}

impl ClassRank {
    /// Returns `None` for anything other than two positive integers around a single `/`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split('/');
        let position = parts.next()?.trim().parse::<u32>().ok()?;
        let total = parts.next()?.trim().parse::<u32>().ok()?;
        if parts.next().is_some() || position == 0 || total == 0 {
            return None;
        }
        Some(Self { position, total })
    }

    /// Share of the class ranked below this student. Can go negative when
    /// position exceeds total.
    pub fn percentile(&self) -> f64 {
        1.0 - f64::from(self.position) / f64::from(self.total)
    }
}

pub fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

/// Unparseable cells and `NaN`/`inf` read as missing.
fn deserialize_finite<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = csv::invalid_option(deserializer)?;
    Ok(value.filter(|value| value.is_finite()))
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(is_truthy).unwrap_or(false))
}
