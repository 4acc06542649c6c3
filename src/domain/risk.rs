//! Lifestyle risk inputs and their feature encoding.
//!
//! Column order is load-bearing: the risk classifier reads columns by
//! position. Low stress is the implicit baseline of the stress group.

use super::patient::{Choice, FieldRange, Sex};

pub const RISK_FEATURE_COUNT: usize = 9;

/// Column names in the order the risk classifier expects them.
pub const RISK_FEATURE_NAMES: [&str; RISK_FEATURE_COUNT] = [
    "Age",
    "ExercisePerWeek",
    "SleepHours",
    "Sex_Male",
    "Smoker_Yes",
    "Diet_Poor",
    "FamilyHistory_Yes",
    "Stress_Moderate",
    "Stress_High",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietQuality {
    Good,
    Poor,
}

impl Choice for DietQuality {
    const ALL: &'static [Self] = &[Self::Good, Self::Poor];
    const LABELS: &'static [&'static str] = &["Good", "Poor"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl Choice for StressLevel {
    const ALL: &'static [Self] = &[Self::Low, Self::Moderate, Self::High];
    const LABELS: &'static [&'static str] = &["Low", "Moderate", "High"];
}

/// Raw lifestyle answers collected by the risk form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskInput {
    pub age: u32,
    pub sex: Sex,
    pub smoker: bool,
    /// 0 to 7
    pub exercise_days_per_week: u32,
    pub diet_quality: DietQuality,
    pub family_history: bool,
    pub stress_level: StressLevel,
    /// 3 to 10
    pub sleep_hours: u32,
}

impl RiskInput {
    pub const AGE: FieldRange = FieldRange::whole(10, 100, 30);
    pub const EXERCISE_DAYS: FieldRange = FieldRange::whole(0, 7, 3);
    pub const SLEEP_HOURS: FieldRange = FieldRange::whole(3, 10, 6);
}

/// Fixed-order risk feature vector with named columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFeatureVector {
    pub age: f64,
    pub exercise_per_week: f64,
    pub sleep_hours: f64,
    pub sex_male: f64,
    pub smoker_yes: f64,
    pub diet_poor: f64,
    pub family_history_yes: f64,
    pub stress_moderate: f64,
    pub stress_high: f64,
}

impl RiskFeatureVector {
    /// Columns in classifier order, see [`RISK_FEATURE_NAMES`].
    #[must_use]
    pub fn to_array(&self) -> [f64; RISK_FEATURE_COUNT] {
        [
            self.age,
            self.exercise_per_week,
            self.sleep_hours,
            self.sex_male,
            self.smoker_yes,
            self.diet_poor,
            self.family_history_yes,
            self.stress_moderate,
            self.stress_high,
        ]
    }
}

fn indicator(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Encode lifestyle answers into the classifier's column layout.
#[must_use]
pub fn encode_risk_features(input: &RiskInput) -> RiskFeatureVector {
    RiskFeatureVector {
        age: f64::from(input.age),
        exercise_per_week: f64::from(input.exercise_days_per_week),
        sleep_hours: f64::from(input.sleep_hours),
        sex_male: indicator(input.sex == Sex::Male),
        smoker_yes: indicator(input.smoker),
        diet_poor: indicator(input.diet_quality == DietQuality::Poor),
        family_history_yes: indicator(input.family_history),
        stress_moderate: indicator(input.stress_level == StressLevel::Moderate),
        stress_high: indicator(input.stress_level == StressLevel::High),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_adult() -> RiskInput {
        RiskInput {
            age: 30,
            sex: Sex::Female,
            smoker: false,
            exercise_days_per_week: 5,
            diet_quality: DietQuality::Good,
            family_history: false,
            stress_level: StressLevel::Low,
            sleep_hours: 7,
        }
    }

    #[test]
    fn test_encode_reference_adult() {
        let v = encode_risk_features(&healthy_adult());
        assert_eq!(
            v.to_array(),
            [30.0, 5.0, 7.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_stress_group_is_exclusive() {
        for &stress in StressLevel::ALL {
            let input = RiskInput {
                stress_level: stress,
                ..healthy_adult()
            };
            let v = encode_risk_features(&input);
            let a = v.to_array();
            assert_eq!(a.len(), RISK_FEATURE_COUNT);
            assert!(v.stress_moderate + v.stress_high <= 1.0);
            match stress {
                StressLevel::Low => assert_eq!(&a[7..], &[0.0, 0.0]),
                StressLevel::Moderate => assert_eq!(&a[7..], &[1.0, 0.0]),
                StressLevel::High => assert_eq!(&a[7..], &[0.0, 1.0]),
            }
        }
    }

    #[test]
    fn test_at_risk_profile() {
        let input = RiskInput {
            age: 62,
            sex: Sex::Male,
            smoker: true,
            exercise_days_per_week: 0,
            diet_quality: DietQuality::Poor,
            family_history: true,
            stress_level: StressLevel::High,
            sleep_hours: 4,
        };
        assert_eq!(
            encode_risk_features(&input).to_array(),
            [62.0, 0.0, 4.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let input = healthy_adult();
        assert_eq!(encode_risk_features(&input), encode_risk_features(&input));
    }
}
