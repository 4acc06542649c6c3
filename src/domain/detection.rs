//! Heart disease detection inputs and their feature encoding.
//!
//! The detection classifier was trained on dummy-encoded clinical columns.
//! Each categorical group has one baseline category with no indicator column:
//! Asymptomatic chest pain, LVH resting ECG and Down ST slope are represented
//! by all-zero indicators in their group. Adding a baseline column or
//! reordering columns breaks compatibility with the trained model without any
//! error signal, so the layout below is fixed.

use super::patient::{Choice, FieldRange, Sex};

/// Number of columns in a detection feature vector.
pub const DETECTION_FEATURE_COUNT: usize = 15;

/// Column names in the order the detection classifier expects them.
pub const DETECTION_FEATURE_NAMES: [&str; DETECTION_FEATURE_COUNT] = [
    "Age",
    "Sex",
    "RestingBP",
    "Cholesterol",
    "FastingBS",
    "MaxHR",
    "ExerciseAngina",
    "Oldpeak",
    "ChestPainType_ATA",
    "ChestPainType_NAP",
    "ChestPainType_TA",
    "RestingECG_Normal",
    "RestingECG_ST",
    "ST_Slope_Flat",
    "ST_Slope_Up",
];

/// Chest pain type. `Asymptomatic` is the implicit baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestPainType {
    TypicalAngina,
    AtypicalAngina,
    NonAnginalPain,
    Asymptomatic,
}

impl Choice for ChestPainType {
    const ALL: &'static [Self] = &[
        Self::TypicalAngina,
        Self::AtypicalAngina,
        Self::NonAnginalPain,
        Self::Asymptomatic,
    ];
    const LABELS: &'static [&'static str] = &[
        "Typical Angina",
        "Atypical Angina",
        "Non-Anginal Pain",
        "Asymptomatic",
    ];
}

/// Resting electrocardiogram result. `Lvh` is the implicit baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestingEcg {
    Normal,
    St,
    Lvh,
}

impl Choice for RestingEcg {
    const ALL: &'static [Self] = &[Self::Normal, Self::St, Self::Lvh];
    const LABELS: &'static [&'static str] = &["Normal", "ST", "LVH"];
}

/// Slope of the peak exercise ST segment. `Down` is the implicit baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StSlope {
    Up,
    Flat,
    Down,
}

impl Choice for StSlope {
    const ALL: &'static [Self] = &[Self::Up, Self::Flat, Self::Down];
    const LABELS: &'static [&'static str] = &["Up", "Flat", "Down"];
}

/// Raw clinical answers collected by the detection form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionInput {
    /// Age in years
    pub age: u32,
    pub sex: Sex,
    /// Resting blood pressure in mmHg
    pub resting_bp: u32,
    /// Serum cholesterol in mg/dl
    pub cholesterol: u32,
    /// Fasting blood sugar above 120 mg/dl
    pub fasting_blood_sugar_high: bool,
    /// Maximum heart rate achieved
    pub max_heart_rate: u32,
    pub exercise_angina: bool,
    /// ST depression induced by exercise relative to rest
    pub oldpeak: f64,
    pub chest_pain_type: ChestPainType,
    pub resting_ecg: RestingEcg,
    pub st_slope: StSlope,
}

impl DetectionInput {
    pub const AGE: FieldRange = FieldRange::whole(1, 120, 30);
    pub const RESTING_BP: FieldRange = FieldRange::whole(60, 200, 120);
    pub const CHOLESTEROL: FieldRange = FieldRange::whole(100, 400, 180);
    pub const MAX_HEART_RATE: FieldRange = FieldRange::whole(60, 220, 150);
    /// Stored in tenths: 0.0 to 10.0, default 1.0.
    pub const OLDPEAK: FieldRange = FieldRange::tenths(0, 100, 10);
}

/// Fixed-order detection feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionFeatureVector([f64; DETECTION_FEATURE_COUNT]);

impl DetectionFeatureVector {
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn as_array(&self) -> &[f64; DETECTION_FEATURE_COUNT] {
        &self.0
    }

    /// Value of a column by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        DETECTION_FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.0[i])
    }
}

fn indicator(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Encode detection answers into the classifier's column layout.
#[must_use]
pub fn encode_detection_features(input: &DetectionInput) -> DetectionFeatureVector {
    let cp = input.chest_pain_type;
    let ecg = input.resting_ecg;
    let slope = input.st_slope;

    DetectionFeatureVector([
        f64::from(input.age),
        indicator(input.sex == Sex::Male),
        f64::from(input.resting_bp),
        f64::from(input.cholesterol),
        indicator(input.fasting_blood_sugar_high),
        f64::from(input.max_heart_rate),
        indicator(input.exercise_angina),
        input.oldpeak,
        indicator(cp == ChestPainType::AtypicalAngina),
        indicator(cp == ChestPainType::NonAnginalPain),
        indicator(cp == ChestPainType::TypicalAngina),
        indicator(ecg == RestingEcg::Normal),
        indicator(ecg == RestingEcg::St),
        indicator(slope == StSlope::Flat),
        indicator(slope == StSlope::Up),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> DetectionInput {
        DetectionInput {
            age: 45,
            sex: Sex::Male,
            resting_bp: 130,
            cholesterol: 250,
            fasting_blood_sugar_high: false,
            max_heart_rate: 170,
            exercise_angina: false,
            oldpeak: 1.5,
            chest_pain_type: ChestPainType::AtypicalAngina,
            resting_ecg: RestingEcg::Normal,
            st_slope: StSlope::Up,
        }
    }

    fn ones(values: &[f64]) -> usize {
        values.iter().filter(|v| **v == 1.0).count()
    }

    #[test]
    fn test_encode_reference_patient() {
        let vector = encode_detection_features(&sample_input());
        assert_eq!(
            vector.as_array(),
            &[45.0, 1.0, 130.0, 250.0, 0.0, 170.0, 0.0, 1.5, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_one_hot_groups_are_exclusive() {
        for &cp in ChestPainType::ALL {
            for &ecg in RestingEcg::ALL {
                for &slope in StSlope::ALL {
                    let input = DetectionInput {
                        chest_pain_type: cp,
                        resting_ecg: ecg,
                        st_slope: slope,
                        ..sample_input()
                    };
                    let v = encode_detection_features(&input);
                    let s = v.as_slice();
                    assert_eq!(s.len(), DETECTION_FEATURE_COUNT);
                    assert!(ones(&s[8..11]) <= 1, "chest pain group for {cp:?}");
                    assert!(ones(&s[11..13]) <= 1, "ecg group for {ecg:?}");
                    assert!(ones(&s[13..15]) <= 1, "slope group for {slope:?}");
                }
            }
        }
    }

    #[test]
    fn test_baseline_categories_encode_as_all_zero() {
        let input = DetectionInput {
            chest_pain_type: ChestPainType::Asymptomatic,
            resting_ecg: RestingEcg::Lvh,
            st_slope: StSlope::Down,
            ..sample_input()
        };
        let v = encode_detection_features(&input);
        assert!(v.as_slice()[8..].iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_binary_answers() {
        let input = DetectionInput {
            sex: Sex::Female,
            fasting_blood_sugar_high: true,
            exercise_angina: true,
            chest_pain_type: ChestPainType::TypicalAngina,
            resting_ecg: RestingEcg::St,
            st_slope: StSlope::Flat,
            ..sample_input()
        };
        let v = encode_detection_features(&input);
        assert_eq!(v.get_by_name("Sex"), Some(0.0));
        assert_eq!(v.get_by_name("FastingBS"), Some(1.0));
        assert_eq!(v.get_by_name("ExerciseAngina"), Some(1.0));
        assert_eq!(v.get_by_name("ChestPainType_TA"), Some(1.0));
        assert_eq!(v.get_by_name("RestingECG_ST"), Some(1.0));
        assert_eq!(v.get_by_name("ST_Slope_Flat"), Some(1.0));
        assert_eq!(v.get_by_name("ST_Slope_Up"), Some(0.0));
        assert_eq!(v.get_by_name("Unknown"), None);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let input = sample_input();
        assert_eq!(
            encode_detection_features(&input),
            encode_detection_features(&input)
        );
    }
}
