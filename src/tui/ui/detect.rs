//! Heart disease detection form.

use ratatui::{layout::Rect, Frame};

use crate::domain::{ChestPainType, DetectionInput, Outcome, RestingEcg, Sex, StSlope};

use super::form::{render_form_screen, Form, FormField, FormView};

const AGE: usize = 0;
const SEX: usize = 1;
const RESTING_BP: usize = 2;
const CHOLESTEROL: usize = 3;
const FASTING_BS: usize = 4;
const MAX_HEART_RATE: usize = 5;
const EXERCISE_ANGINA: usize = 6;
const OLDPEAK: usize = 7;
const CHEST_PAIN: usize = 8;
const RESTING_ECG: usize = 9;
const ST_SLOPE: usize = 10;

const NO_YES: &[&str] = &["No", "Yes"];

/// Detection screen state: form answers plus the last outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectFormState {
    pub form: Form,
    pub outcome: Option<Outcome>,
    pub error_message: Option<String>,
}

impl Default for DetectFormState {
    fn default() -> Self {
        Self {
            form: Form::new(vec![
                FormField::spinner("Age", DetectionInput::AGE),
                FormField::choice::<Sex>("Sex"),
                FormField::spinner("Resting BP", DetectionInput::RESTING_BP),
                FormField::spinner("Cholesterol", DetectionInput::CHOLESTEROL),
                FormField::select("Fasting Blood Sugar > 120 mg/dl?", NO_YES),
                FormField::spinner("Max Heart Rate", DetectionInput::MAX_HEART_RATE),
                FormField::select("Exercise-Induced Angina", NO_YES),
                FormField::spinner("Oldpeak", DetectionInput::OLDPEAK),
                FormField::choice::<ChestPainType>("Chest Pain Type"),
                FormField::choice::<RestingEcg>("Resting ECG"),
                FormField::choice::<StSlope>("ST Slope"),
            ]),
            outcome: None,
            error_message: None,
        }
    }
}

impl DetectFormState {
    /// Current answers as a detection input.
    ///
    /// Call `form.commit_all()` first so typed text is included.
    #[must_use]
    pub fn to_input(&self) -> DetectionInput {
        let field = |i| self.form.field(i);
        DetectionInput {
            age: field(AGE).value() as u32,
            sex: field(SEX).choice_value(),
            resting_bp: field(RESTING_BP).value() as u32,
            cholesterol: field(CHOLESTEROL).value() as u32,
            fasting_blood_sugar_high: field(FASTING_BS).is_yes(),
            max_heart_rate: field(MAX_HEART_RATE).value() as u32,
            exercise_angina: field(EXERCISE_ANGINA).is_yes(),
            oldpeak: DetectionInput::OLDPEAK.to_f64(field(OLDPEAK).value()),
            chest_pain_type: field(CHEST_PAIN).choice_value(),
            resting_ecg: field(RESTING_ECG).choice_value(),
            st_slope: field(ST_SLOPE).choice_value(),
        }
    }

    /// Fill in a sample patient.
    pub fn load_sample_data(&mut self) {
        // 45yo male, atypical angina, normal ECG, upsloping ST
        let sample: [(usize, i64); 11] = [
            (AGE, 45),
            (SEX, 0),
            (RESTING_BP, 130),
            (CHOLESTEROL, 250),
            (FASTING_BS, 0),
            (MAX_HEART_RATE, 170),
            (EXERCISE_ANGINA, 0),
            (OLDPEAK, 15),
            (CHEST_PAIN, 1),
            (RESTING_ECG, 0),
            (ST_SLOPE, 0),
        ];
        for (i, raw) in sample {
            self.form.field_mut(i).set(raw);
        }
        self.outcome = None;
        self.error_message = None;
    }
}

/// Render the detection screen
pub fn render_detect(f: &mut Frame, area: Rect, state: &DetectFormState) {
    render_form_screen(
        f,
        area,
        &FormView {
            title: "Heart Disease Detection",
            subtitle: "Fill in your medical details to check if you currently have heart disease.",
            form: &state.form,
            outcome: state.outcome.as_ref(),
            error_message: state.error_message.as_deref(),
            submit_label: "Predict Now",
        },
    );
}
