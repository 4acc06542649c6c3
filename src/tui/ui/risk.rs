//! Lifestyle risk estimator form.

use ratatui::{layout::Rect, Frame};

use crate::domain::{DietQuality, Outcome, RiskInput, Sex, StressLevel};

use super::form::{render_form_screen, Form, FormField, FormView};

const AGE: usize = 0;
const SEX: usize = 1;
const SMOKER: usize = 2;
const EXERCISE: usize = 3;
const DIET: usize = 4;
const FAMILY_HISTORY: usize = 5;
const STRESS: usize = 6;
const SLEEP: usize = 7;

const YES_NO: &[&str] = &["Yes", "No"];

/// Risk screen state: form answers plus the last outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskFormState {
    pub form: Form,
    pub outcome: Option<Outcome>,
    pub error_message: Option<String>,
}

impl Default for RiskFormState {
    fn default() -> Self {
        Self {
            form: Form::new(vec![
                FormField::spinner("Age", RiskInput::AGE),
                FormField::choice::<Sex>("Sex"),
                FormField::select("Do you smoke?", YES_NO),
                FormField::slider("Exercise days/week", RiskInput::EXERCISE_DAYS),
                FormField::choice::<DietQuality>("Diet quality"),
                FormField::select("Family History", YES_NO),
                FormField::choice::<StressLevel>("Stress Level"),
                FormField::slider("Sleep hours", RiskInput::SLEEP_HOURS),
            ]),
            outcome: None,
            error_message: None,
        }
    }
}

impl RiskFormState {
    /// Current answers as a risk input.
    #[must_use]
    pub fn to_input(&self) -> RiskInput {
        let field = |i| self.form.field(i);
        RiskInput {
            age: field(AGE).value() as u32,
            sex: field(SEX).choice_value(),
            smoker: field(SMOKER).is_yes(),
            exercise_days_per_week: field(EXERCISE).value() as u32,
            diet_quality: field(DIET).choice_value(),
            family_history: field(FAMILY_HISTORY).is_yes(),
            stress_level: field(STRESS).choice_value(),
            sleep_hours: field(SLEEP).value() as u32,
        }
    }

    /// Fill in a sample adult with healthy habits.
    pub fn load_sample_data(&mut self) {
        let sample: [(usize, i64); 8] = [
            (AGE, 30),
            (SEX, 1),
            (SMOKER, 1),
            (EXERCISE, 5),
            (DIET, 0),
            (FAMILY_HISTORY, 1),
            (STRESS, 0),
            (SLEEP, 7),
        ];
        for (i, raw) in sample {
            self.form.field_mut(i).set(raw);
        }
        self.outcome = None;
        self.error_message = None;
    }
}

/// Render the risk estimator screen
pub fn render_risk(f: &mut Frame, area: Rect, state: &RiskFormState) {
    render_form_screen(
        f,
        area,
        &FormView {
            title: "Heart Disease Risk Estimator",
            subtitle: "Check your lifestyle-based risk of developing heart disease.",
            form: &state.form,
            outcome: state.outcome.as_ref(),
            error_message: state.error_message.as_deref(),
            submit_label: "Estimate Risk",
        },
    );
}
