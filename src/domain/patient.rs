//! Patient attributes shared by both assessments.
//!
//! Categorical answers implement [`Choice`] so the form layer can present them
//! as single-choice selectors in a fixed display order. Numeric answers carry a
//! [`FieldRange`] that the input widgets clamp to, which keeps out-of-range
//! values from ever reaching an encoder.

/// A categorical answer offered as a single-choice selector.
///
/// `ALL` and `LABELS` are index-aligned and list options in display order.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Display labels, index-aligned with `ALL`.
    const LABELS: &'static [&'static str];

    /// Display label for this variant.
    #[must_use]
    fn label(self) -> &'static str {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .and_then(|i| Self::LABELS.get(i))
            .copied()
            .unwrap_or("")
    }

    /// Variant at a selector index. Indices wrap around.
    #[must_use]
    fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Biological sex as asked on both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Choice for Sex {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];
    const LABELS: &'static [&'static str] = &["Male", "Female"];
}

/// Declared range of a numeric form field.
///
/// Values are held as integers in units of `10^-decimals`, so a field with one
/// decimal stores `1.5` as `15`. This keeps stepping exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub min: i64,
    pub max: i64,
    pub default: i64,
    pub decimals: u32,
}

impl FieldRange {
    /// Whole-number range.
    #[must_use]
    pub const fn whole(min: i64, max: i64, default: i64) -> Self {
        Self {
            min,
            max,
            default,
            decimals: 0,
        }
    }

    /// Range stepped in tenths; bounds are given in tenths as well.
    #[must_use]
    pub const fn tenths(min: i64, max: i64, default: i64) -> Self {
        Self {
            min,
            max,
            default,
            decimals: 1,
        }
    }

    #[must_use]
    pub fn clamp(&self, raw: i64) -> i64 {
        raw.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, raw: i64) -> bool {
        (self.min..=self.max).contains(&raw)
    }

    /// Scale factor between stored units and the displayed value.
    #[must_use]
    pub fn scale(&self) -> i64 {
        10_i64.pow(self.decimals)
    }

    /// Displayed value of a stored raw value.
    #[must_use]
    pub fn to_f64(&self, raw: i64) -> f64 {
        raw as f64 / self.scale() as f64
    }

    /// Parse typed text into stored units, rounding to the field's precision.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<i64> {
        let value: f64 = text.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some((value * self.scale() as f64).round() as i64)
    }

    /// Format a stored value with the field's precision.
    #[must_use]
    pub fn format(&self, raw: i64) -> String {
        format!("{:.*}", self.decimals as usize, self.to_f64(raw))
    }
}
