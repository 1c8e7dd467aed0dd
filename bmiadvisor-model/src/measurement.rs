#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString};

use crate::advisor;

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerializeDisplay, DeserializeFromStr))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn is_male(&self) -> bool {
        matches!(self, Gender::Male)
    }
}

/// A single reading of a person's height and weight.
///
/// Values are not range-checked on construction; `advisor::compute_bmi`
/// rejects anything outside the accepted bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurement {
    pub fn new(gender: Gender, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            gender,
            height_cm,
            weight_kg,
        }
    }

    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    /// Unrounded BMI of this measurement.
    pub fn bmi(&self) -> f64 {
        advisor::raw_bmi(self.height_cm, self.weight_kg)
    }
}
