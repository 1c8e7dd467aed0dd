use std::ops::RangeInclusive;

use crate::{
    category::Category,
    diet::{self, DietProfile},
    measurement::{Gender, Measurement},
};

pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=300.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Height must be between 100-250 cm")]
    InvalidHeight(f64),
    #[error("Weight must be between 30-300 kg")]
    InvalidWeight(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advice {
    pub measurement: Measurement,
    pub bmi: f64,
    pub category: Category,
    pub diet_profile: &'static DietProfile,
}

/// BMI straight from the formula, without rounding.
pub fn raw_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / height_m.powi(2)
}

/// Rounds to one decimal place based on the exact binary value, so 24.95
/// (stored as 24.9499...) becomes 24.9.
pub fn round_bmi(bmi: f64) -> f64 {
    format!("{:.1}", bmi)
        .parse()
        .expect("formatted f64 always parses back")
}

/// Computes BMI rounded to one decimal place.
///
/// Height is validated before weight, so a request with both values out of
/// range reports the height.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<f64> {
    if !HEIGHT_RANGE_CM.contains(&height_cm) {
        return Err(Error::InvalidHeight(height_cm));
    }
    if !WEIGHT_RANGE_KG.contains(&weight_kg) {
        return Err(Error::InvalidWeight(weight_kg));
    }

    Ok(round_bmi(raw_bmi(height_cm, weight_kg)))
}

pub fn categorize(bmi: f64) -> Category {
    if bmi < Category::NormalWeight.lower_bound() {
        Category::Underweight
    } else if bmi < Category::Overweight.lower_bound() {
        Category::NormalWeight
    } else if bmi < Category::Obese.lower_bound() {
        Category::Overweight
    } else {
        Category::Obese
    }
}

pub fn recommend(category: Category) -> &'static DietProfile {
    match category {
        Category::Underweight => &diet::UNDERWEIGHT,
        Category::NormalWeight => &diet::NORMAL_WEIGHT,
        Category::Overweight => &diet::OVERWEIGHT,
        Category::Obese => &diet::OBESE,
    }
}

pub fn advise(gender: Gender, height_cm: f64, weight_kg: f64) -> Result<Advice> {
    let bmi = compute_bmi(height_cm, weight_kg)?;
    let category = categorize(bmi);
    Ok(Advice {
        measurement: Measurement::new(gender, height_cm, weight_kg),
        bmi,
        category,
        diet_profile: recommend(category),
    })
}
