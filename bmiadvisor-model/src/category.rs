#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString};

/// Weight status derived from a BMI value.
///
/// Variants are declared in ascending BMI order, which `EnumIter` and `Ord` rely on.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(SerializeDisplay, DeserializeFromStr))]
pub enum Category {
    Underweight,
    #[strum(serialize = "Normal Weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl Category {
    /// Lower bound of the category, inclusive.
    pub fn lower_bound(&self) -> f64 {
        match self {
            Category::Underweight => 0.0,
            Category::NormalWeight => 18.5,
            Category::Overweight => 25.0,
            Category::Obese => 30.0,
        }
    }

    /// Human readable BMI range, as shown to end users.
    pub fn bmi_range(&self) -> &'static str {
        match self {
            Category::Underweight => "Below 18.5",
            Category::NormalWeight => "18.5 - 24.9",
            Category::Overweight => "25.0 - 29.9",
            Category::Obese => "30.0 and above",
        }
    }
}
