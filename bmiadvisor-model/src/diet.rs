#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, EnumString};

use crate::category::Category;

/// Static dietary guidance for one weight category.
#[derive(Debug, PartialEq)]
pub struct DietProfile {
    pub category: Category,
    pub recommendations: &'static [&'static str],
    pub foods_to_include: &'static [&'static str],
    pub foods_to_avoid: &'static [&'static str],
}

impl DietProfile {
    pub fn bmi_range(&self) -> &'static str {
        self.category.bmi_range()
    }
}

pub(crate) static UNDERWEIGHT: DietProfile = DietProfile {
    category: Category::Underweight,
    recommendations: &[
        "Increase caloric intake with nutrient-dense foods",
        "Include healthy fats like nuts, avocados, and olive oil",
        "Eat frequent, smaller meals throughout the day",
        "Focus on protein-rich foods for muscle building",
        "Consider consulting a nutritionist for personalized guidance",
    ],
    foods_to_include: &[
        "Nuts and nut butters",
        "Avocados",
        "Whole grains",
        "Lean proteins",
        "Healthy oils",
        "Dried fruits",
        "Protein shakes",
        "Full-fat dairy",
    ],
    foods_to_avoid: &[
        "Empty calories from junk food",
        "Excessive caffeine",
        "Foods high in trans fats",
    ],
};

pub(crate) static NORMAL_WEIGHT: DietProfile = DietProfile {
    category: Category::NormalWeight,
    recommendations: &[
        "Maintain current weight with balanced nutrition",
        "Include variety from all food groups",
        "Practice portion control",
        "Stay hydrated with plenty of water",
        "Regular physical activity",
    ],
    foods_to_include: &[
        "Fruits and vegetables",
        "Whole grains",
        "Lean proteins",
        "Low-fat dairy",
        "Healthy fats in moderation",
    ],
    foods_to_avoid: &[
        "Processed foods",
        "Excessive sugar and salt",
        "Trans fats",
        "Excessive alcohol",
    ],
};

pub(crate) static OVERWEIGHT: DietProfile = DietProfile {
    category: Category::Overweight,
    recommendations: &[
        "Create a moderate caloric deficit for gradual weight loss",
        "Focus on nutrient-dense, low-calorie foods",
        "Increase fiber intake to promote satiety",
        "Practice mindful eating and portion control",
        "Incorporate regular physical activity",
    ],
    foods_to_include: &[
        "Vegetables",
        "Fruits",
        "Lean proteins",
        "Whole grains",
        "Low-fat dairy",
        "Legumes",
        "Water-rich foods",
    ],
    foods_to_avoid: &[
        "High-calorie processed foods",
        "Sugary drinks",
        "Refined carbohydrates",
        "Fried foods",
        "High-fat snacks",
    ],
};

pub(crate) static OBESE: DietProfile = DietProfile {
    category: Category::Obese,
    recommendations: &[
        "Consult healthcare professionals for comprehensive weight management",
        "Create a structured meal plan with caloric deficit",
        "Focus on high-fiber, low-calorie foods",
        "Consider working with a registered dietitian",
        "Gradual lifestyle changes for sustainable results",
    ],
    foods_to_include: &[
        "Non-starchy vegetables",
        "Lean proteins",
        "Whole grains in moderation",
        "Fruits in moderation",
        "Low-fat dairy",
        "Legumes",
    ],
    foods_to_avoid: &[
        "High-calorie processed foods",
        "Sugary beverages",
        "Fast food",
        "Refined sugars",
        "High-fat foods",
        "Large portion sizes",
    ],
};

/// Label produced by a diet classifier.
///
/// Variants are ordered by severity; ensembles break ties towards the lower one.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(SerializeDisplay, DeserializeFromStr))]
pub enum DietPlan {
    #[strum(serialize = "Gain Weight Diet")]
    GainWeight,
    #[strum(serialize = "Balanced Diet")]
    Balanced,
    #[strum(serialize = "Weight Loss Diet")]
    WeightLoss,
    #[strum(serialize = "Obesity Management Diet")]
    ObesityManagement,
}

impl DietPlan {
    pub fn category(&self) -> Category {
        match self {
            DietPlan::GainWeight => Category::Underweight,
            DietPlan::Balanced => Category::NormalWeight,
            DietPlan::WeightLoss => Category::Overweight,
            DietPlan::ObesityManagement => Category::Obese,
        }
    }
}

impl From<Category> for DietPlan {
    fn from(category: Category) -> Self {
        match category {
            Category::Underweight => DietPlan::GainWeight,
            Category::NormalWeight => DietPlan::Balanced,
            Category::Overweight => DietPlan::WeightLoss,
            Category::Obese => DietPlan::ObesityManagement,
        }
    }
}
