//! JSON bodies exchanged between the HTTP server and its clients.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    advisor::Advice,
    category::Category,
    diet::{DietPlan, DietProfile},
    measurement::Gender,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietDetails {
    pub category: Category,
    pub bmi_range: String,
    pub recommendations: Vec<String>,
    pub foods_to_include: Vec<String>,
    pub foods_to_avoid: Vec<String>,
}

impl From<&DietProfile> for DietDetails {
    fn from(profile: &DietProfile) -> Self {
        let owned = |items: &[&str]| -> Vec<String> {
            items.iter().map(|item| item.to_string()).collect()
        };
        Self {
            category: profile.category,
            bmi_range: profile.bmi_range().to_owned(),
            recommendations: owned(profile.recommendations),
            foods_to_include: owned(profile.foods_to_include),
            foods_to_avoid: owned(profile.foods_to_avoid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub success: bool,
    pub bmi: f64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_recommendation: Option<DietPlan>,
    pub diet_details: DietDetails,
}

impl Prediction {
    pub fn new(advice: &Advice, diet_recommendation: Option<DietPlan>) -> Self {
        Self {
            success: true,
            bmi: advice.bmi,
            category: advice.category,
            diet_recommendation,
            diet_details: advice.diet_profile.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub model_loaded: bool,
}

impl Health {
    pub fn healthy(model_loaded: bool) -> Self {
        Self {
            status: "healthy".to_owned(),
            model_loaded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRange {
    pub range: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub categories: Vec<CategoryRange>,
}

impl CategoryTable {
    pub fn all() -> Self {
        Self {
            categories: Category::iter()
                .map(|category| CategoryRange {
                    range: category.bmi_range().to_owned(),
                    category,
                })
                .collect(),
        }
    }
}
