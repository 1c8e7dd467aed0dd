use bmiadvisor_model::wire::{Prediction, PredictionRequest};
use itertools::Itertools;

use crate::{Client, Result};

pub async fn advise(
    client: &dyn Client,
    request: &PredictionRequest,
    with_diet_plan: bool,
) -> Result<String> {
    let prediction = if with_diet_plan {
        client.predict_diet(request).await?
    } else {
        client.predict(request).await?
    };
    Ok(render(&prediction))
}

fn bullets(items: &[String]) -> String {
    items.iter().map(|item| format!("  - {}", item)).join("\n")
}

pub fn render(prediction: &Prediction) -> String {
    let details = &prediction.diet_details;
    let mut lines = vec![format!(
        "BMI: {} ({}, {})",
        prediction.bmi, prediction.category, details.bmi_range
    )];
    if let Some(plan) = prediction.diet_recommendation {
        lines.push(format!("Diet plan: {}", plan));
    }
    lines.push(format!("Recommendations:\n{}", bullets(&details.recommendations)));
    lines.push(format!("Foods to include:\n{}", bullets(&details.foods_to_include)));
    lines.push(format!("Foods to avoid:\n{}", bullets(&details.foods_to_avoid)));
    lines.join("\n")
}
