use std::str::FromStr;

use actix_web::{get, post, web, Responder};
use bmiadvisor_model::{
    advisor::{self, Advice},
    measurement::Gender,
    predictor::DietPredictor,
    wire::{CategoryTable, Health, Prediction},
};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{self, ApiError, INVALID_VALUES, MISSING_FIELDS},
    state::AppState,
};

/// Fields are kept as raw JSON so that presence is checked before type.
#[derive(Debug, Deserialize)]
struct PredictionBody {
    gender: Option<Value>,
    height: Option<Value>,
    weight: Option<Value>,
}

/// Numbers may arrive as JSON numbers or as numeric strings.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

impl PredictionBody {
    fn validate(self) -> Result<(Gender, f64, f64), ApiError> {
        let (Some(gender), Some(height), Some(weight)) = (self.gender, self.height, self.weight)
        else {
            return Err(ApiError::Validation(MISSING_FIELDS.to_owned()));
        };
        let (Some(height), Some(weight)) = (number(&height), number(&weight)) else {
            return Err(ApiError::Validation(INVALID_VALUES.to_owned()));
        };
        let gender = gender
            .as_str()
            .and_then(|gender| Gender::from_str(gender.trim()).ok())
            .ok_or_else(|| {
                ApiError::Validation("Gender must be either male or female".to_owned())
            })?;

        Ok((gender, height, weight))
    }
}

async fn advise(state: &AppState, body: PredictionBody) -> Result<Advice, ApiError> {
    let (gender, height, weight) = body.validate()?;
    let advice = advisor::advise(gender, height, weight)?;
    debug!(
        "{} {} cm {} kg: BMI {} ({})",
        gender, height, weight, advice.bmi, advice.category
    );

    state.log_calculation(&advice).await;
    Ok(advice)
}

#[post("/api/predict")]
async fn predict(
    state: web::Data<AppState>,
    body: web::Json<PredictionBody>,
) -> Result<web::Json<Prediction>, ApiError> {
    let advice = advise(&state, body.into_inner()).await?;
    Ok(web::Json(Prediction::new(&advice, None)))
}

#[post("/predict")]
async fn predict_diet(
    state: web::Data<AppState>,
    body: web::Json<PredictionBody>,
) -> Result<web::Json<Prediction>, ApiError> {
    let advice = advise(&state, body.into_inner()).await?;
    let plan = state.predictor().predict(&advice.measurement);
    info!("Predicted {} for BMI {}", plan, advice.bmi);
    Ok(web::Json(Prediction::new(&advice, Some(plan))))
}

#[get("/api/health")]
async fn health(state: web::Data<AppState>) -> impl Responder {
    web::Json(Health::healthy(state.model_loaded()))
}

#[get("/bmi-categories")]
async fn bmi_categories() -> impl Responder {
    web::Json(CategoryTable::all())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(predict)
        .service(predict_diet)
        .service(health)
        .service(bmi_categories);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body(value: Value) -> PredictionBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let parsed = body(json!({"gender": "female", "height": " 162 ", "weight": 60}))
            .validate()
            .unwrap();

        assert_eq!(parsed, (Gender::Female, 162.0, 60.0));
    }

    #[test]
    fn missing_fields_are_reported_before_invalid_values() {
        let test_data = [
            json!({"height": "abc"}),
            json!({"height": true, "weight": 70}),
            json!({"gender": "male", "height": [180], "weight": null}),
            json!({"gender": {"value": "male"}, "weight": 70}),
        ];

        for (i, value) in test_data.into_iter().enumerate() {
            let err = body(value).validate().unwrap_err();
            assert_eq!(err.to_string(), MISSING_FIELDS, "Test case #{}", i);
        }
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let test_data = [
            json!({"gender": "male", "height": 175, "weight": "heavy"}),
            json!({"gender": "male", "height": true, "weight": 70}),
            json!({"gender": "male", "height": {"cm": 175}, "weight": 70}),
        ];

        for (i, value) in test_data.into_iter().enumerate() {
            let err = body(value).validate().unwrap_err();
            assert_eq!(err.to_string(), INVALID_VALUES, "Test case #{}", i);
        }
    }

    #[test]
    fn unknown_gender_is_rejected() {
        let test_data = [
            json!({"gender": "unknown", "height": 175, "weight": 70}),
            json!({"gender": 1, "height": 175, "weight": 70}),
        ];

        for (i, value) in test_data.into_iter().enumerate() {
            let err = body(value).validate().unwrap_err();
            assert_eq!(
                err.to_string(),
                "Gender must be either male or female",
                "Test case #{}",
                i
            );
        }
    }
}
