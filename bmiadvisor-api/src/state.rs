use bmiadvisor_db::calculation::{Calculation, CalculationRepository};
use bmiadvisor_model::{
    advisor::Advice,
    predictor::{DietPredictor, ThresholdPredictor},
};
use chrono::Utc;
use log::{debug, warn};

/// Shared, read-only application state built once at startup.
#[derive(Default)]
pub struct AppState {
    model: Option<Box<dyn DietPredictor>>,
    repository: Option<Box<dyn CalculationRepository>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(self, model: Box<dyn DietPredictor>) -> Self {
        Self {
            model: Some(model),
            ..self
        }
    }

    pub fn with_repository(self, repository: Box<dyn CalculationRepository>) -> Self {
        Self {
            repository: Some(repository),
            ..self
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Loaded model, falling back to plain BMI thresholds.
    pub fn predictor(&self) -> &dyn DietPredictor {
        self.model.as_deref().unwrap_or(&ThresholdPredictor)
    }

    /// Best-effort write to the calculation log. Failures are only logged.
    pub async fn log_calculation(&self, advice: &Advice) {
        let Some(repository) = &self.repository else {
            return;
        };

        debug!("Storing calculation in database");
        let calculation = Calculation::from_advice(advice, Utc::now());
        if let Err(e) = repository.store_calculation(calculation).await {
            warn!("Failed to store calculation in database, skipping. {}", e);
        }
    }
}
