use std::{error::Error, fs, path::Path};

use bmiadvisor_model::predictor::DecisionForest;
use log::info;

pub fn load_forest(path: &Path) -> Result<DecisionForest, Box<dyn Error>> {
    let source = fs::read_to_string(path)?;
    let forest: DecisionForest = ron::from_str(&source)?;
    info!(
        "Loaded diet model with {} trees from {}",
        forest.trees().len(),
        path.display()
    );
    Ok(forest)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bmiadvisor_model::{
        advisor,
        diet::DietPlan,
        measurement::{Gender, Measurement},
        predictor::{DietPredictor, ThresholdPredictor},
    };

    use super::*;

    fn shipped_model() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../models/diet_forest.ron")
    }

    #[test]
    fn shipped_model_loads() {
        let forest = load_forest(&shipped_model()).unwrap();
        assert!(!forest.trees().is_empty());
    }

    #[test]
    fn shipped_model_agrees_with_thresholds_away_from_legacy_cutoffs() {
        let forest = load_forest(&shipped_model()).unwrap();

        for (gender, height, weight) in [
            (Gender::Female, 170.0, 45.0),
            (Gender::Male, 180.0, 55.0),
            (Gender::Female, 162.0, 60.0),
            (Gender::Male, 185.0, 70.0),
            (Gender::Female, 160.0, 70.0),
            (Gender::Male, 178.0, 88.0),
            (Gender::Male, 175.0, 95.0),
            (Gender::Female, 155.0, 120.0),
        ] {
            let measurement = Measurement::new(gender, height, weight);
            assert_eq!(
                forest.predict(&measurement),
                ThresholdPredictor.predict(&measurement),
                "{:?} with BMI {}",
                measurement,
                measurement.bmi()
            );
        }
    }

    #[test]
    fn shipped_model_keeps_legacy_cutoff() {
        let forest = load_forest(&shipped_model()).unwrap();
        // BMI 24.954
        let measurement = Measurement::new(Gender::Male, 180.0, 80.85);

        assert_eq!(forest.predict(&measurement), DietPlan::WeightLoss);
    }

    #[test]
    fn shipped_model_sees_unrounded_bmi() {
        let forest = load_forest(&shipped_model()).unwrap();
        // BMI 24.86, reported as 24.9
        let measurement = Measurement::new(Gender::Female, 170.0, 71.85);

        assert_eq!(advisor::compute_bmi(170.0, 71.85), Ok(24.9));
        assert_eq!(forest.predict(&measurement), DietPlan::Balanced);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_forest(Path::new("does/not/exist.ron")).is_err());
    }
}
