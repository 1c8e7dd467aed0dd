use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{advisor, diet::DietPlan, measurement::Measurement};

pub trait DietPredictor: Send + Sync {
    fn predict(&self, measurement: &Measurement) -> DietPlan;
}

/// Predicts the plan from the category of the rounded BMI, so it always
/// agrees with `advisor::advise`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThresholdPredictor;

impl DietPredictor for ThresholdPredictor {
    fn predict(&self, measurement: &Measurement) -> DietPlan {
        advisor::categorize(advisor::round_bmi(measurement.bmi())).into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Feature {
    GenderMale,
    HeightCm,
    WeightKg,
    Bmi,
}

impl Feature {
    /// `Bmi` is the unrounded value, the same one trees are fitted on.
    fn value(&self, measurement: &Measurement) -> f64 {
        match self {
            Feature::GenderMale => {
                if measurement.gender.is_male() {
                    1.0
                } else {
                    0.0
                }
            }
            Feature::HeightCm => measurement.height_cm,
            Feature::WeightKg => measurement.weight_kg,
            Feature::Bmi => measurement.bmi(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    Leaf(DietPlan),
    Split {
        feature: Feature,
        threshold: f64,
        below: Box<Node>,
        at_or_above: Box<Node>,
    },
}

impl Node {
    pub fn predict(&self, measurement: &Measurement) -> DietPlan {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(plan) => return *plan,
                Node::Split {
                    feature,
                    threshold,
                    below,
                    at_or_above,
                } => {
                    node = if feature.value(measurement) < *threshold {
                        below.as_ref()
                    } else {
                        at_or_above.as_ref()
                    };
                }
            }
        }
    }

    fn has_finite_thresholds(&self) -> bool {
        match self {
            Node::Leaf(_) => true,
            Node::Split {
                threshold,
                below,
                at_or_above,
                ..
            } => {
                threshold.is_finite()
                    && below.has_finite_thresholds()
                    && at_or_above.has_finite_thresholds()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForestError {
    #[error("forest has no trees")]
    Empty,
    #[error("tree #{0} has a non-finite split threshold")]
    InvalidThreshold(usize),
}

/// Ensemble of decision trees voting on a diet plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ForestDefinition"))]
pub struct DecisionForest {
    trees: Vec<Node>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ForestDefinition {
    trees: Vec<Node>,
}

#[cfg(feature = "serde")]
impl TryFrom<ForestDefinition> for DecisionForest {
    type Error = ForestError;

    fn try_from(definition: ForestDefinition) -> Result<Self, Self::Error> {
        Self::new(definition.trees)
    }
}

impl DecisionForest {
    pub fn new(trees: Vec<Node>) -> Result<Self, ForestError> {
        if trees.is_empty() {
            return Err(ForestError::Empty);
        }
        if let Some(index) = trees.iter().position(|tree| !tree.has_finite_thresholds()) {
            return Err(ForestError::InvalidThreshold(index));
        }
        Ok(Self { trees })
    }

    pub fn trees(&self) -> &[Node] {
        &self.trees
    }
}

impl DietPredictor for DecisionForest {
    fn predict(&self, measurement: &Measurement) -> DietPlan {
        let mut votes = HashMap::<DietPlan, usize>::new();
        for tree in self.trees.iter() {
            *votes.entry(tree.predict(measurement)).or_default() += 1;
        }

        // Highest vote count wins, ties go to the less severe plan.
        votes
            .into_iter()
            .max_by(|(plan_a, count_a), (plan_b, count_b)| {
                count_a.cmp(count_b).then(plan_b.cmp(plan_a))
            })
            .map(|(plan, _)| plan)
            .expect("DecisionForest::new rejects empty forests")
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::measurement::Gender;

    use super::*;

    #[test]
    fn forest_loads_from_ron() {
        let source = r#"(
            trees: [
                Split(
                    feature: Bmi,
                    threshold: 25.0,
                    below: Leaf("Balanced Diet"),
                    at_or_above: Leaf("Weight Loss Diet"),
                ),
            ],
        )"#;

        let forest: DecisionForest = ron::from_str(source).unwrap();
        let heavier = Measurement::new(Gender::Male, 180.0, 85.0);
        let lighter = Measurement::new(Gender::Male, 180.0, 72.0);
        assert_eq!(forest.predict(&heavier), DietPlan::WeightLoss);
        assert_eq!(forest.predict(&lighter), DietPlan::Balanced);
    }

    #[test]
    fn empty_forest_fails_to_load() {
        assert!(ron::from_str::<DecisionForest>("(trees: [])").is_err());
    }
}
