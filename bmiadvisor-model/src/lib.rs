pub mod advisor;
pub mod category;
pub mod diet;
pub mod measurement;
pub mod predictor;
#[cfg(feature = "serde")]
pub mod wire;
