pub mod error;
pub mod model_loader;
pub mod routes;
pub mod settings;
pub mod state;
