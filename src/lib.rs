pub mod artifact;
pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod predictor;
pub mod server;

pub use error::{Error, Result};
