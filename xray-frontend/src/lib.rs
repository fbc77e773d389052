pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod models;
pub mod observability;
pub mod render;
pub mod services;
pub mod view;

pub use controller::{ChatOutcome, Controller};
pub use error::{BackendError, ControllerError};
