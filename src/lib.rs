pub mod app;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod interface;
pub mod model;
pub mod navigate;

pub use app::EnrollmentInterface;
pub use config::EnrollmentConfig;
pub use model::structs::EnrollmentOutcome;
