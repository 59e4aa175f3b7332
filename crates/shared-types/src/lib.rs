pub mod error;
pub mod config;

pub mod models;
pub mod dashboard;

// Dashboard panel rows
pub mod activity;
pub mod notification;
pub mod reclamation;

pub use error::*;
pub use config::*;
pub use models::*;
pub use dashboard::*;

pub use activity::*;
pub use notification::*;
pub use reclamation::*;
