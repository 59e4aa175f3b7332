pub mod activity;
pub mod notification;
pub mod reclamation;
pub mod user;
