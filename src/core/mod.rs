pub mod config;
pub mod form;
pub mod log;
pub mod onboarding;
pub mod store;
pub mod tutorial;
pub mod views;
