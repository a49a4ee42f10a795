//! 유스케이스 모음.

pub mod inspect_config;
pub mod list_models;
pub mod review_ci;
pub mod run_task;
pub mod session;
