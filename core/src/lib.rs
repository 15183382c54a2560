pub mod config;
pub mod determinism;
pub mod loader;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod validator;

pub mod error;
