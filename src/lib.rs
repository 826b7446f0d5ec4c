pub mod config;
pub mod domain;
pub mod export;
pub mod simulation;
pub mod telemetry;
