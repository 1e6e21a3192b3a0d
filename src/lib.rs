//! Make scenario builder
//!
//! Assembles Make (formerly Integromat) scenarios out of chained HTTP modules:
//! - Step presets for OpenRouter, Runway and ElevenLabs
//! - A scenario builder that allocates module ids and links them through `next`
//! - An HTTP front-end and CLI around both

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::scenario::preset;
pub use domain::{
    DomainError, ModuleRecord, ScenarioBuilder, ScenarioDocument, StepDescription,
};
