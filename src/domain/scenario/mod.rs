//! Scenario domain - chaining HTTP steps into Make scenario documents
//!
//! A [`ScenarioBuilder`] turns an ordered list of [`StepDescription`]s into
//! [`ModuleRecord`]s linked through their `next` field, and wraps them into a
//! [`ScenarioDocument`]. The [`preset`] module provides ready-made steps for
//! OpenRouter, Runway and ElevenLabs.

mod builder;
mod entity;
pub mod preset;
mod request;

pub use builder::{ScenarioBuilder, FIRST_MODULE_ID};
pub use entity::{
    ModuleKind, ModuleOperation, ModuleRecord, ScenarioDocument, StepDescription,
    DEFAULT_METHOD, MODULES_KEY,
};
pub use request::{resolve_steps, ScenarioRequest, StepRequest};
