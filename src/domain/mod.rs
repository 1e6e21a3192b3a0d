//! Domain layer - scenario building and submission contracts

pub mod error;
pub mod scenario;
pub mod submission;

pub use error::DomainError;
pub use scenario::{
    ModuleKind, ModuleOperation, ModuleRecord, ScenarioBuilder, ScenarioDocument,
    ScenarioRequest, StepDescription, StepRequest,
};
pub use submission::{MakeCredentials, ScenarioSubmitter, SubmissionReceipt};
