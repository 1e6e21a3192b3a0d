//! Scenario builder - identifier allocation and module linking

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::entity::{ModuleRecord, ScenarioDocument, StepDescription};

/// First identifier handed out by a fresh builder
pub const FIRST_MODULE_ID: u64 = 1;

/// Builds chained HTTP modules and scenario documents
///
/// Each builder owns its identifier counter. Ids are never reused across
/// calls on the same builder, and every call reserves a contiguous block so
/// a builder shared between threads still hands out unique ids.
#[derive(Debug)]
pub struct ScenarioBuilder {
    next_id: AtomicU64,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Create a builder whose first module gets id 1
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(FIRST_MODULE_ID),
        }
    }

    /// Id the next emitted module will receive
    pub fn next_id(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst)
    }

    /// Turn ordered steps into HTTP modules linked through `next`
    ///
    /// Only modules produced by this call are linked together; the last one
    /// carries no `next`.
    pub fn chain_modules(&self, steps: &[StepDescription]) -> Vec<ModuleRecord> {
        if steps.is_empty() {
            return Vec::new();
        }

        let first_id = self
            .next_id
            .fetch_add(steps.len() as u64, Ordering::SeqCst);

        let mut modules: Vec<ModuleRecord> = steps
            .iter()
            .zip(first_id..)
            .map(|(step, id)| ModuleRecord::http(id, step))
            .collect();

        let successors: Vec<u64> = modules.iter().skip(1).map(ModuleRecord::id).collect();
        for (module, next) in modules.iter_mut().zip(successors) {
            module.link_to(next);
        }

        debug!(
            module_count = modules.len(),
            first_id,
            last_id = first_id + steps.len() as u64 - 1,
            "Chained HTTP modules"
        );

        modules
    }

    /// Build a scenario document around freshly chained modules
    pub fn create_scenario(&self, steps: &[StepDescription]) -> ScenarioDocument {
        ScenarioDocument::new(self.chain_modules(steps))
    }
}
