//! Scenario entities - step descriptions, linked modules and the scenario envelope

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// Default HTTP method for a step without an explicit one
pub const DEFAULT_METHOD: &str = "GET";

/// Reserved key holding the module list in a scenario document
pub const MODULES_KEY: &str = "modules";

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

/// Description of a single HTTP request step
///
/// The method, headers and body are carried into the produced module
/// verbatim; nothing about them is checked or normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StepDescriptionData")]
pub struct StepDescription {
    url: String,
    method: String,
    headers: HashMap<String, String>,
    body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl StepDescription {
    /// Create a new GET step after validating the URL
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();

        if url.is_empty() {
            return Err(DomainError::validation("Step URL cannot be empty"));
        }

        Ok(Self::with_url(url))
    }

    /// Create a step from a URL known to be non-empty
    pub(super) fn with_url(url: String) -> Self {
        Self {
            url,
            method: default_method(),
            headers: HashMap::new(),
            body: None,
            name: None,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // Getters

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Unvalidated wire form of a step description
#[derive(Debug, Deserialize)]
struct StepDescriptionData {
    url: String,
    #[serde(default = "default_method")]
    method: String,
    #[serde(default)]
    headers: HashMap<String, String>,
    #[serde(default)]
    body: Option<Value>,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<StepDescriptionData> for StepDescription {
    type Error = DomainError;

    fn try_from(data: StepDescriptionData) -> Result<Self, Self::Error> {
        let mut step = Self::new(data.url)?
            .with_method(data.method)
            .with_headers(data.headers);
        step.body = data.body;
        step.name = data.name;
        Ok(step)
    }
}

/// Kind of module emitted into a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Plain HTTP request module
    Http,
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
        }
    }
}

/// Call specification of a module, copied from its step description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleOperation {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Always present on the wire; `null` when the step has no body
    #[serde(default)]
    pub body: Option<Value>,
}

impl From<&StepDescription> for ModuleOperation {
    fn from(step: &StepDescription) -> Self {
        Self {
            url: step.url.clone(),
            method: step.method.clone(),
            headers: step.headers.clone(),
            body: step.body.clone(),
        }
    }
}

/// One linked step of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRecord {
    id: u64,
    #[serde(rename = "type")]
    kind: ModuleKind,
    name: String,
    operation: ModuleOperation,
    /// Id of the following module; the key is omitted on the last module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next: Option<u64>,
}

impl ModuleRecord {
    /// Build an unlinked HTTP module for a step
    pub(super) fn http(id: u64, step: &StepDescription) -> Self {
        let name = step
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", id));

        Self {
            id,
            kind: ModuleKind::Http,
            name,
            operation: ModuleOperation::from(step),
            next: None,
        }
    }

    pub(super) fn link_to(&mut self, next: u64) {
        self.next = Some(next);
    }

    // Getters

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operation(&self) -> &ModuleOperation {
        &self.operation
    }

    pub fn next(&self) -> Option<u64> {
        self.next
    }

    /// Whether this module ends its chain
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Scenario document handed to the automation platform
///
/// Only `modules` is required. Scenario-level metadata is kept in an open
/// map and serialized next to `modules`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioDocument {
    modules: Vec<ModuleRecord>,
    #[serde(flatten)]
    metadata: Map<String, Value>,
}

impl ScenarioDocument {
    pub fn new(modules: Vec<ModuleRecord>) -> Self {
        Self {
            modules,
            metadata: Map::new(),
        }
    }

    /// Attach a scenario-level metadata entry
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Self, DomainError> {
        self.insert_metadata(key, value)?;
        Ok(self)
    }

    /// Insert a scenario-level metadata entry, replacing any previous value
    pub fn insert_metadata(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<(), DomainError> {
        let key = key.into();

        if key == MODULES_KEY {
            return Err(DomainError::validation(format!(
                "Metadata key '{}' is reserved",
                MODULES_KEY
            )));
        }

        self.metadata.insert(key, value);
        Ok(())
    }

    // Getters

    pub fn modules(&self) -> &[ModuleRecord] {
        &self.modules
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn into_modules(self) -> Vec<ModuleRecord> {
        self.modules
    }
}
