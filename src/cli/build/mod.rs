//! Build command - prints a scenario document built from step requests

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;
use tracing::info;

use crate::domain::{ScenarioBuilder, ScenarioDocument, ScenarioRequest, StepRequest};

/// Arguments for the build command
#[derive(Args, Clone, Debug, Default)]
pub struct BuildArgs {
    /// JSON file with the steps; reads stdin when omitted or `-`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the document on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Run the build command
pub fn run(args: BuildArgs) -> anyhow::Result<()> {
    super::init_config();

    let raw = read_input(args.input.as_ref())?;
    let document = build_from_str(&raw)?;
    info!(modules = document.module_count(), "Scenario built");

    println!("{}", render(&document, args.compact)?);

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// Parse step requests and build a document with a fresh builder
///
/// Accepts a bare step list or a full `{"steps", "metadata"}` request.
pub fn build_from_str(raw: &str) -> anyhow::Result<ScenarioDocument> {
    let value: Value = serde_json::from_str(raw).context("Invalid JSON input")?;

    let request = match value {
        steps @ Value::Array(_) => ScenarioRequest::new(
            serde_json::from_value::<Vec<StepRequest>>(steps).context("Invalid step list")?,
        ),
        request @ Value::Object(_) => {
            serde_json::from_value(request).context("Invalid scenario request")?
        }
        other => anyhow::bail!(
            "Expected a step list or a scenario request, got {}",
            json_type_name(&other)
        ),
    };

    Ok(request.build(&ScenarioBuilder::new())?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn render(document: &ScenarioDocument, compact: bool) -> anyhow::Result<String> {
    let rendered = if compact {
        serde_json::to_string(document)?
    } else {
        serde_json::to_string_pretty(document)?
    };

    Ok(rendered)
}
