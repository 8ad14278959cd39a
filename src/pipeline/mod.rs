use crate::config::Config;
use crate::product::{self, Product};
use crate::questions;
use crate::render::{self, PageOutput};
use crate::scoring;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{error, info};

/// Outcome of a single pipeline step, recorded whether it succeeds or
/// fails.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub name: &'static str,
    pub success: bool,
    pub duration_ms: f64,
    pub error: Option<String>,
}

/// Aggregated run statistics across all recorded steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub steps_run: usize,
    pub steps_failed: usize,
    pub success_rate: f64,
    pub avg_duration_ms: f64,
    pub total_duration_ms: f64,
}

/// The three generated documents. Pages disabled in the config stay
/// `None`.
#[derive(Debug, Default)]
pub struct Outputs {
    pub faq: Option<PageOutput>,
    pub product_page: Option<PageOutput>,
    pub comparison: Option<PageOutput>,
}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct PipelineResult {
    pub success: bool,
    pub outputs: Outputs,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub steps: Vec<StepRecord>,
}

impl PipelineResult {
    pub fn summary(&self) -> RunSummary {
        let steps_run = self.steps.len();
        let steps_failed = self.steps.iter().filter(|step| !step.success).count();
        let total_duration_ms: f64 = self.steps.iter().map(|step| step.duration_ms).sum();

        RunSummary {
            steps_run,
            steps_failed,
            success_rate: if steps_run == 0 {
                0.0
            } else {
                (steps_run - steps_failed) as f64 / steps_run as f64 * 100.0
            },
            avg_duration_ms: if steps_run == 0 {
                0.0
            } else {
                total_duration_ms / steps_run as f64
            },
            total_duration_ms,
        }
    }
}

/// Run the fixed phases over a raw input document.
///
/// Phase 1 normalizes the input into a `Product` and checks business
/// rules, phase 2 generates the question set, phase 3 renders the
/// enabled pages. The first failing step aborts the run; everything
/// after it is skipped.
pub fn run(raw: &Value, config: &Config) -> PipelineResult {
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut outputs = Outputs::default();

    let result = run_phases(raw, config, &mut steps, &mut warnings, &mut outputs);

    match result {
        Ok(()) => PipelineResult {
            success: true,
            outputs,
            warnings,
            errors: Vec::new(),
            steps,
        },
        Err(message) => PipelineResult {
            success: false,
            outputs,
            warnings,
            errors: vec![message],
            steps,
        },
    }
}

fn run_phases(
    raw: &Value,
    config: &Config,
    steps: &mut Vec<StepRecord>,
    warnings: &mut Vec<String>,
    outputs: &mut Outputs,
) -> Result<(), String> {
    let product: Product = run_step("normalize", steps, || product::normalize(raw))?;
    warnings.extend(product::check_product(&product));

    let questions = run_step("questions", steps, || {
        Ok(questions::generate_questions(&product))
    })?;

    // The three renders only depend on the product and question set, but
    // run in a fixed order.
    if config.pages.faq {
        outputs.faq = Some(run_step("faq", steps, || {
            Ok(render::render_faq(&product, &questions))
        })?);
    }

    if config.pages.product {
        outputs.product_page = Some(run_step("product_page", steps, || {
            Ok(render::render_product_page(&product))
        })?);
    }

    if config.pages.comparison {
        outputs.comparison = Some(run_step("comparison", steps, || {
            let reference = config.reference_product();
            let facts = scoring::compute_comparison(&product, &reference);
            Ok(render::render_comparison(&product, &reference, &facts))
        })?);
    }

    Ok(())
}

// Times one step and records its outcome. The error string carries the
// step name so a failed run reads as a single line.
fn run_step<T>(
    name: &'static str,
    steps: &mut Vec<StepRecord>,
    step: impl FnOnce() -> Result<T>,
) -> Result<T, String> {
    info!(step = name, "starting");
    let start = Instant::now();
    let result = step();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    match result {
        Ok(value) => {
            steps.push(StepRecord {
                name,
                success: true,
                duration_ms,
                error: None,
            });
            info!(step = name, duration_ms, "completed");
            Ok(value)
        }
        Err(err) => {
            let message = format!("{name}: {err:#}");
            steps.push(StepRecord {
                name,
                success: false,
                duration_ms,
                error: Some(message.clone()),
            });
            error!(step = name, error = %err, "step failed");
            Err(message)
        }
    }
}
