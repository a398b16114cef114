//! report.rs
//!
//! Summary of one generation run, printed as text or JSON.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::GenError;
use crate::request::{GenerationRequest, Language, Safety, Sign};

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub language: Language,
    pub safety: Safety,
    pub branches: u32,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Smallest value `test` can compute over all inputs.
    pub min_total: i64,
    /// Inputs that trip the assertion, when any exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<bool>>,
}

impl GenerationReport {
    pub fn new(request: &GenerationRequest, path: &Path, seed: u64) -> Self {
        let lowest = lowest_assignment(request);
        let min_total = request.evaluate(&lowest);

        Self {
            language: request.language,
            safety: request.safety,
            branches: request.n(),
            path: path.to_path_buf(),
            seed: matches!(request.language, Language::Rust).then_some(seed),
            min_total,
            witness: (min_total < 0).then_some(lowest),
        }
    }

    pub fn to_json(&self) -> Result<String, GenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut out = vec![
            format!("wrote: {}", self.path.display()),
            format!("branches: {} ({})", self.branches, self.safety.label()),
        ];
        if let Some(seed) = self.seed {
            out.push(format!("seed: {seed}"));
        }
        match &self.witness {
            Some(w) => out.push(format!(
                "assertion reachable: r = {} with {}",
                self.min_total,
                describe(w)
            )),
            None => out.push("assertion holds for every input".to_string()),
        }
        out
    }
}

/// Take exactly the negative branches.
fn lowest_assignment(request: &GenerationRequest) -> Vec<bool> {
    request
        .branches()
        .map(|b| b.sign == Sign::Minus)
        .collect()
}

fn describe(assignment: &[bool]) -> String {
    assignment
        .iter()
        .enumerate()
        .map(|(i, v)| format!("c{}={}", i + 1, v))
        .collect::<Vec<_>>()
        .join(" ")
}
