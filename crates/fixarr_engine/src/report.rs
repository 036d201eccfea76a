use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, instrument};

use fixarr_base::{FixarrError, FixarrResult, ResultExt};

use crate::array::FixedArray;
use crate::config::Config;

/// Everything the CLI prints about an array, computed in one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayReport {
    pub size: usize,
    pub elements: Vec<i64>,
    pub sum: i64,
    pub evens: Vec<i64>,
    pub odds: Vec<i64>,
    pub reversed: Vec<i64>,
    pub stride: StrideReport,
    pub geometric: GeometricReport,
    pub rows: Vec<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrideReport {
    pub start: usize,
    pub step: usize,
    pub elements: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometricReport {
    pub start: usize,
    pub factor: usize,
    pub elements: Vec<i64>,
}

impl ArrayReport {
    /// Run every aggregation over `array`.
    #[instrument(skip_all, fields(size = array.len()))]
    pub fn build(array: &FixedArray<i64>, config: &Config) -> FixarrResult<Self> {
        let stride = &config.stride;
        let geometric = &config.geometric;
        let sum = array.sum().context("computing sum")?;
        let partition = array
            .partition_by_parity()
            .context("partitioning by parity")?;
        let strided = array
            .stride(stride.start, stride.step)
            .with_context(|| format!("stepping from {} by {}", stride.start, stride.step))?;
        let multiplied = array
            .geometric_view(geometric.start, geometric.factor)
            .with_context(|| {
                format!(
                    "multiplying from position {} by {}",
                    geometric.start, geometric.factor
                )
            })?;
        debug!(sum, evens = partition.evens.len(), "built report");
        Ok(Self {
            size: array.len(),
            elements: array.as_slice().to_vec(),
            sum,
            evens: partition.evens,
            odds: partition.odds,
            reversed: array.reverse_view(),
            stride: StrideReport {
                start: stride.start,
                step: stride.step,
                elements: strided,
            },
            geometric: GeometricReport {
                start: geometric.start,
                factor: geometric.factor,
                elements: multiplied,
            },
            rows: array.repeat_rows(config.rows),
        })
    }

    /// Human readable, one aggregation per line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "size:     {}", self.size);
        let _ = writeln!(out, "elements: {}", join(&self.elements));
        let _ = writeln!(out, "sum:      {}", self.sum);
        let _ = writeln!(out, "evens:    {}", join(&self.evens));
        let _ = writeln!(out, "odds:     {}", join(&self.odds));
        let _ = writeln!(out, "reversed: {}", join(&self.reversed));
        let _ = writeln!(
            out,
            "stride:   {} (start {}, step {})",
            join(&self.stride.elements),
            self.stride.start,
            self.stride.step
        );
        let _ = writeln!(
            out,
            "geometric: {} (start {}, factor {})",
            join(&self.geometric.elements),
            self.geometric.start,
            self.geometric.factor
        );
        let _ = writeln!(out, "rows:");
        for row in &self.rows {
            let _ = writeln!(out, "  {}", join(row));
        }
        out
    }

    pub fn render_json(&self) -> FixarrResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Box::new(FixarrError::message(format!("Failed to serialize report: {}", e))))
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
