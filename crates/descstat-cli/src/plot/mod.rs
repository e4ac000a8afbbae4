//! Per-column distribution plots
//!
//! Continuous columns get a histogram, categorical columns a pie chart.
//! Rendering and writing are split: a plot that cannot be rendered is
//! logged and skipped, while a plot file that cannot be written aborts
//! the run.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use descstat_analysis::column::{ColumnStatistics, ColumnSummary};
use plotters::prelude::*;

use crate::util;

mod histogram;
mod pie;

const TITLE_FONT: (&str, u32) = ("sans-serif", 24);
const LABEL_FONT: (&str, u32) = ("sans-serif", 14);

pub(crate) trait PlotRenderer {
    /// Extension of the produced files, without the leading dot.
    fn file_extension(&self) -> &'static str;

    /// Renders the plot of one column into an in-memory document.
    fn render(&self, summary: &ColumnSummary) -> anyhow::Result<String>;
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SvgRenderer {
    size: (u32, u32),
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { size: (800, 600) }
    }
}

impl PlotRenderer for SvgRenderer {
    fn file_extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, summary: &ColumnSummary) -> anyhow::Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE)?;
            match &summary.statistics {
                ColumnStatistics::Continuous(stats) => {
                    histogram::draw(&root, &summary.name, &stats.histogram)?;
                }
                ColumnStatistics::Categorical(stats) => {
                    pie::draw(&root, &summary.name, &stats.categories)?;
                }
            }
            root.present()?;
        }
        Ok(svg)
    }
}

#[derive(Debug, Default)]
pub(crate) struct PlotOutcome {
    pub written: Vec<PathBuf>,
    /// Columns whose plot could not be rendered.
    pub failed: Vec<String>,
}

/// Renders and writes one plot per column into `dir`.
///
/// Render failures are logged and recorded in the outcome; the first write
/// failure is returned as an error. Columns whose file names collide after
/// sanitizing get a numeric suffix, e.g. `a_b_hist_1.svg`.
pub(crate) fn write_plots<R>(
    renderer: &R,
    summaries: &[ColumnSummary],
    dir: &Path,
) -> anyhow::Result<PlotOutcome>
where
    R: PlotRenderer + ?Sized,
{
    let mut outcome = PlotOutcome::default();
    let mut used_names = HashSet::new();
    for summary in summaries {
        let document = match renderer.render(summary) {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(column = %summary.name, "Failed to render plot: {err:#}");
                outcome.failed.push(summary.name.clone());
                continue;
            }
        };
        let extension = renderer.file_extension();
        let preferred = summary.plot_file_name(extension);
        let file_name = unique_file_name(&mut used_names, &preferred, extension);
        if file_name != preferred {
            tracing::warn!(
                column = %summary.name,
                "Plot file {preferred} is already taken, writing {file_name} instead"
            );
        }
        let path = dir.join(file_name);
        util::write_text_file("plot", &path, &document)?;
        tracing::debug!(path = %path.display(), "Wrote plot");
        outcome.written.push(path);
    }
    Ok(outcome)
}

fn unique_file_name(used: &mut HashSet<String>, preferred: &str, extension: &str) -> String {
    let stem = preferred
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(preferred);
    let mut candidate = preferred.to_owned();
    let mut suffix = 1;
    while used.contains(&candidate) {
        candidate = format!("{stem}_{suffix}.{extension}");
        suffix += 1;
    }
    used.insert(candidate.clone());
    candidate
}

fn title(name: &str) -> String {
    format!("Distribution of {name}")
}
