use std::{fs, path::PathBuf};

use anyhow::Context;
use descstat_analysis::{dataset::Dataset, report::Report};
use tracing::info;

use crate::{
    plot::{self, SvgRenderer},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    /// CSV file to analyze; the first column is treated as the row identifier
    #[clap(default_value = "Training_Set.csv")]
    pub input: PathBuf,
    /// Path of the text report
    #[clap(long, default_value = "descriptive_stats.txt")]
    pub output: PathBuf,
    /// Directory receiving one plot per variable
    #[clap(long, default_value = "plots")]
    pub plot_dir: PathBuf,
    /// Also write the computed statistics as JSON (`-` for stdout)
    #[clap(long)]
    pub summary_json: Option<PathBuf>,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let DescribeArg {
        input,
        output,
        plot_dir,
        summary_json,
    } = arg;

    let dataset = Dataset::from_path(input)
        .with_context(|| format!("Failed to load dataset: {}", input.display()))?;
    info!(
        path = %input.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Loaded dataset"
    );

    let report = Report::from_dataset(&dataset);
    info!(variables = report.variable_count(), "Analyzed variables");

    fs::create_dir_all(plot_dir).with_context(|| {
        format!("Failed to create plot directory: {}", plot_dir.display())
    })?;
    let outcome = plot::write_plots(&SvgRenderer::default(), &report.columns, plot_dir)?;
    info!(
        dir = %plot_dir.display(),
        written = outcome.written.len(),
        failed = outcome.failed.len(),
        "Wrote plots"
    );

    util::write_text_file("report", output, &report.to_string())?;
    info!(path = %output.display(), "Wrote report");

    if let Some(path) = summary_json {
        let mut json = Output::from_output_path(Some(path.clone()))?;
        json.write_json(&report)?;
        info!(path = %json.display_path(), "Wrote JSON summary");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn arg(dir: &Path, csv: &str) -> DescribeArg {
        let input = dir.join("input.csv");
        fs::write(&input, csv).unwrap();
        DescribeArg {
            input,
            output: dir.join("descriptive_stats.txt"),
            plot_dir: dir.join("plots"),
            summary_json: None,
        }
    }

    #[test]
    fn test_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut arg = arg(
            dir.path(),
            "id,age,gender\n1,20,M\n2,21,F\n3,22,F\n4,23,\n5,24,M\n6,1000,F\n",
        );
        arg.summary_json = Some(dir.path().join("summary.json"));

        run(&arg).unwrap();

        let report = fs::read_to_string(&arg.output).unwrap();
        assert!(report.starts_with("Total Variables: 2\nTotal Observations: 6\n"));
        assert!(report.contains("Outlier Count: 1"));
        assert!(report.contains("F: Count 3, Percentage 60.00%"));

        assert!(arg.plot_dir.join("age_hist.svg").is_file());
        assert!(arg.plot_dir.join("gender_pie.svg").is_file());
        assert!(!arg.plot_dir.join("id_hist.svg").exists());

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap())
                .unwrap();
        assert_eq!(json["observations"], 6);
        assert_eq!(json["columns"][1]["statistics"]["kind"], "categorical");
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut arg = arg(dir.path(), "id,a\n1,2\n");
        arg.input = dir.path().join("nope.csv");

        let err = run(&arg).unwrap_err();

        assert!(format!("{err:#}").contains("nope.csv"));
        assert!(!arg.output.exists());
    }

    #[test]
    fn test_plot_dir_blocked_by_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let arg = arg(dir.path(), "id,a\n1,2\n");
        fs::write(&arg.plot_dir, "not a directory").unwrap();

        let err = run(&arg).unwrap_err();

        assert!(format!("{err:#}").contains(&arg.plot_dir.display().to_string()));
    }

    #[test]
    fn test_report_written_when_a_plot_fails_to_render() {
        let dir = tempfile::tempdir().unwrap();
        let arg = arg(dir.path(), "id,big,small\n1,1,1\n2,inf,2\n");

        run(&arg).unwrap();

        let report = fs::read_to_string(&arg.output).unwrap();
        assert!(report.contains("Variable: big"));
        assert!(!arg.plot_dir.join("big_hist.svg").exists());
        assert!(arg.plot_dir.join("small_hist.svg").is_file());
    }
}
