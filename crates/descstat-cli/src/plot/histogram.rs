use descstat_stats::histogram::Histogram;
use plotters::{coord::Shift, prelude::*};

use super::{LABEL_FONT, TITLE_FONT, title};

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

pub(super) fn draw(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    name: &str,
    histogram: &Histogram,
) -> anyhow::Result<()> {
    // An all-missing column still gets an (empty) chart
    let x_range = histogram.range().unwrap_or(0.0..1.0);
    anyhow::ensure!(
        x_range.start.is_finite() && x_range.end.is_finite(),
        "histogram range of {name} is not finite: {x_range:?}"
    );
    let y_max = histogram.max_count();
    let y_range = 0..(y_max + y_max / 10).max(1);

    let mut chart = ChartBuilder::on(root)
        .caption(title(name), TITLE_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Value")
        .y_desc("Frequency")
        .label_style(LABEL_FONT)
        .draw()?;

    chart.draw_series(histogram.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.range.start, 0), (bin.range.end, bin.count)],
            BAR_COLOR.filled(),
        )
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use descstat_analysis::{column::analyze_column, dataset::Column};

    use crate::plot::{PlotRenderer as _, SvgRenderer};

    fn render(name: &str, cells: Vec<Option<String>>) -> String {
        let summary = analyze_column(&Column::new(name, cells));
        SvgRenderer::default().render(&summary).unwrap()
    }

    #[test]
    fn test_histogram_has_title_and_axes() {
        let cells = ["20", "21", "22", "23", "24", "1000"]
            .map(|v| Some(v.to_owned()))
            .to_vec();
        let svg = render("age", cells);

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Distribution of age"));
        assert!(svg.contains("Value"));
        assert!(svg.contains("Frequency"));
    }

    #[test]
    fn test_all_missing_column_renders_empty_chart() {
        let svg = render("empty", vec![None, None]);
        assert!(svg.contains("Distribution of empty"));
    }

    #[test]
    fn test_constant_column_renders() {
        let svg = render("const", vec![Some("5".to_owned()); 3]);
        assert!(svg.contains("<rect"));
    }
}
