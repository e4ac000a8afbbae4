use std::f64::consts::TAU;

use descstat_stats::frequency::FrequencyTable;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{LABEL_FONT, TITLE_FONT, title};

/// Arc resolution of a wedge, in radians per polygon edge.
const ARC_STEP: f64 = TAU / 360.0;

/// Draws one wedge per category, counter-clockwise from the positive x axis.
///
/// Categories are labeled just outside the circle; percentages are printed
/// inside their wedge.
pub(super) fn draw(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    name: &str,
    categories: &FrequencyTable<String>,
) -> anyhow::Result<()> {
    let area = root.titled(&title(name), TITLE_FONT)?;
    let (width, height) = area.dim_in_pixel();
    let center = (f64::from(width) / 2.0, f64::from(height) / 2.0);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut start_angle = 0.0;
    for (idx, entry) in categories.iter().enumerate() {
        let sweep = TAU * entry.percentage / 100.0;
        let end_angle = start_angle + sweep;
        let color = Palette99::pick(idx);

        area.draw(&Polygon::new(
            wedge(center, radius, start_angle, end_angle),
            color.filled(),
        ))?;

        let mid_angle = start_angle + sweep / 2.0;
        let h_pos = if mid_angle.cos() >= 0.0 {
            HPos::Left
        } else {
            HPos::Right
        };
        let label_style =
            TextStyle::from(LABEL_FONT.into_font()).pos(Pos::new(h_pos, VPos::Center));
        area.draw(&Text::new(
            entry.value.as_str(),
            polar(center, radius * 1.1, mid_angle),
            label_style,
        ))?;

        let percent_style =
            TextStyle::from(LABEL_FONT.into_font()).pos(Pos::new(HPos::Center, VPos::Center));
        area.draw(&Text::new(
            format!("{:.1}%", entry.percentage),
            polar(center, radius * 0.6, mid_angle),
            percent_style,
        ))?;

        start_angle = end_angle;
    }

    Ok(())
}

fn wedge(center: (f64, f64), radius: f64, start_angle: f64, end_angle: f64) -> Vec<(i32, i32)> {
    let mut points = vec![polar(center, 0.0, start_angle)];
    let mut angle = start_angle;
    while angle < end_angle {
        points.push(polar(center, radius, angle));
        angle += ARC_STEP;
    }
    points.push(polar(center, radius, end_angle));
    points
}

/// Pixel position at `angle` radians and `distance` from `center`; y grows
/// downwards.
#[expect(clippy::cast_possible_truncation)]
fn polar(center: (f64, f64), distance: f64, angle: f64) -> (i32, i32) {
    let x = center.0 + distance * angle.cos();
    let y = center.1 - distance * angle.sin();
    (x.round() as i32, y.round() as i32)
}

#[cfg(test)]
mod tests {
    use descstat_analysis::{column::analyze_column, dataset::Column};

    use super::*;
    use crate::plot::{PlotRenderer as _, SvgRenderer};

    #[test]
    fn test_pie_has_labels_and_percentages() {
        let cells = ["M", "F", "F"].map(|v| Some(v.to_owned())).to_vec();
        let summary = analyze_column(&Column::new("gender", cells));

        let svg = SvgRenderer::default().render(&summary).unwrap();

        assert!(svg.contains("Distribution of gender"));
        assert!(svg.contains("66.7%"));
        assert!(svg.contains("33.3%"));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn test_polar_goes_counter_clockwise() {
        let center = (100.0, 100.0);
        assert_eq!(polar(center, 10.0, 0.0), (110, 100));
        assert_eq!(polar(center, 10.0, TAU / 4.0), (100, 90));
    }

    #[test]
    fn test_wedge_starts_at_center_and_ends_on_arc() {
        let points = wedge((0.0, 0.0), 10.0, 0.0, TAU / 4.0);
        assert_eq!(points.first(), Some(&(0, 0)));
        assert_eq!(points.last(), Some(&(0, -10)));
        assert!(points.len() > 3);
    }
}
