//! Figures rendered with plotters: scale comparisons, P-T coverage and phase boundaries.
use crate::boundary::BoundaryCurve;
use crate::material::Material;
use crate::run::{DistributionSeries, PanelResult};
use crate::utils;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use std::path::Path;

type PlotResult = Result<(), Box<dyn std::error::Error>>;

/// Size, axis limits and marker options of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Image size in pixels.
    pub size: (u32, u32),
    /// Fixed x-axis limits, or fit to the data.
    pub x_range: Option<(f64, f64)>,
    /// Fixed y-axis limits, or fit to the data.
    pub y_range: Option<(f64, f64)>,
    /// Marker radius in pixels.
    pub marker_size: u32,
    /// Draw the reference-pressure error as a horizontal bar.
    pub show_reference_error: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            size: (1200, 900),
            x_range: None,
            y_range: None,
            marker_size: 5,
            show_reference_error: true,
        }
    }
}

impl PlotStyle {
    /// Image size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Fix the x-axis limits.
    pub fn x_range(mut self, lo: f64, hi: f64) -> Self {
        self.x_range = Some((lo, hi));
        self
    }

    /// Fix the y-axis limits.
    pub fn y_range(mut self, lo: f64, hi: f64) -> Self {
        self.y_range = Some((lo, hi));
        self
    }

    /// Marker radius in pixels.
    pub fn marker_size(mut self, size: u32) -> Self {
        self.marker_size = size;
        self
    }

    /// Toggle the horizontal reference-pressure error bars.
    pub fn reference_error(mut self, show: bool) -> Self {
        self.show_reference_error = show;
        self
    }
}

/// Colour of a pressure standard: gold blue, platinum red, everything else black.
pub fn material_color(material: Material) -> RGBColor {
    match material {
        Material::Gold => BLUE,
        Material::Platinum => RED,
        _ => BLACK,
    }
}

/// Horizontal alignment of annotation text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    /// Text starts at the anchor.
    Left,
    /// Text is centred on the anchor.
    Center,
    /// Text ends at the anchor.
    Right,
}

/// Text placed at `text_at` with a leader line to the point `at`, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Label text.
    pub text: String,
    /// Point the leader line ends at.
    pub at: (f64, f64),
    /// Anchor of the text.
    pub text_at: (f64, f64),
    /// Alignment of the text about its anchor.
    pub align: Align,
}

impl Annotation {
    /// Label `text` at `text_at` pointing to `at`.
    pub fn new(text: &str, at: (f64, f64), text_at: (f64, f64), align: Align) -> Self {
        Annotation {
            text: text.to_string(),
            at,
            text_at,
            align,
        }
    }
}

fn text_style(size: u32, align: Align) -> TextStyle<'static> {
    let h = match align {
        Align::Left => HPos::Left,
        Align::Center => HPos::Center,
        Align::Right => HPos::Right,
    };
    TextStyle::from(("sans-serif", size).into_font()).pos(Pos::new(h, VPos::Center))
}

fn annotate<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    notes: &[Annotation],
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    for note in notes {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![note.text_at, note.at],
            &BLACK.mix(0.5),
        )))?;
        chart.draw_series(std::iter::once(Circle::new(note.at, 2, BLACK.mix(0.5).filled())))?;
        chart.draw_series(std::iter::once(Text::new(
            note.text.clone(),
            note.text_at,
            text_style(16, note.align),
        )))?;
    }
    Ok(())
}

/// Panel tag such as `a`, placed at a fraction of the axis span.
fn tag<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    text: &str,
    x: (f64, f64),
    y: (f64, f64),
    at: (f64, f64),
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    chart.draw_series(std::iter::once(Text::new(
        text.to_string(),
        (utils::lerp(x.0, x.1, at.0), utils::lerp(y.0, y.1, at.1)),
        text_style(32, Align::Center),
    )))?;
    Ok(())
}

/// Grid of ΔP against P(reference) panels, two per row.
///  - `panels` from [compare_datasets](../run/fn.compare_datasets.html).
///  - Vertical bars show the sample-pressure error, horizontal bars the reference-pressure
///    error when `style.show_reference_error` is set.
pub fn comparison_figure<P: AsRef<Path>>(panels: &[PanelResult], style: &PlotStyle, path: P) -> PlotResult {
    let path = path.as_ref();
    let root = BitMapBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE)?;
    let cols = if panels.len() > 1 { 2 } else { 1 };
    let rows = ((panels.len() + cols - 1) / cols).max(1);
    let areas = root.split_evenly((rows, cols));

    for (panel, area) in panels.iter().zip(areas.iter()) {
        comparison_panel(panel, style, area)?;
    }

    root.present()?;
    log::info!("saved {}", path.display());
    Ok(())
}

fn comparison_panel<DB: DrawingBackend>(
    panel: &PanelResult,
    style: &PlotStyle,
    area: &DrawingArea<DB, Shift>,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let points = || panel.series.iter().flat_map(|s| s.points.iter());
    let x = style
        .x_range
        .unwrap_or_else(|| utils::padded_extent(points().map(|p| p.reference.nominal), 0.05));
    let y = style
        .y_range
        .unwrap_or_else(|| utils::padded_extent(points().map(|p| p.delta()), 0.1));

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x.0..x.1, y.0..y.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .y_labels(5)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("P(MgO) (GPa)")
        .y_desc("ΔP (GPa)")
        .draw()?;

    // dotted zero line
    chart.draw_series(DashedLineSeries::new(
        vec![(x.0, 0.0), (x.1, 0.0)],
        2,
        4,
        BLACK.stroke_width(1),
    ))?;

    for series in &panel.series {
        let color = material_color(series.material);
        chart.draw_series(series.points.iter().map(|p| {
            ErrorBar::new_vertical(
                p.reference.nominal,
                p.delta() - p.sample_error(),
                p.delta(),
                p.delta() + p.sample_error(),
                color.stroke_width(1),
                0,
            )
        }))?;
        if style.show_reference_error {
            chart.draw_series(series.points.iter().map(|p| {
                ErrorBar::new_horizontal(
                    p.delta(),
                    p.reference.nominal - p.reference_error(),
                    p.reference.nominal,
                    p.reference.nominal + p.reference_error(),
                    color.stroke_width(1),
                    0,
                )
            }))?;
        }
        chart
            .draw_series(series.points.iter().map(|p| {
                Circle::new(
                    (p.reference.nominal, p.delta()),
                    style.marker_size,
                    color.filled(),
                )
            }))?
            .label(series.label.clone())
            .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
        chart.draw_series(series.points.iter().map(|p| {
            Circle::new(
                (p.reference.nominal, p.delta()),
                style.marker_size,
                WHITE.stroke_width(1),
            )
        }))?;
    }

    tag(&mut chart, &panel.tag, x, y, (0.08, 0.88))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Pressure-temperature coverage of the datasets over the mantle geotherm.
pub fn distribution_figure<P: AsRef<Path>>(
    series: &[DistributionSeries],
    style: &PlotStyle,
    path: P,
) -> PlotResult {
    let path = path.as_ref();
    let root = BitMapBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE)?;

    let x = style.x_range.unwrap_or_else(|| {
        utils::padded_extent(series.iter().flat_map(|s| s.pressures.iter().map(|p| p.nominal)), 0.05)
    });
    let y = style.y_range.unwrap_or_else(|| {
        utils::padded_extent(series.iter().flat_map(|s| s.temperatures.iter().map(|t| t.nominal)), 0.05)
    });

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x.0..x.1, y.0..y.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("Pressure (GPa)")
        .y_desc("Temperature (K)")
        .draw()?;

    // lower-mantle geotherm, 660 km to the core-mantle boundary
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(24.0, 1873.0), (135.0, 2505.0)],
        BLACK.mix(0.3).stroke_width(15),
    )))?;

    for s in series {
        let color = material_color(s.material);
        let markers = chart.draw_series(s.pressures.iter().zip(&s.temperatures).map(|(p, t)| {
            Circle::new((p.nominal, t.nominal), style.marker_size, color.stroke_width(1))
        }))?;
        if !s.label.is_empty() {
            markers
                .label(s.label.clone())
                .legend(move |(x, y)| Circle::new((x, y), 5, color.stroke_width(1)));
        }
    }

    let top = utils::lerp(y.0, y.1, 0.97);
    let label = utils::lerp(y.0, y.1, 0.90);
    annotate(
        &mut chart,
        &[
            Annotation::new("660", (24.0, top), (24.0, label), Align::Center),
            Annotation::new("CMB", (135.0, top), (135.0, label), Align::Center),
        ],
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    log::info!("saved {}", path.display());
    Ok(())
}

/// One boundary curve in a boundary panel.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLine {
    /// Evaluated boundary.
    pub curve: BoundaryCurve,
    /// Calibration label, for logging.
    pub label: String,
    /// Draw translucent, for the calibration being superseded.
    pub faded: bool,
}

/// One subplot of the phase-boundary figure.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPanel {
    /// Corner tag.
    pub tag: String,
    /// Boundaries drawn in this panel.
    pub lines: Vec<BoundaryLine>,
    /// Labels with leader lines.
    pub annotations: Vec<Annotation>,
    /// Polygon shaded in grey, e.g. an experimental bracket.
    pub shaded: Option<Vec<(f64, f64)>>,
    /// Fixed temperature limits, or fit to the lines.
    pub y_range: Option<(f64, f64)>,
}

/// Side-by-side panels of phase boundaries under competing calibrations.
pub fn boundary_figure<P: AsRef<Path>>(panels: &[BoundaryPanel], size: (u32, u32), path: P) -> PlotResult {
    let path = path.as_ref();
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((1, panels.len().max(1)));

    for (panel, area) in panels.iter().zip(areas.iter()) {
        let pressures = panel
            .lines
            .iter()
            .flat_map(|l| l.curve.pressures.iter().map(|p| p.nominal))
            .chain(panel.annotations.iter().flat_map(|a| vec![a.at.0, a.text_at.0]));
        let x = utils::padded_extent(pressures, 0.08);
        let y = panel.y_range.unwrap_or_else(|| {
            utils::padded_extent(
                panel.lines.iter().flat_map(|l| l.curve.temperatures.iter().copied()),
                0.1,
            )
        });

        let mut chart = ChartBuilder::on(area)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x.0..x.1, y.0..y.1)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.0}", v))
            .x_desc("Pressure (GPa)")
            .y_desc("Temperature (K)")
            .draw()?;

        if let Some(poly) = &panel.shaded {
            chart.draw_series(std::iter::once(Polygon::new(
                poly.clone(),
                BLACK.mix(0.2).filled(),
            )))?;
        }

        for line in &panel.lines {
            log::debug!("panel {}: {}", panel.tag, line.label);
            let alpha = if line.faded { 0.3 } else { 1.0 };
            let color = material_color(line.curve.scale.material).mix(alpha);
            chart.draw_series(LineSeries::new(
                line.curve
                    .nominal()
                    .into_iter()
                    .zip(line.curve.temperatures.iter().copied()),
                color.stroke_width(4),
            ))?;
        }

        annotate(&mut chart, &panel.annotations)?;
        tag(&mut chart, &panel.tag, x, y, (0.05, 0.06))?;
    }

    root.present()?;
    log::info!("saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standards_have_fixed_colours() {
        let rgb = |m| {
            let c = material_color(m);
            (c.0, c.1, c.2)
        };
        assert_eq!(rgb(Material::Gold), (0, 0, 255));
        assert_eq!(rgb(Material::Platinum), (255, 0, 0));
        assert_eq!(rgb(Material::Periclase), (0, 0, 0));
    }

    use crate::compare::ComparisonPoint;
    use crate::measured::Measured;
    use crate::run::Series;
    use crate::scale::Scale;

    fn single_point_panel(tag: &str) -> PanelResult {
        PanelResult {
            tag: tag.to_string(),
            series: vec![Series {
                label: "Au".to_string(),
                material: Material::Gold,
                points: vec![ComparisonPoint {
                    reference: Measured::new(52.0, 0.4),
                    sample: Measured::new(51.1, 0.6),
                    pair: "Au".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn comparison_figure_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let one = dir.path().join("one.png");
        let style = PlotStyle::default().size(400, 300);
        comparison_figure(&[single_point_panel("a")], &style, &one).unwrap();
        assert!(one.exists());

        let four = dir.path().join("four.png");
        let panels: Vec<PanelResult> = ["a", "b", "c", "d"]
            .iter()
            .map(|t| single_point_panel(t))
            .collect();
        let style = PlotStyle::default().size(600, 450).reference_error(false);
        comparison_figure(&panels, &style, &four).unwrap();
        assert!(four.exists());
    }

    #[test]
    fn empty_figures_still_save() {
        let dir = tempfile::tempdir().unwrap();
        let compare = dir.path().join("compare.png");
        comparison_figure(&[], &PlotStyle::default().size(200, 150), &compare).unwrap();
        assert!(compare.exists());

        let boundaries = dir.path().join("boundaries.png");
        boundary_figure(&[], (200, 150), &boundaries).unwrap();
        assert!(boundaries.exists());
    }

    #[test]
    fn distribution_figure_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist.png");
        let series = vec![
            DistributionSeries {
                label: "Pt".to_string(),
                material: Material::Platinum,
                pressures: vec![Measured::new(40.0, 0.5), Measured::new(90.0, 1.0)],
                temperatures: vec![
                    Measured::new(1800.0, 100.0),
                    Measured::new(2400.0, 150.0),
                ],
            },
            DistributionSeries {
                label: String::new(),
                material: Material::Gold,
                pressures: vec![Measured::new(30.0, 0.2)],
                temperatures: vec![Measured::exact(300.0)],
            },
        ];
        let style = PlotStyle::default()
            .size(450, 300)
            .x_range(0.0, 145.0)
            .y_range(220.0, 3000.0);
        distribution_figure(&series, &style, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn boundary_figure_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boundaries.png");
        let curve = BoundaryCurve {
            scale: Scale::AU_DOROGOKUPETS2007,
            pressures: vec![Measured::exact(119.7), Measured::exact(109.6)],
            temperatures: vec![3500.0, 2000.0],
        };
        let panel = BoundaryPanel {
            tag: "b".to_string(),
            lines: vec![
                BoundaryLine {
                    curve: curve.clone(),
                    label: "Au-D07".to_string(),
                    faded: true,
                },
                BoundaryLine {
                    curve: curve.shifted(-2.5),
                    label: "Au-mD07".to_string(),
                    faded: false,
                },
            ],
            annotations: vec![Annotation::new(
                "Au-D07",
                (115.0, 2800.0),
                (112.0, 2800.0),
                Align::Right,
            )],
            shaded: Some(vec![
                (108.0, 2100.0),
                (110.0, 2100.0),
                (110.0, 2300.0),
                (108.0, 2300.0),
            ]),
            y_range: Some((1900.0, 3700.0)),
        };
        boundary_figure(&[panel], (500, 300), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn style_builder_sets_ranges() {
        let style = PlotStyle::default()
            .x_range(0.0, 160.0)
            .y_range(-8.0, 4.0)
            .reference_error(false);
        assert_eq!(style.x_range, Some((0.0, 160.0)));
        assert_eq!(style.y_range, Some((-8.0, 4.0)));
        assert!(!style.show_reference_error);
        assert_eq!(style.marker_size, 5);
    }
}
