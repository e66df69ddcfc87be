use pscales::prelude::*;

/// Compares Pt, Au and MgO scales at lower-mantle temperatures.
/// Writes `f-Compare-HighT.png`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let config = RunConfig::new()
        .dataset(Dataset::new(
            "Au",
            Material::Gold,
            Material::Periclase,
            "data/Au_MgO_HiT.csv",
            TemperatureSource::Columns,
        ))
        .dataset(Dataset::new(
            "Pt",
            Material::Platinum,
            Material::Periclase,
            "data/Pt_MgO_HiT.csv",
            TemperatureSource::Columns,
        ))
        .panels(Panel::comparison_set(&[
            Material::Periclase,
            Material::Gold,
            Material::Platinum,
        ])?)
        .style(
            PlotStyle::default()
                .size(1200, 900)
                .x_range(0.0, 160.0)
                .y_range(-8.0, 4.0)
                .marker_size(6)
                .reference_error(false),
        )
        .output("f-Compare-HighT.png");

    let provider = GridProvider::new("data/scales");
    let panels = run::compare_datasets(&config, &provider)?;
    for panel in &panels {
        for series in &panel.series {
            let mean = series.points.iter().map(|p| p.delta()).sum::<f64>()
                / series.points.len().max(1) as f64;
            log::info!("panel {}: mean {} offset {:.2} GPa", panel.tag, series.label, mean);
        }
    }
    plot::comparison_figure(&panels, &config.style, &config.output)?;
    Ok(())
}
