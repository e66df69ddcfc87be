use pscales::prelude::*;

/// Compares Pt, Au and MgO scales at 300 K using the Ne-loaded cells.
/// Writes `f-Compare-300K.png`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let room = TemperatureSource::Fixed(300.0);
    let config = RunConfig::new()
        .dataset(Dataset::new(
            "Au",
            Material::Gold,
            Material::Periclase,
            "data/Au_MgO_Ne_300K.csv",
            room,
        ))
        .dataset(Dataset::new(
            "Pt",
            Material::Platinum,
            Material::Periclase,
            "data/Pt_MgO_Ne_300K.csv",
            room,
        ))
        .panels(Panel::comparison_set(&[
            Material::Periclase,
            Material::Gold,
            Material::Platinum,
        ])?)
        .style(
            PlotStyle::default()
                .size(1200, 900)
                .x_range(0.0, 140.0)
                .y_range(-5.0, 3.0)
                .marker_size(6),
        )
        .output("f-Compare-300K.png");

    let provider = GridProvider::new("data/scales");
    let panels = run::compare_datasets(&config, &provider)?;
    plot::comparison_figure(&panels, &config.style, &config.output)?;
    Ok(())
}
