use pscales::prelude::*;

/// Pressure-temperature conditions of the Pt-MgO and Au-MgO datasets, all on the
/// Dorogokupets & Oganov (2007) scales.  Writes `f-DataDist.png`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let room = TemperatureSource::Fixed(300.0);
    let config = RunConfig::new()
        .dataset(Dataset::new(
            "Au+MgO",
            Material::Gold,
            Material::Periclase,
            "data/Au_MgO_HiT.csv",
            TemperatureSource::Columns,
        ))
        .dataset(Dataset::new(
            "Pt+MgO",
            Material::Platinum,
            Material::Periclase,
            "data/Pt_MgO_HiT.csv",
            TemperatureSource::Columns,
        ))
        .dataset(Dataset::new(
            "",
            Material::Gold,
            Material::Periclase,
            "data/Au_MgO_Ne_300K.csv",
            room,
        ))
        .dataset(Dataset::new(
            "",
            Material::Platinum,
            Material::Periclase,
            "data/Pt_MgO_Ne_300K.csv",
            room,
        ))
        .panel(Panel::new(
            "a",
            &[
                Scale::MGO_DOROGOKUPETS2007,
                Scale::AU_DOROGOKUPETS2007,
                Scale::PT_DOROGOKUPETS2007,
            ],
        ))
        .style(
            PlotStyle::default()
                .size(900, 600)
                .x_range(0.0, 145.0)
                .y_range(220.0, 3000.0)
                .marker_size(6),
        )
        .output("f-DataDist.png");

    let provider = GridProvider::new("data/scales");
    let series = run::distribution(&config, &provider)?;
    plot::distribution_figure(&series, &config.style, &config.output)?;
    Ok(())
}
