use pscales::prelude::*;

/// Where each calibration puts the post-spinel and post-perovskite boundaries.
/// Prints boundary pressures and Clapeyron slopes beside the published values,
/// then writes `f-boundaries.png`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let provider = GridProvider::new("data/scales");
    let mut results = Vec::new();
    for check in boundary::checks() {
        let evaluated = boundary::evaluate_check(&provider, &check)?;
        println!(
            "{} ({}), {} at {} K / {} K",
            check.transition.name(),
            check.source,
            check.material(),
            check.temperatures[0],
            check.temperatures[1]
        );
        for (curve, published) in evaluated.iter().zip(&check.published) {
            println!(
                "  {:<8} {:>7.1} {:>7.1} GPa   published {:>6.1} {:>6.1}   slope {:.4} GPa/K",
                curve.scale.label(),
                curve.pressures[0].nominal,
                curve.pressures[1].nominal,
                published[0],
                published[1],
                curve.clapeyron_slope()?
            );
        }
        results.push((check, evaluated));
    }

    let find = |scale: Scale, transition: Transition| -> Result<BoundaryCurve, ScaleError> {
        results
            .iter()
            .filter(|(check, _)| check.transition == transition)
            .flat_map(|(_, evaluated)| evaluated.iter())
            .find(|c| c.scale == scale)
            .cloned()
            .ok_or_else(|| ScaleError::UnknownScale(format!("{} {}", transition.name(), scale)))
    };
    let line = |curve: BoundaryCurve, label: &str, faded: bool| BoundaryLine {
        curve,
        label: label.to_string(),
        faded,
    };

    let spinel = Transition::PostSpinel;
    let au_d07 = find(Scale::AU_DOROGOKUPETS2007, spinel)?;
    let post_spinel = BoundaryPanel {
        tag: "a".to_string(),
        lines: vec![
            line(au_d07.clone(), "Au-D07", true),
            line(au_d07.shifted(-2.5), "Au-mD07", false),
            line(find(Scale::PT_DOROGOKUPETS2007, spinel)?, "Pt-D07", false),
            line(find(Scale::MGO_SPEZIALE2001, spinel)?, "MgO-S01", true),
            line(find(Scale::MGO_DOROGOKUPETS2007, spinel)?, "MgO-D07", false),
        ],
        annotations: vec![
            Annotation::new("Au-D07", (25.7, 2100.0), (26.9, 2100.0), Align::Right),
            Annotation::new("Au-D07, corrected", (24.35, 1700.0), (24.8, 1700.0), Align::Left),
            Annotation::new("Pt-D07", (22.7, 2300.0), (23.1, 2300.0), Align::Left),
            Annotation::new("MgO-S01", (22.9, 2150.0), (22.5, 2250.0), Align::Right),
            Annotation::new("MgO-D07", (22.7, 1800.0), (22.3, 1800.0), Align::Right),
        ],
        shaded: Some(vec![
            (23.5, 1700.0),
            (24.0, 1700.0),
            (24.0, 2000.0),
            (23.5, 2000.0),
        ]),
        y_range: None,
    };

    let ppv = Transition::PostPerovskite;
    let post_perovskite = BoundaryPanel {
        tag: "b".to_string(),
        lines: vec![
            line(find(Scale::AU_TSUCHIYA2003, ppv)?, "Au-T04", true),
            line(find(Scale::AU_DOROGOKUPETS2007, ppv)?, "Au-D07", false),
            line(find(Scale::PT_HOLMES1989, ppv)?, "Pt-H89", true),
            line(find(Scale::PT_DOROGOKUPETS2007, ppv)?, "Pt-D07", false),
            line(find(Scale::MGO_SPEZIALE2001, ppv)?, "MgO-S01", true),
            line(find(Scale::MGO_DOROGOKUPETS2007, ppv)?, "MgO-D07", false),
        ],
        annotations: vec![
            Annotation::new("Au-T04", (120.0, 3400.0), (122.0, 3400.0), Align::Left),
            Annotation::new("Au-D07", (119.0, 3400.0), (117.0, 3400.0), Align::Right),
            Annotation::new("Pt-H89", (129.0, 2300.0), (132.0, 2300.0), Align::Left),
            Annotation::new("Pt-D07", (124.0, 2150.0), (123.7, 2300.0), Align::Center),
            Annotation::new("MgO-S01", (132.0, 3250.0), (132.2, 3550.0), Align::Left),
            Annotation::new("MgO-D07", (128.0, 3400.0), (128.0, 3550.0), Align::Center),
        ],
        shaded: None,
        y_range: Some((1900.0, 3700.0)),
    };

    plot::boundary_figure(
        &[post_spinel, post_perovskite],
        (1500, 525),
        "f-boundaries.png",
    )?;
    Ok(())
}
