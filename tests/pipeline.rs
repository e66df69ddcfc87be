use approx::assert_relative_eq;
use pscales::prelude::*;
use std::fmt::Write as _;
use std::path::Path;
use tempfile::TempDir;

const VOLUMES: [f64; 5] = [40.0, 50.0, 60.0, 70.0, 80.0];
const TEMPERATURES: [f64; 4] = [0.0, 1000.0, 2000.0, 3000.0];

/// Pressure planes, exact under bilinear interpolation: (P0, dP/dV, dP/dT).
fn plane(scale: Scale) -> (f64, f64, f64) {
    let shift = Scale::available(scale.material)
        .iter()
        .position(|s| *s == scale)
        .unwrap() as f64;
    match scale.material {
        Material::Periclase => (300.0 + shift, -4.0, 0.005),
        Material::Gold => (330.0 - shift, -4.5, 0.006),
        _ => (310.0, -4.2, 0.007 + shift * 0.001),
    }
}

fn write_grid(dir: &Path, scale: Scale) {
    let (p0, dv, dt) = plane(scale);
    let mut csv = String::from("V,T,P\n");
    for v in &VOLUMES {
        for t in &TEMPERATURES {
            writeln!(csv, "{},{},{}", v, t, p0 + dv * v + dt * t).unwrap();
        }
    }
    let provider = GridProvider::new(dir);
    std::fs::write(provider.path(scale), csv).unwrap();
}

fn scratch() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for material in &[Material::Periclase, Material::Gold, Material::Platinum] {
        for scale in Scale::available(*material) {
            write_grid(dir.path(), *scale);
        }
    }
    std::fs::write(
        dir.path().join("Au_MgO_HiT.csv"),
        "V(Au),sV(Au),V(MgO),sV(MgO),T,sT\n\
         62.0,0.02,70.0,0.03,1500,100\n\
         58.5,0.03,64.5,0.04,2200,150\n\
         55.0,0.01,60.0,0.02,2600,120\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("Pt_MgO_Ne_300K.csv"),
        "V(Pt),sV(Pt),V(MgO),sV(MgO),V(Ne),sV(Ne)\n\
         58.0,0.01,71.0,0.02,18.0,0.02\n\
         52.0,0.02,62.0,0.03,14.0,0.03\n",
    )
    .unwrap();
    dir
}

fn config(dir: &Path) -> RunConfig {
    RunConfig::new()
        .dataset(Dataset::new(
            "Au",
            Material::Gold,
            Material::Periclase,
            dir.join("Au_MgO_HiT.csv"),
            TemperatureSource::Columns,
        ))
        .dataset(Dataset::new(
            "Pt",
            Material::Platinum,
            Material::Periclase,
            dir.join("Pt_MgO_Ne_300K.csv"),
            TemperatureSource::Fixed(300.0),
        ))
        .panels(
            Panel::comparison_set(&[Material::Periclase, Material::Gold, Material::Platinum])
                .unwrap(),
        )
}

#[test]
fn compares_every_panel_in_row_order() {
    let dir = scratch();
    let provider = GridProvider::new(dir.path());
    let panels = run::compare_datasets(&config(dir.path()), &provider).unwrap();
    assert_eq!(panels.len(), 4);

    let rows = [(62.0, 70.0, 1500.0), (58.5, 64.5, 2200.0), (55.0, 60.0, 2600.0)];
    for (i, panel) in panels.iter().enumerate() {
        assert_eq!(panel.series.len(), 2);
        let gold = &panel.series[0];
        assert_eq!(gold.label, "Au");
        assert_eq!(gold.points.len(), rows.len());
        let (m0, mv, mt) = plane(Scale::comparison_set(Material::Periclase).unwrap()[i]);
        let (a0, av, at) = plane(Scale::comparison_set(Material::Gold).unwrap()[i]);
        for (point, (v_au, v_mgo, t)) in gold.points.iter().zip(&rows) {
            let p_mgo = m0 + mv * v_mgo + mt * t;
            let p_au = a0 + av * v_au + at * t;
            assert_relative_eq!(point.reference.nominal, p_mgo, epsilon = 1e-9);
            assert_relative_eq!(point.delta(), p_au - p_mgo, epsilon = 1e-9);
        }
    }
}

#[test]
fn comparison_keeps_both_errors() {
    let dir = scratch();
    let provider = GridProvider::new(dir.path());
    let panels = run::compare_datasets(&config(dir.path()), &provider).unwrap();
    let first = &panels[0].series[0].points[0];
    // MgO: |dP/dV| 4 * 0.03, dP/dT 0.005 * 100; Au: 4.5 * 0.02, 0.006 * 100
    assert_relative_eq!(first.reference_error(), (0.12f64).hypot(0.5), epsilon = 1e-9);
    assert_relative_eq!(first.sample_error(), (0.09f64).hypot(0.6), epsilon = 1e-9);

    // room-temperature rows carry volume error only
    let pt = &panels[0].series[1].points[1];
    assert_relative_eq!(pt.sample_error(), 4.2 * 0.02, epsilon = 1e-9);
}

#[test]
fn missing_volume_column_stops_the_run() {
    let dir = scratch();
    let provider = GridProvider::new(dir.path());
    let config = RunConfig::new()
        .dataset(Dataset::new(
            "Pt",
            Material::Platinum,
            Material::Periclase,
            dir.path().join("Au_MgO_HiT.csv"),
            TemperatureSource::Columns,
        ))
        .panel(Panel::new(
            "a",
            &[Scale::MGO_SPEZIALE2001, Scale::PT_FEI2007],
        ));
    assert_eq!(
        run::compare_datasets(&config, &provider).unwrap_err(),
        ScaleError::MissingColumn("V(Pt)".to_string())
    );
}

#[test]
fn missing_table_stops_the_run() {
    let dir = scratch();
    let provider = GridProvider::new(dir.path());
    let config = config(dir.path()).dataset(Dataset::new(
        "Au",
        Material::Gold,
        Material::Periclase,
        dir.path().join("Au_MgO_Ne_300K.csv"),
        TemperatureSource::Fixed(300.0),
    ));
    assert!(matches!(
        run::compare_datasets(&config, &provider),
        Err(ScaleError::IoError(_))
    ));
}

#[test]
fn distribution_uses_reference_pressures() {
    let dir = scratch();
    let provider = GridProvider::new(dir.path());
    let config = config(dir.path());
    let series = run::distribution(&config, &provider).unwrap();
    assert_eq!(series.len(), 2);
    let (m0, mv, mt) = plane(Scale::MGO_SPEZIALE2001);
    assert_relative_eq!(series[0].pressures[1].nominal, m0 + mv * 64.5 + mt * 2200.0, epsilon = 1e-9);
    assert_eq!(series[1].temperatures, vec![Measured::exact(300.0); 2]);
}

#[test]
fn boundary_golden_values() {
    let dir = tempfile::tempdir().unwrap();
    let provider = GridProvider::new(dir.path());
    std::fs::write(
        provider.path(Scale::AU_DOROGOKUPETS2007),
        "V,T,P\n51.58,2000,109.6\n51.58,3500,119.7\n51.70,2000,108.9\n51.70,3500,119.0\n",
    )
    .unwrap();
    std::fs::write(
        provider.path(Scale::AU_TSUCHIYA2003),
        "V,T,P\n51.58,2000,111.2\n51.58,3500,120.4\n51.70,2000,110.5\n51.70,3500,119.7\n",
    )
    .unwrap();

    let model = provider.scale(Scale::AU_DOROGOKUPETS2007).unwrap();
    let p = model
        .cal_p(Measured::new(51.58, 0.0), Measured::exact(3500.0))
        .unwrap();
    assert_relative_eq!(p.nominal, 119.7, epsilon = 1e-12);
    assert_eq!(p.std_dev, 0.0);

    let check = boundary::checks()
        .into_iter()
        .find(|c| c.transition == Transition::PostPerovskite && c.material() == Material::Gold)
        .unwrap();
    let curves = boundary::evaluate_check(&provider, &check).unwrap();
    assert_eq!(curves[0].scale, Scale::AU_TSUCHIYA2003);
    for (curve, published) in curves.iter().zip(&check.published) {
        assert_relative_eq!(curve.pressures[0].nominal, published[0], epsilon = 1e-9);
        assert_relative_eq!(curve.pressures[1].nominal, published[1], epsilon = 1e-9);
    }
    assert_relative_eq!(curves[1].clapeyron_slope().unwrap(), 10.8 / 1500.0, epsilon = 1e-9);
}
