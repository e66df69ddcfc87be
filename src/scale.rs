//! Registry of published pressure calibrations and the interface used to evaluate them.
//!
//! The equations of state themselves live with an external provider.  This module names the
//! calibrations compared in the figures and defines the seam ([PressureScale], [ScaleProvider])
//! through which a provider is called.
use crate::errors::{Result, ScaleError};
use crate::material::Material;
use crate::measured::Measured;
use std::fmt;

/// A published parameterization, identified by author and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calibration {
    /// Speziale et al. (2001).
    Speziale2001,
    /// Dorogokupets & Oganov (2007).
    Dorogokupets2007,
    /// Tange et al. (2009).
    Tange2009,
    /// Dorogokupets et al. (2015).
    Dorogokupets2015,
    /// Fei et al. (2007), third-order Birch-Murnaghan form.
    Fei2007bm3,
    /// Yokoo et al. (2009).
    Yokoo2009,
    /// Tsuchiya (2003).
    Tsuchiya2003,
    /// Holmes et al. (1989).
    Holmes1989,
}

impl Calibration {
    /// Full name, as used in exported table file names.
    pub fn name(&self) -> &'static str {
        match self {
            Calibration::Speziale2001 => "Speziale2001",
            Calibration::Dorogokupets2007 => "Dorogokupets2007",
            Calibration::Tange2009 => "Tange2009",
            Calibration::Dorogokupets2015 => "Dorogokupets2015",
            Calibration::Fei2007bm3 => "Fei2007bm3",
            Calibration::Yokoo2009 => "Yokoo2009",
            Calibration::Tsuchiya2003 => "Tsuchiya2003",
            Calibration::Holmes1989 => "Holmes1989",
        }
    }

    /// Author initial and two-digit year, e.g. `D07`.
    pub fn tag(&self) -> &'static str {
        match self {
            Calibration::Speziale2001 => "S01",
            Calibration::Dorogokupets2007 => "D07",
            Calibration::Tange2009 => "T09",
            Calibration::Dorogokupets2015 => "D15",
            Calibration::Fei2007bm3 => "F07",
            Calibration::Yokoo2009 => "Y09",
            Calibration::Tsuchiya2003 => "T04",
            Calibration::Holmes1989 => "H89",
        }
    }
}

/// One calibration of one reference material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    /// Reference material.
    pub material: Material,
    /// Published parameterization.
    pub calibration: Calibration,
}

const fn scale(material: Material, calibration: Calibration) -> Scale {
    Scale {
        material,
        calibration,
    }
}

impl Scale {
    /// Periclase, Speziale et al. (2001).
    pub const MGO_SPEZIALE2001: Scale = scale(Material::Periclase, Calibration::Speziale2001);
    /// Periclase, Dorogokupets & Oganov (2007).
    pub const MGO_DOROGOKUPETS2007: Scale =
        scale(Material::Periclase, Calibration::Dorogokupets2007);
    /// Periclase, Tange et al. (2009).
    pub const MGO_TANGE2009: Scale = scale(Material::Periclase, Calibration::Tange2009);
    /// Periclase, Dorogokupets et al. (2015).
    pub const MGO_DOROGOKUPETS2015: Scale =
        scale(Material::Periclase, Calibration::Dorogokupets2015);

    /// Gold, Fei et al. (2007).
    pub const AU_FEI2007: Scale = scale(Material::Gold, Calibration::Fei2007bm3);
    /// Gold, Dorogokupets & Oganov (2007).
    pub const AU_DOROGOKUPETS2007: Scale = scale(Material::Gold, Calibration::Dorogokupets2007);
    /// Gold, Yokoo et al. (2009).
    pub const AU_YOKOO2009: Scale = scale(Material::Gold, Calibration::Yokoo2009);
    /// Gold, Dorogokupets et al. (2015).
    pub const AU_DOROGOKUPETS2015: Scale = scale(Material::Gold, Calibration::Dorogokupets2015);
    /// Gold, Tsuchiya (2003).
    pub const AU_TSUCHIYA2003: Scale = scale(Material::Gold, Calibration::Tsuchiya2003);

    /// Platinum, Fei et al. (2007).
    pub const PT_FEI2007: Scale = scale(Material::Platinum, Calibration::Fei2007bm3);
    /// Platinum, Dorogokupets & Oganov (2007).
    pub const PT_DOROGOKUPETS2007: Scale =
        scale(Material::Platinum, Calibration::Dorogokupets2007);
    /// Platinum, Yokoo et al. (2009).
    pub const PT_YOKOO2009: Scale = scale(Material::Platinum, Calibration::Yokoo2009);
    /// Platinum, Dorogokupets et al. (2015).
    pub const PT_DOROGOKUPETS2015: Scale =
        scale(Material::Platinum, Calibration::Dorogokupets2015);
    /// Platinum, Holmes et al. (1989).
    pub const PT_HOLMES1989: Scale = scale(Material::Platinum, Calibration::Holmes1989);

    /// Look up a registered calibration.
    pub fn new(material: Material, calibration: Calibration) -> Result<Scale> {
        Scale::available(material)
            .iter()
            .copied()
            .find(|s| s.calibration == calibration)
            .ok_or_else(|| {
                ScaleError::UnknownScale(format!("{}-{}", material.symbol(), calibration.name()))
            })
    }

    /// Every calibration registered for `material`.  The first four are the
    /// comparison set, see [comparison_set](#method.comparison_set).
    pub fn available(material: Material) -> &'static [Scale] {
        match material {
            Material::Periclase => &[
                Scale::MGO_SPEZIALE2001,
                Scale::MGO_DOROGOKUPETS2007,
                Scale::MGO_TANGE2009,
                Scale::MGO_DOROGOKUPETS2015,
            ],
            Material::Gold => &[
                Scale::AU_FEI2007,
                Scale::AU_DOROGOKUPETS2007,
                Scale::AU_YOKOO2009,
                Scale::AU_DOROGOKUPETS2015,
                Scale::AU_TSUCHIYA2003,
            ],
            Material::Platinum => &[
                Scale::PT_FEI2007,
                Scale::PT_DOROGOKUPETS2007,
                Scale::PT_YOKOO2009,
                Scale::PT_DOROGOKUPETS2015,
                Scale::PT_HOLMES1989,
            ],
            Material::Neon => &[],
        }
    }

    /// The four calibrations compared panel by panel: panel `i` pairs entry `i`
    /// of every material.
    pub fn comparison_set(material: Material) -> Result<[Scale; 4]> {
        match Scale::available(material) {
            [a, b, c, d, ..] => Ok([*a, *b, *c, *d]),
            _ => Err(ScaleError::UnknownScale(format!(
                "comparison set for {}",
                material
            ))),
        }
    }

    /// Short plot label, e.g. `Au-D07`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.material.symbol(), self.calibration.tag())
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An equation-of-state model that turns volume and temperature into pressure.
///
/// Volumes are unit-cell volumes in cubic angstroms, temperatures in kelvin,
/// pressures in GPa.
pub trait PressureScale {
    /// The calibration this model implements.
    fn scale(&self) -> Scale;

    /// Pressure at one volume and temperature, with the uncertainty of both inputs forwarded.
    fn cal_p(&self, volume: Measured, temperature: Measured) -> Result<Measured>;

    /// Pressure at many points.  Output order matches input order.
    fn cal_p_many(&self, volumes: &[Measured], temperatures: &[Measured]) -> Result<Vec<Measured>> {
        if volumes.len() != temperatures.len() {
            return Err(ScaleError::LengthMismatch {
                expected: volumes.len(),
                found: temperatures.len(),
            });
        }
        volumes
            .iter()
            .zip(temperatures)
            .map(|(v, t)| self.cal_p(*v, *t))
            .collect()
    }
}

/// Source of [PressureScale] models, keyed by [Scale].
pub trait ScaleProvider {
    /// Resolve a calibration to a model.
    fn scale(&self, scale: Scale) -> Result<Box<dyn PressureScale>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linear(Scale);

    impl PressureScale for Linear {
        fn scale(&self) -> Scale {
            self.0
        }

        fn cal_p(&self, volume: Measured, temperature: Measured) -> Result<Measured> {
            Ok(Measured::new(
                100.0 - volume.nominal + 0.01 * temperature.nominal,
                volume.std_dev,
            ))
        }
    }

    #[test]
    fn comparison_sets_hold_four_per_standard() {
        let mgo = Scale::comparison_set(Material::Periclase).unwrap();
        let au = Scale::comparison_set(Material::Gold).unwrap();
        let pt = Scale::comparison_set(Material::Platinum).unwrap();
        assert_eq!(mgo[0], Scale::MGO_SPEZIALE2001);
        assert_eq!(au[1], Scale::AU_DOROGOKUPETS2007);
        assert_eq!(pt[3], Scale::PT_DOROGOKUPETS2015);
        assert!(Scale::comparison_set(Material::Neon).is_err());
    }

    #[test]
    fn unregistered_combinations_are_rejected() {
        assert_eq!(
            Scale::new(Material::Gold, Calibration::Tsuchiya2003).unwrap(),
            Scale::AU_TSUCHIYA2003
        );
        match Scale::new(Material::Periclase, Calibration::Holmes1989) {
            Err(ScaleError::UnknownScale(name)) => assert_eq!(name, "MgO-Holmes1989"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn labels_use_short_tags() {
        assert_eq!(Scale::PT_HOLMES1989.label(), "Pt-H89");
        assert_eq!(Scale::MGO_SPEZIALE2001.to_string(), "MgO-S01");
    }

    #[test]
    fn many_rejects_unpaired_inputs() {
        let model = Linear(Scale::AU_FEI2007);
        let v = vec![Measured::exact(60.0); 3];
        let t = vec![Measured::exact(300.0); 2];
        assert_eq!(
            model.cal_p_many(&v, &t),
            Err(ScaleError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn many_preserves_order() {
        let model = Linear(Scale::AU_FEI2007);
        let v = Measured::zip(&[60.0, 50.0, 55.0], &[0.0; 3]);
        let t = vec![Measured::exact(0.0); 3];
        let p = model.cal_p_many(&v, &t).unwrap();
        let nominal: Vec<f64> = p.iter().map(|m| m.nominal).collect();
        assert_eq!(nominal, vec![40.0, 50.0, 45.0]);
    }
}
