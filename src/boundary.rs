//! Phase boundaries as independent checks on pressure-scale consistency.
//!
//! A boundary location is reported as the unit-cell volume of the pressure
//! standard at two temperatures.  Re-evaluating those volumes with a different
//! calibration moves the boundary; comparing where each calibration puts it,
//! and the Clapeyron slope it implies, shows whether a disagreement between
//! experiments is a pressure-scale artifact.
use crate::errors::{Result, ScaleError};
use crate::evaluate;
use crate::material::Material;
use crate::measured::Measured;
use crate::scale::{Scale, ScaleProvider};

/// Mineral phase transitions used as checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Bridgmanite to post-perovskite, near the core-mantle boundary.
    PostPerovskite,
    /// Ringwoodite to bridgmanite plus periclase, at the 660 km discontinuity.
    PostSpinel,
}

impl Transition {
    /// Short name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Transition::PostPerovskite => "PPv",
            Transition::PostSpinel => "post-spinel",
        }
    }
}

/// Volumes of one pressure standard along a reported phase boundary, with the
/// pressures the publication gave for them.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCheck {
    /// Transition observed.
    pub transition: Transition,
    /// Study that reported the boundary.
    pub source: &'static str,
    /// Unit-cell volumes of the standard on the boundary.
    pub volumes: [f64; 2],
    /// Temperatures of the two boundary points.
    pub temperatures: [f64; 2],
    /// Calibration used in the study, then the calibration it is checked against.
    pub scales: [Scale; 2],
    /// Published pressures (GPa) for each entry of `scales`.
    pub published: [[f64; 2]; 2],
}

impl BoundaryCheck {
    /// Material of the pressure standard.
    pub fn material(&self) -> Material {
        self.scales[0].material
    }
}

/// Every boundary check from the post-perovskite and post-spinel literature.
pub fn checks() -> Vec<BoundaryCheck> {
    let ppv_t = [3500.0, 2000.0];
    vec![
        BoundaryCheck {
            transition: Transition::PostPerovskite,
            source: "Tateno2009",
            volumes: [51.58, 51.7],
            temperatures: ppv_t,
            scales: [Scale::AU_TSUCHIYA2003, Scale::AU_DOROGOKUPETS2007],
            published: [[120.4, 110.5], [119.7, 108.9]],
        },
        BoundaryCheck {
            transition: Transition::PostPerovskite,
            source: "Tateno2009",
            volumes: [48.06, 48.09],
            temperatures: ppv_t,
            scales: [Scale::PT_HOLMES1989, Scale::PT_DOROGOKUPETS2007],
            published: [[137.7, 126.8], [135.2, 123.2]],
        },
        BoundaryCheck {
            transition: Transition::PostPerovskite,
            source: "Tateno2009",
            volumes: [52.87, 53.6],
            temperatures: ppv_t,
            scales: [Scale::MGO_SPEZIALE2001, Scale::MGO_DOROGOKUPETS2007],
            published: [[135.6, 115.8], [129.6, 113.2]],
        },
        BoundaryCheck {
            transition: Transition::PostSpinel,
            source: "Fei2004",
            volumes: [68.75, 70.3],
            temperatures: [1573.0, 2173.0],
            scales: [Scale::MGO_SPEZIALE2001, Scale::MGO_DOROGOKUPETS2007],
            published: [[23.6, 22.8], [23.1, 22.0]],
        },
        BoundaryCheck {
            transition: Transition::PostSpinel,
            source: "Ye2014",
            volumes: [57.43, 58.85],
            temperatures: [1550.0, 2380.0],
            scales: [Scale::PT_FEI2007, Scale::PT_DOROGOKUPETS2007],
            published: [[25.2, 23.2], [24.6, 22.5]],
        },
        BoundaryCheck {
            transition: Transition::PostSpinel,
            source: "Ye2014",
            volumes: [62.33, 63.53],
            temperatures: [1650.0, 2150.0],
            scales: [Scale::AU_FEI2007, Scale::AU_DOROGOKUPETS2007],
            published: [[28.3, 27.1], [27.0, 25.6]],
        },
    ]
}

/// Boundary pressures under one calibration.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCurve {
    /// Calibration used.
    pub scale: Scale,
    /// Pressure at each boundary point.
    pub pressures: Vec<Measured>,
    /// Temperature of each boundary point.
    pub temperatures: Vec<f64>,
}

impl BoundaryCurve {
    /// Clapeyron slope dP/dT (GPa/K) between the first two points.
    pub fn clapeyron_slope(&self) -> Result<f64> {
        match (&self.pressures[..], &self.temperatures[..]) {
            ([p0, p1, ..], [t0, t1, ..]) => Ok((p0.nominal - p1.nominal) / (t0 - t1)),
            _ => Err(ScaleError::LengthMismatch {
                expected: 2,
                found: self.pressures.len().min(self.temperatures.len()),
            }),
        }
    }

    /// The same boundary with every pressure moved by `offset` GPa.
    pub fn shifted(&self, offset: f64) -> BoundaryCurve {
        BoundaryCurve {
            scale: self.scale,
            pressures: self.pressures.iter().map(|p| *p + offset).collect(),
            temperatures: self.temperatures.clone(),
        }
    }

    /// Nominal pressures.
    pub fn nominal(&self) -> Vec<f64> {
        crate::measured::nominal_values(&self.pressures)
    }
}

/// Evaluate a check under both of its calibrations.
pub fn evaluate_check(provider: &dyn ScaleProvider, check: &BoundaryCheck) -> Result<Vec<BoundaryCurve>> {
    check
        .scales
        .iter()
        .map(|scale| {
            let model = provider.scale(*scale)?;
            let pressures = evaluate::pressures_at(model.as_ref(), &check.volumes, &check.temperatures)?;
            log::info!(
                "{} ({}) with {}: {:.1} GPa at {} K, {:.1} GPa at {} K",
                check.transition.name(),
                check.source,
                scale,
                pressures[0].nominal,
                check.temperatures[0],
                pressures[1].nominal,
                check.temperatures[1]
            );
            Ok(BoundaryCurve {
                scale: *scale,
                pressures,
                temperatures: check.temperatures.to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve(p: &[f64], t: &[f64]) -> BoundaryCurve {
        BoundaryCurve {
            scale: Scale::AU_DOROGOKUPETS2007,
            pressures: p.iter().map(|x| Measured::exact(*x)).collect(),
            temperatures: t.to_vec(),
        }
    }

    #[test]
    fn slope_from_two_points() {
        let c = curve(&[120.4, 110.5], &[3500.0, 2000.0]);
        assert_relative_eq!(c.clapeyron_slope().unwrap(), 0.0066, epsilon = 1e-12);
    }

    #[test]
    fn negative_slope_for_post_spinel() {
        let c = curve(&[27.0, 25.6], &[1650.0, 2150.0]);
        assert!(c.clapeyron_slope().unwrap() < 0.0);
    }

    #[test]
    fn slope_needs_two_points() {
        assert!(curve(&[1.0], &[300.0]).clapeyron_slope().is_err());
    }

    #[test]
    fn shift_moves_pressure_only() {
        let c = curve(&[27.0, 25.6], &[1650.0, 2150.0]).shifted(-2.5);
        assert_relative_eq!(c.nominal()[0], 24.5);
        assert_relative_eq!(c.nominal()[1], 23.1, epsilon = 1e-12);
        assert_eq!(c.temperatures, vec![1650.0, 2150.0]);
        assert!(c.clapeyron_slope().unwrap() < 0.0);
    }

    #[test]
    fn checks_pair_same_material() {
        for check in checks() {
            assert_eq!(check.scales[0].material, check.scales[1].material);
            assert_eq!(check.scales[1].calibration, crate::scale::Calibration::Dorogokupets2007);
        }
        assert_eq!(
            checks()
                .iter()
                .filter(|c| c.transition == Transition::PostSpinel)
                .count(),
            3
        );
    }
}
