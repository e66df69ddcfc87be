//! A nominal value paired with its standard deviation.
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Best estimate plus one standard deviation.
///
/// Arithmetic between two `Measured` values treats them as independent, so
/// standard deviations add in quadrature.  Arithmetic with a plain `f64`
/// treats the float as exact.
///
/// # Examples
///
/// ```rust
/// use pscales::measured::Measured;
///
/// let a = Measured::new(10.0, 3.0);
/// let b = Measured::new(4.0, 4.0);
/// let c = a - b;
/// assert_eq!(c.nominal, 6.0);
/// assert!((c.std_dev - 5.0).abs() < 1e-12);
///
/// let shifted = a - 2.5;
/// assert_eq!(shifted.nominal, 7.5);
/// assert_eq!(shifted.std_dev, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    /// Best estimate.
    pub nominal: f64,
    /// One standard deviation.
    pub std_dev: f64,
}

impl Measured {
    /// Pair a nominal value with its standard deviation.
    pub fn new(nominal: f64, std_dev: f64) -> Self {
        Measured { nominal, std_dev }
    }

    /// A value without uncertainty.
    pub fn exact(nominal: f64) -> Self {
        Measured {
            nominal,
            std_dev: 0.0,
        }
    }

    /// Pair two equally long columns of nominal values and deviations.
    pub fn zip(nominals: &[f64], std_devs: &[f64]) -> Vec<Measured> {
        nominals
            .iter()
            .zip(std_devs)
            .map(|(n, s)| Measured::new(*n, *s))
            .collect()
    }
}

/// Nominal values of a slice of measurements.
pub fn nominal_values(x: &[Measured]) -> Vec<f64> {
    x.iter().map(|m| m.nominal).collect()
}

/// Standard deviations of a slice of measurements.
pub fn std_devs(x: &[Measured]) -> Vec<f64> {
    x.iter().map(|m| m.std_dev).collect()
}

impl fmt::Display for Measured {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}+/-{:.*}", p, self.nominal, p, self.std_dev),
            None => write!(f, "{}+/-{}", self.nominal, self.std_dev),
        }
    }
}

impl Add for Measured {
    type Output = Measured;

    fn add(self, rhs: Measured) -> Measured {
        Measured::new(
            self.nominal + rhs.nominal,
            self.std_dev.hypot(rhs.std_dev),
        )
    }
}

impl Sub for Measured {
    type Output = Measured;

    fn sub(self, rhs: Measured) -> Measured {
        Measured::new(
            self.nominal - rhs.nominal,
            self.std_dev.hypot(rhs.std_dev),
        )
    }
}

impl Add<f64> for Measured {
    type Output = Measured;

    fn add(self, rhs: f64) -> Measured {
        Measured::new(self.nominal + rhs, self.std_dev)
    }
}

impl Sub<f64> for Measured {
    type Output = Measured;

    fn sub(self, rhs: f64) -> Measured {
        Measured::new(self.nominal - rhs, self.std_dev)
    }
}

impl Mul<f64> for Measured {
    type Output = Measured;

    fn mul(self, rhs: f64) -> Measured {
        Measured::new(self.nominal * rhs, self.std_dev * rhs.abs())
    }
}

impl Neg for Measured {
    type Output = Measured;

    fn neg(self) -> Measured {
        Measured::new(-self.nominal, self.std_dev)
    }
}
