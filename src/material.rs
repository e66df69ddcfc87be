//! Materials measured together in a sample chamber.
use std::fmt;

/// A material whose unit-cell volume is tabulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Platinum pressure standard.
    Platinum,
    /// Gold pressure standard.
    Gold,
    /// Periclase (MgO).
    Periclase,
    /// Neon pressure medium.
    Neon,
}

impl Material {
    /// Chemical symbol used in table headers.
    pub fn symbol(&self) -> &'static str {
        match self {
            Material::Platinum => "Pt",
            Material::Gold => "Au",
            Material::Periclase => "MgO",
            Material::Neon => "Ne",
        }
    }

    /// Header of the unit-cell volume column, e.g. `V(Pt)`.
    pub fn volume_column(&self) -> String {
        format!("V({})", self.symbol())
    }

    /// Header of the volume uncertainty column, e.g. `sV(Pt)`.
    pub fn volume_error_column(&self) -> String {
        format!("sV({})", self.symbol())
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_follow_symbol() {
        assert_eq!(Material::Periclase.volume_column(), "V(MgO)");
        assert_eq!(Material::Gold.volume_error_column(), "sV(Au)");
        assert_eq!(Material::Neon.to_string(), "Ne");
    }
}
