/*!
* # pscales - Comparing pressure scales for the lower mantle.
* Pressure in high-pressure experiments is read off the unit-cell volume of a standard material
* (platinum, gold or periclase) through one of several published equations of state.  When two
* standards are loaded together in the same sample chamber they experience the same pressure and
* temperature, so any difference in the pressures their scales return is a disagreement between
* the calibrations themselves.
*
* This crate reproduces the comparisons of Ye et al. (2017, JGR): it loads tabulated volumes of
* co-loaded Pt-MgO and Au-MgO assemblages, evaluates each standard under the competing
* calibrations, and plots the pressure differences.  Phase boundaries (post-perovskite,
* post-spinel) serve as an independent check.
*
* The equations of state are supplied by an external provider through the
* [PressureScale](scale/trait.PressureScale.html) trait.  The bundled
* [GridProvider](grid/struct.GridProvider.html) reads P(V, T) tables exported from an
* equation-of-state library.
*
*  ## Quick Start
*
*  - Load the crate prelude in the preamble of your `main.rs`.
*  - Describe the run, then load, evaluate and plot:
* ```rust,no_run
* use pscales::prelude::*;
*
* fn main() -> Result<(), Box<dyn std::error::Error>> {
*     let config = RunConfig::new()
*         .dataset(Dataset::new(
*             "Pt",
*             Material::Platinum,
*             Material::Periclase,
*             "data/Pt_MgO_HiT.csv",
*             TemperatureSource::Columns,
*         ))
*         .panels(Panel::comparison_set(&[Material::Periclase, Material::Platinum])?)
*         .output("f-Compare.png");
*
*     let provider = GridProvider::new("data/scales");
*     let panels = run::compare_datasets(&config, &provider)?;
*     plot::comparison_figure(&panels, &config.style, &config.output)?;
*     Ok(())
* }
* ```
*/

#![warn(missing_docs)]
pub mod boundary;
pub mod compare;
pub mod errors;
pub mod evaluate;
pub mod grid;
pub mod material;
pub mod measured;
pub mod plot;
pub mod run;
pub mod scale;
pub mod table;
pub mod utils;

pub mod prelude {
    //! Common imports for the figure programs.
    pub use crate::boundary::{self, BoundaryCheck, BoundaryCurve, Transition};
    pub use crate::compare::ComparisonPoint;
    pub use crate::errors::ScaleError;
    pub use crate::grid::{GridProvider, GridScale};
    pub use crate::material::Material;
    pub use crate::measured::Measured;
    pub use crate::plot::{self, Align, Annotation, BoundaryLine, BoundaryPanel, PlotStyle};
    pub use crate::run::{self, Dataset, Panel, RunConfig};
    pub use crate::scale::{Calibration, PressureScale, Scale, ScaleProvider};
    pub use crate::table::{Table, TemperatureSource};
}
