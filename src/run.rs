//! Per-figure configuration and the load, evaluate, compare pipeline.
use crate::compare::{self, ComparisonPoint};
use crate::errors::{Result, ScaleError};
use crate::evaluate;
use crate::material::Material;
use crate::measured::Measured;
use crate::plot::PlotStyle;
use crate::scale::{PressureScale, Scale, ScaleProvider};
use crate::table::{SampleRecord, Table, TemperatureSource};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;

/// A table of volumes for a sample standard and a reference material loaded
/// together in one sample chamber.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Legend label, e.g. `Au`.
    pub label: String,
    /// Pressure standard whose scale is being tested.
    pub sample: Material,
    /// Material the sample is compared against.
    pub reference: Material,
    /// Csv file holding the volumes.
    pub path: PathBuf,
    /// Temperature of each row.
    pub temperature: TemperatureSource,
}

impl Dataset {
    /// Describe a co-loaded assemblage.
    pub fn new<P: Into<PathBuf>>(
        label: &str,
        sample: Material,
        reference: Material,
        path: P,
        temperature: TemperatureSource,
    ) -> Self {
        Dataset {
            label: label.to_string(),
            sample,
            reference,
            path: path.into(),
            temperature,
        }
    }
}

/// Calibrations used together in one subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Corner tag, e.g. `a`.
    pub tag: String,
    /// One calibration per material.
    pub scales: Vec<Scale>,
}

impl Panel {
    /// A panel using `scales`.
    pub fn new(tag: &str, scales: &[Scale]) -> Self {
        Panel {
            tag: tag.to_string(),
            scales: scales.to_vec(),
        }
    }

    /// Panels `a`, `b`, ... pairing entry `i` of each material's comparison set.
    pub fn comparison_set(materials: &[Material]) -> Result<Vec<Panel>> {
        let sets = materials
            .iter()
            .map(|m| Scale::comparison_set(*m))
            .collect::<Result<Vec<[Scale; 4]>>>()?;
        Ok(["a", "b", "c", "d"]
            .iter()
            .enumerate()
            .map(|(i, tag)| Panel {
                tag: tag.to_string(),
                scales: sets.iter().map(|set| set[i]).collect(),
            })
            .collect())
    }

    /// Calibration this panel uses for `material`.
    pub fn scale_for(&self, material: Material) -> Result<Scale> {
        self.scales
            .iter()
            .copied()
            .find(|s| s.material == material)
            .ok_or_else(|| {
                ScaleError::UnknownScale(format!("{} in panel {}", material, self.tag))
            })
    }
}

/// Everything one figure needs: inputs, calibrations, styling and output file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Tables to load.
    pub datasets: Vec<Dataset>,
    /// Subplots to draw.
    pub panels: Vec<Panel>,
    /// Figure styling.
    pub style: PlotStyle,
    /// Image file written.
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::new()
    }
}

impl RunConfig {
    /// Create a run using a builder pattern.  Add tables with [dataset](#method.dataset),
    /// subplots with [panel](#method.panel) or [panels](#method.panels).
    pub fn new() -> Self {
        RunConfig {
            datasets: Vec::new(),
            panels: Vec::new(),
            style: PlotStyle::default(),
            output: PathBuf::from("figure.png"),
        }
    }

    /// Add a table.
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Add a subplot.
    pub fn panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Add several subplots.
    pub fn panels(mut self, panels: Vec<Panel>) -> Self {
        self.panels.extend(panels);
        self
    }

    /// Set figure styling.
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the output image path.
    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = path.into();
        self
    }

    fn tables(&self) -> Result<Vec<Table>> {
        self.datasets.iter().map(|d| Table::read(&d.path)).collect()
    }
}

/// Comparison points of one dataset within a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Dataset label.
    pub label: String,
    /// Sample standard of the dataset, used for colouring.
    pub material: Material,
    /// One point per table row.
    pub points: Vec<ComparisonPoint>,
}

/// All series of one subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelResult {
    /// Corner tag.
    pub tag: String,
    /// One series per dataset.
    pub series: Vec<Series>,
}

/// Calibrations of a run, each loaded from the provider once.
type Models = HashMap<Scale, Box<dyn PressureScale>>;

fn load_models<I: IntoIterator<Item = Scale>>(provider: &dyn ScaleProvider, scales: I) -> Result<Models> {
    let mut models = Models::new();
    for scale in scales {
        if let Entry::Vacant(slot) = models.entry(scale) {
            slot.insert(provider.scale(scale)?);
        }
    }
    log::debug!("loaded {} calibrations", models.len());
    Ok(models)
}

fn model(models: &Models, scale: Scale) -> Result<&dyn PressureScale> {
    models
        .get(&scale)
        .map(|m| m.as_ref())
        .ok_or_else(|| ScaleError::UnknownScale(scale.to_string()))
}

/// Load every dataset, then evaluate each panel's calibrations and pair
/// reference and sample pressures row by row.
pub fn compare_datasets(config: &RunConfig, provider: &dyn ScaleProvider) -> Result<Vec<PanelResult>> {
    let tables = config.tables()?;
    let mut scales = Vec::new();
    for panel in &config.panels {
        for dataset in &config.datasets {
            scales.push(panel.scale_for(dataset.reference)?);
            scales.push(panel.scale_for(dataset.sample)?);
        }
    }
    let models = load_models(provider, scales)?;
    let records = config
        .datasets
        .iter()
        .zip(&tables)
        .map(|(dataset, table)| {
            Ok((
                table.records(dataset.reference, dataset.temperature)?,
                table.records(dataset.sample, dataset.temperature)?,
            ))
        })
        .collect::<Result<Vec<(Vec<SampleRecord>, Vec<SampleRecord>)>>>()?;

    let mut results = Vec::with_capacity(config.panels.len());
    for panel in &config.panels {
        let mut series = Vec::with_capacity(config.datasets.len());
        for (dataset, (reference, sample)) in config.datasets.iter().zip(&records) {
            let p_ref = evaluate::pressures(
                model(&models, panel.scale_for(dataset.reference)?)?,
                reference,
            )?;
            let p_sample = evaluate::pressures(
                model(&models, panel.scale_for(dataset.sample)?)?,
                sample,
            )?;
            series.push(Series {
                label: dataset.label.clone(),
                material: dataset.sample,
                points: compare::compare(&p_ref, &p_sample, &dataset.label)?,
            });
        }
        log::info!("panel {} compared {} datasets", panel.tag, series.len());
        results.push(PanelResult {
            tag: panel.tag.clone(),
            series,
        });
    }
    Ok(results)
}

/// Pressure-temperature coverage of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSeries {
    /// Legend label, empty to leave the dataset out of the legend.
    pub label: String,
    /// Sample standard, used for colouring.
    pub material: Material,
    /// Reference-material pressure of each row.
    pub pressures: Vec<Measured>,
    /// Temperature of each row.
    pub temperatures: Vec<Measured>,
}

/// Evaluate the reference material of every dataset with the first panel's calibrations.
pub fn distribution(config: &RunConfig, provider: &dyn ScaleProvider) -> Result<Vec<DistributionSeries>> {
    let panel = config
        .panels
        .first()
        .ok_or_else(|| ScaleError::UnknownScale("no panel configured".to_string()))?;
    let tables = config.tables()?;
    let scales = config
        .datasets
        .iter()
        .map(|d| panel.scale_for(d.reference))
        .collect::<Result<Vec<Scale>>>()?;
    let models = load_models(provider, scales.iter().copied())?;
    config
        .datasets
        .iter()
        .zip(&tables)
        .zip(&scales)
        .map(|((dataset, table), scale)| {
            let records = table.records(dataset.reference, dataset.temperature)?;
            Ok(DistributionSeries {
                label: dataset.label.clone(),
                material: dataset.sample,
                pressures: evaluate::pressures(model(&models, *scale)?, &records)?,
                temperatures: records.iter().map(|r| r.temperature).collect(),
            })
        })
        .collect()
}
