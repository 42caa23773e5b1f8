use std::path::Path;
use std::sync::Arc;

use pedicheck_classifier::{Dataset, ModelRegistry, TrainingConfig};
use pedicheck_export::{ReportRenderer, ReportStyles};
use pedicheck_facilities::{FacilityLookup, OverpassClient};
use pedicheck_report::TriageEngine;
use pedicheck_safety::SafetyRuleSet;
use pedicheck_symptoms::SymptomCatalog;

use crate::config::ServiceConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub engine: TriageEngine,
    pub training: Arc<TrainingConfig>,
    pub renderer: Arc<ReportRenderer>,
    pub styles: Arc<ReportStyles>,
    pub facilities: Arc<dyn FacilityLookup>,
    pub default_radius_m: u32,
}

impl AppState {
    /// Build the state from config. An unreadable or invalid catalog file
    /// is fatal.
    pub fn from_config(config: &ServiceConfig) -> eyre::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    eyre::eyre!("failed to read catalog at {}: {e}", path.display())
                })?;
                let catalog = SymptomCatalog::from_json(&json)?;
                tracing::info!(
                    path = %path.display(),
                    symptoms = catalog.definitions().len(),
                    "symptom catalog loaded"
                );
                catalog
            }
            None => SymptomCatalog::builtin()?,
        };

        let rules = SafetyRuleSet::standard(
            &config.safety,
            catalog
                .definitions()
                .iter()
                .map(|d| (d.id.as_str(), d.label.as_str())),
        );
        let engine = TriageEngine::new(
            Arc::new(catalog),
            Arc::new(ModelRegistry::new()),
            Arc::new(rules),
        );

        Ok(Self {
            engine,
            training: Arc::new(config.training.clone()),
            renderer: Arc::new(ReportRenderer::new()?),
            styles: Arc::new(config.report_styles.clone()),
            facilities: Arc::new(OverpassClient::new(&config.facilities)),
            default_radius_m: config.facilities.default_radius_m,
        })
    }

    pub fn with_facility_lookup(mut self, lookup: Arc<dyn FacilityLookup>) -> Self {
        self.facilities = lookup;
        self
    }

    /// Train from a JSON records file and publish the model.
    pub fn train_from_file(&self, path: &Path) -> eyre::Result<()> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read dataset at {}: {e}", path.display()))?;
        let dataset = Dataset::from_json_records(&json)?;
        self.engine.train(&dataset, &self.training)?;
        Ok(())
    }
}
