use serde::Serialize;

use pedicheck_core::models::patient::MAX_SELECTED_SYMPTOMS;

use crate::catalog::SymptomCatalog;
use crate::error::SymptomError;

/// A validated set of at most [`MAX_SELECTED_SYMPTOMS`] catalog symptoms,
/// in the order they were first selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymptomSelection(Vec<String>);

impl SymptomSelection {
    /// Validate raw ids against the catalog. Repeated ids count once.
    pub fn new<I, S>(catalog: &SymptomCatalog, ids: I) -> Result<Self, SymptomError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<String> = Vec::new();
        for id in ids {
            let id = id.as_ref().trim();
            if !selected.iter().any(|s| s == id) {
                selected.push(id.to_string());
            }
        }

        if selected.len() > MAX_SELECTED_SYMPTOMS {
            return Err(SymptomError::SelectionLimitExceeded {
                requested: selected.len(),
                max: MAX_SELECTED_SYMPTOMS,
            });
        }

        if let Some(unknown) = selected.iter().find(|id| !catalog.contains(id)) {
            return Err(SymptomError::UnknownSymptom(unknown.clone()));
        }

        Ok(Self(selected))
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
