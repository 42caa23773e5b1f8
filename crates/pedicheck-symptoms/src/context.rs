use pedicheck_core::models::patient::PatientInfo;

use crate::selection::SymptomSelection;

/// Everything known about the patient for one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientContext {
    info: PatientInfo,
    selection: SymptomSelection,
}

impl PatientContext {
    pub fn new(
        age_months: u32,
        medical_history: impl IntoIterator<Item = String>,
        selection: SymptomSelection,
    ) -> Self {
        Self {
            info: PatientInfo::new(age_months, medical_history),
            selection,
        }
    }

    pub fn age_months(&self) -> u32 {
        self.info.age_months
    }

    /// Every supplied history tag, recognised or not.
    pub fn medical_history(&self) -> &[String] {
        &self.info.medical_history
    }

    pub fn selection(&self) -> &SymptomSelection {
        &self.selection
    }

    /// The snapshot carried on a Report.
    pub fn snapshot(&self) -> PatientInfo {
        self.info.clone()
    }
}
