pub mod features;
pub mod history;
pub mod patient;
pub mod prediction;
pub mod report;
