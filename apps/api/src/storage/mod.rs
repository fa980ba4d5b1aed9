//! Flat-file adapters around the core: the job corpus, extracted résumé
//! records, and skill-gap analysis output all live in CSV files.

pub mod analysis_csv;
pub mod jobs;
pub mod resume_csv;
