pub mod alternative;
pub mod dosage;
pub mod entity;
pub mod enums;
pub mod interaction;
pub mod monograph;
pub mod patient;
pub mod report;

pub use alternative::Alternative;
pub use dosage::DosageRecommendation;
pub use entity::ExtractedEntity;
pub use enums::{AgeGroup, RenalFunction, Severity};
pub use interaction::{AnnotatedInteraction, InteractionRecord};
pub use monograph::DrugMonograph;
pub use patient::PatientContext;
pub use report::{
    AnalysisReport, AnalysisSummary, DocumentAnalysis, DosageAnalysis, FileInfo,
    InteractionAnalysis,
};
