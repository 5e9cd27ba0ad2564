//! Entity structs for every payload exchanged with the analysis service.

pub mod analysis;
pub mod contract;
pub mod health;
pub mod persona;
pub mod scrape;

pub use analysis::{
    AnalysisSummary, BiasAnalysis, BiasScore, DiversityAnalysis, DiversityMetrics, StanceAnalysis,
    StanceResult, TopicAnalysis, TopicDistribution, TopicInfo,
};
pub use contract::{
    Contract, ContractExport, ContractListing, ContractRequest, ContractSection, ContractSummary,
    ContractVisualization,
};
pub use health::{Acknowledgement, HealthStatus};
pub use persona::{Persona, PersonaList};
pub use scrape::{ScrapeJob, ScrapeJobList, ScrapeRequest};
