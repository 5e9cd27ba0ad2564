mod analysis;
mod contract;
mod persona;
mod scrape;

pub use analysis::AnalysisCommands;
pub use contract::ContractCommands;
pub use persona::PersonaCommands;
pub use scrape::{ScrapeArgs, ScrapeCommands};
