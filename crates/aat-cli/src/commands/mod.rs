pub mod analysis;
pub mod contract;
pub mod dispatch;
pub mod fallback;
pub mod health;
pub mod persona;
pub mod scrape;
