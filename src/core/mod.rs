pub mod reports;
pub mod session;
pub mod stats;
pub mod viewer;
