pub mod attendance;
pub mod core;
pub mod insights;
pub mod reports;
pub mod roster;
pub mod session;
pub mod stats;
