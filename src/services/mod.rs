pub mod analytics;
pub mod assistant;
pub mod chat;
pub mod clock;
pub mod session;
pub mod store;
pub mod streak;
pub mod wellness;
