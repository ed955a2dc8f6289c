pub mod chat;
pub mod health;
pub mod journal;
pub mod moods;
pub mod stats;
pub mod wellness;
