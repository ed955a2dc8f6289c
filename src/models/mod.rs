pub mod chat;
pub mod journal;
pub mod mood;
