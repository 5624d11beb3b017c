// src/models/mod.rs
pub mod player;
pub mod server;
pub mod types;
