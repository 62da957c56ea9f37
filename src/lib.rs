// src/lib.rs

pub mod api;
pub mod config;
pub mod db;
pub mod item;
pub mod state;

pub use state::AppState;
