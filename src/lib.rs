pub mod config;
pub mod controllers;
pub mod models;
pub mod service;
pub mod state;
pub mod store;
pub mod utils;
