pub mod aggregate;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod render;
pub mod storage;
pub mod store;
pub mod utils;
pub mod widget;
