//! Application service layer - config, ratio files, form input, staffing service

pub mod app;
pub mod config;
pub mod constants;
pub mod input;
