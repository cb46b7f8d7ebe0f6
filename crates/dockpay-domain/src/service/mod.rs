//! Domain services

pub mod staffing_calculator;

pub use staffing_calculator::{compute, Calculator};
