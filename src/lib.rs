// src/lib.rs

//! Scholarship awardee lookup library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod source;
pub mod utils;
