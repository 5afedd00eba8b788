// src/services/mod.rs

pub mod classifier;
pub mod deadlines;
pub mod gemini;
pub mod paye;
