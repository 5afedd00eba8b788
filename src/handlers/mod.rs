// src/handlers/mod.rs

pub mod assistant;
pub mod deadlines;
pub mod documents;
pub mod general;
pub mod paye;
pub mod profile;
