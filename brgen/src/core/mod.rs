//! Data model shared by the generators: vertices, graphs, errors and logging helpers.

pub mod entities;
pub mod utils;
