//! Domain layer
//!
//! Contains the catalog model with no external dependencies beyond serde.
//! - `entities`: Users, content units, levels and courses

pub mod entities;
