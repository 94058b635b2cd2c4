//! Triplet ingestion and graph construction
//!
//! This module covers the data half of the pipeline: the triplet wire model
//! and the builder that collapses triplets into renderable graph elements.

mod builder;
mod elements;
mod triplet;

pub use builder::*;
pub use elements::*;
pub use triplet::*;
