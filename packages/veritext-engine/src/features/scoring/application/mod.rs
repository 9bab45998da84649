//! Scoring Application Layer

pub mod similarity_engine;

pub use similarity_engine::SimilarityEngine;
