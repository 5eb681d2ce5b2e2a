// src/lib.rs

pub mod core;
pub mod error;
pub mod fuzzy;
pub mod options;
pub mod persistence;

pub use crate::core::engine::TranslationEngine;
pub use crate::core::types::{
    ConstructionDetail, LetterRoot, LexiconEntry, Method, RootEntry, Stats, TranslationResult,
};
pub use crate::error::TableError;
pub use crate::fuzzy::negation::NegationTable;
pub use crate::options::TranslateOptions;
