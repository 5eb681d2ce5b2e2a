pub mod converter;
pub mod engine;
pub mod lexicon;
pub mod matcher;
pub mod phrase;
pub mod roots;
pub mod stemmer;
pub mod types;
