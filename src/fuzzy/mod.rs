pub mod containment;
pub mod negation;
