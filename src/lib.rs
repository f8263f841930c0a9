pub mod config;
pub mod core_types;
pub mod error;
pub mod frequency;
pub mod geometry;
pub mod optimizer;
pub mod scorer;
pub mod store;
// cmd and reports belong to the binary (main.rs).
