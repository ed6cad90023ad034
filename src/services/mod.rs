// src/services/mod.rs
pub mod completion;
pub mod relay;
