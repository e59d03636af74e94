pub mod catalog;
pub mod engine;
pub mod prizes;
pub mod rotation;
pub mod sampler;
pub mod validation;
