pub mod base;
pub mod dataset;
pub mod job;
pub mod path;
pub mod plan;
pub mod store;
