pub mod analyzer;
pub mod index;
pub mod response;
pub mod stats;
