pub mod buckets;
pub mod cache;
pub mod cluster;
pub mod config;
pub mod distance;
pub mod error;
pub mod evaluate;
pub mod pipeline;
pub mod signature;
pub mod types;
