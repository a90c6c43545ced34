// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod dataset_source;
pub mod ndjson;
