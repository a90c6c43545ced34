// Application layer - Use cases over the dataset
pub mod chart_service;
pub mod dataset_repository;
pub mod replay_service;
