// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod warm_query_repository;
