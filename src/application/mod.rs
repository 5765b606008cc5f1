// Application layer - Use cases and repository abstractions
pub mod dashboard_service;
pub mod telemetry_repository;
