pub mod config;
pub mod print_service;
pub mod receipt;
pub mod workflow;
