pub mod authorization;
pub mod error;
pub mod origin;
pub mod random;
pub mod repo;
pub mod service;
