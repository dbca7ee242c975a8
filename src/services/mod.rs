//! Business logic services

mod contest_service;

pub use contest_service::ContestService;
