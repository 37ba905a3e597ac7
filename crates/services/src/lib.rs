#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod quiz;

pub use prep_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::{CatalogService, Difficulty, ModuleInfo, QuestionSetInfo};
pub use error::QuizServiceError;
pub use quiz::{QuizLoopService, QuizProgress, QuizReport, feedback_for};
