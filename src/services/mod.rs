pub mod document_service;
pub mod grader;
pub mod model_service;
pub mod normalizer;
pub mod session_store;
