pub mod participant_service;
pub mod sheets_service;
