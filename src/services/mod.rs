pub mod checkin_service;
pub mod record_store;
pub mod scoring_engine;
