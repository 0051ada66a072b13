pub mod checkin;
pub mod record;
pub mod reward;
pub mod summary;
