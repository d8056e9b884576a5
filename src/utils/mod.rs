// Shared helpers

pub mod constants;
pub mod format;
pub mod jwt;
pub mod storage;
