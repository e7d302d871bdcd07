pub mod config;
pub mod logging;

pub mod dedup;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pool;
pub mod record;
pub mod stats;
pub mod storage;
