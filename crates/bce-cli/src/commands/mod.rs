pub mod chain;
pub mod job;
pub mod login;
pub mod pool;
