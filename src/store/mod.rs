//! In-memory data region.
//!
//! Both tables live for exactly as long as the process; there is no
//! persistence. Each store wraps its table in a `Mutex` so that concurrent
//! request handlers cannot corrupt the monotonic-id counters or lose writes.
//! Duplicate checks and id assignment always happen inside the critical
//! section.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
