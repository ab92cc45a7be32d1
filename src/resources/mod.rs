//! API resources

pub mod disputes;

pub use disputes::Disputes;
