// Storage module for persistent data
pub mod identity_store;

pub use identity_store::*;
