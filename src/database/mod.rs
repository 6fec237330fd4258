pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use store::{Store, StoreError};
