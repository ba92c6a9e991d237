//! Quill Storage - The in-memory entity store
//!
//! This crate holds the account, post and comment collections, the mutation
//! engine that keeps them consistent and the resolvers that walk references
//! between them.

pub mod collection;
pub mod id;
pub mod memory;
pub mod mutation;
pub mod resolver;
pub mod seed;
pub mod store;

pub use collection::{Collection, Keyed};
pub use id::IdGenerator;
pub use memory::MemoryStorage;
pub use mutation::{AccountRemoval, PostRemoval};
pub use seed::seed_demo_data;
pub use store::EntityStore;
