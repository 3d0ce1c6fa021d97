//! An in-memory RDF quad store.
//!
//! The entry point of the crate is the [`Store`](store::Store) struct.

pub mod store;

pub mod model {
    pub use quadstore_model::*;
}

pub mod engine {
    pub use quadstore_engine::*;
}

pub mod storage {
    pub use quadstore_storage::*;
}

pub mod error {
    pub use quadstore_common::error::*;
    pub use quadstore_engine::error::*;
}
