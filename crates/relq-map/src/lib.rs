//! Entity marshaling: rows to typed entities and entities to parameters.
//!
//! Each entity type declares a static field-descriptor table. From it, this
//! crate compiles per-shape row mappers and per-type parameter mappers and
//! memoizes them in a concurrent, append-only [`MapperCache`].

pub mod cache;
pub mod descriptor;
pub mod error;
pub mod params;
pub mod row;

pub use cache::{CacheStats, MapperCache};
pub use descriptor::{Entity, FieldDescriptor};
pub use error::MapError;
pub use params::ParamMapper;
pub use row::RowMapper;
