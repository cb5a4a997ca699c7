//! The concurrent, append-only mapper cache.
//!
//! Shared by the row and parameter mapper compilers. Entries are never
//! evicted or invalidated for the process lifetime. Lookups race freely:
//! threads missing on the same key may each compile a mapper, but only one
//! finished mapper is ever published under the key, and every caller is
//! handed the published one. A failed build is never memoized.

use std::any::{Any, TypeId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use relq_types::{Param, RowCursor};

use crate::descriptor::Entity;
use crate::error::MapError;
use crate::params::ParamMapper;
use crate::row::RowMapper;

/// Cache key for row mappers: type identity plus column shape.
///
/// Two shapes are equal iff they list the same column names in the same
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RowMapperKey {
    entity: TypeId,
    shape: Box<[String]>,
}

/// Cache statistics.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Get hit count.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Get miss count.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }
}

/// The shared store of compiled row and parameter mappers.
pub struct MapperCache {
    row_mappers: DashMap<RowMapperKey, Arc<dyn Any + Send + Sync>>,
    param_mappers: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    stats: CacheStats,
}

impl MapperCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            row_mappers: DashMap::new(),
            param_mappers: DashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Look up or compile the row mapper for `T` against a column shape.
    pub fn row_mapper<T: Entity>(&self, shape: &[String]) -> Arc<RowMapper<T>> {
        let key = RowMapperKey {
            entity: TypeId::of::<T>(),
            shape: shape.to_vec().into_boxed_slice(),
        };

        if let Some(entry) = self.row_mappers.get(&key) {
            self.stats.record_hit();
            return downcast(entry.value());
        }
        self.stats.record_miss();

        // Compile outside the map lock; a racing thread may do the same, but
        // only the first finished mapper is published under the key.
        let built: Arc<RowMapper<T>> = Arc::new(RowMapper::build(shape));
        debug!(
            entity = T::entity_name(),
            columns = shape.len(),
            mapped = built.mapped_fields(),
            "compiled row mapper"
        );
        let entry = self.row_mappers.entry(key).or_insert(built);
        downcast(entry.value())
    }

    /// Look up or compile the parameter mapper for `T`.
    ///
    /// A build failure is returned to the caller and not cached, so a later
    /// call retries the build from scratch.
    pub fn param_mapper<T: Entity>(&self) -> Result<Arc<ParamMapper<T>>, MapError> {
        let key = TypeId::of::<T>();

        if let Some(entry) = self.param_mappers.get(&key) {
            self.stats.record_hit();
            return Ok(downcast(entry.value()));
        }
        self.stats.record_miss();

        let built: Arc<ParamMapper<T>> = Arc::new(ParamMapper::build()?);
        debug!(
            entity = T::entity_name(),
            params = built.param_count(),
            "compiled parameter mapper"
        );
        let entry = self.param_mappers.entry(key).or_insert(built);
        Ok(downcast(entry.value()))
    }

    /// Drive a forward-only cursor once, eagerly materializing every row.
    pub fn map_rows<T, C>(&self, cursor: &mut C) -> Result<Vec<T>, MapError>
    where
        T: Entity,
        C: RowCursor + ?Sized,
    {
        let mapper = self.row_mapper::<T>(cursor.columns());
        let mut entities = Vec::new();
        while cursor.advance()? {
            entities.push(mapper.map(cursor)?);
        }
        Ok(entities)
    }

    /// Convert one entity into its ordered parameter list.
    pub fn params<T: Entity>(&self, entity: &T) -> Result<Vec<Param>, MapError> {
        Ok(self.param_mapper::<T>()?.map(entity))
    }

    /// Get cache statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Total number of cached mappers.
    pub fn len(&self) -> usize {
        self.row_mappers.len() + self.param_mappers.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MapperCache {
    fn default() -> Self {
        Self::new()
    }
}

// The keys embed the entity's TypeId, so the stored mapper is always for M.
fn downcast<M: Send + Sync + 'static>(entry: &Arc<dyn Any + Send + Sync>) -> Arc<M> {
    Arc::clone(entry)
        .downcast::<M>()
        .expect("mapper cached under a foreign key")
}
