//! Entity field-descriptor tables.
//!
//! Mapping is driven by a per-type table declared once by the entity type:
//! one descriptor per public field, in declaration order, carrying the
//! column/parameter base name, the declared semantic type, and the two
//! accessors the compiled mappers dispatch through.

use relq_types::{FieldType, SqlValue, ValueTypeError};

/// One field of an entity, as seen by the mappers.
pub struct FieldDescriptor<T> {
    /// Column and parameter base name (case-sensitive).
    pub name: &'static str,
    /// Declared semantic type.
    pub ty: FieldType,
    /// Read the field as a runtime value. Unset nullable fields read as
    /// [`SqlValue::Null`].
    pub get: fn(&T) -> SqlValue,
    /// Convert a raw value to the declared type and assign it.
    pub set: fn(&mut T, SqlValue) -> Result<(), ValueTypeError>,
}

impl<T> FieldDescriptor<T> {
    /// Create a descriptor. `const` so tables can live in consts.
    pub const fn new(
        name: &'static str,
        ty: FieldType,
        get: fn(&T) -> SqlValue,
        set: fn(&mut T, SqlValue) -> Result<(), ValueTypeError>,
    ) -> Self {
        Self { name, ty, get, set }
    }
}

/// A type that can be marshaled to and from the SQL backend.
///
/// Fields not present in a result set stay at their `Default` value, so the
/// type's default doubles as the freshly-materialized blank row.
pub trait Entity: Default + Send + Sync + 'static {
    /// Entity (table) name.
    fn entity_name() -> &'static str;

    /// Ordered field descriptor table, in declaration order.
    fn fields() -> &'static [FieldDescriptor<Self>];
}
