//! Compiled row-to-entity mappers.

use relq_types::RowCursor;

use crate::descriptor::{Entity, FieldDescriptor};
use crate::error::MapError;

/// A compiled mapper from one result-set shape to one entity type.
///
/// Built once per `(type, column shape)` pair: each step pairs a descriptor
/// whose name exactly matches a column with that column's position. Every
/// invocation for the same shape assigns the same field subset; fields with
/// no matching column, and columns carrying the null marker, leave the
/// entity's default value in place.
pub struct RowMapper<T: Entity> {
    steps: Vec<Step<T>>,
}

struct Step<T: 'static> {
    ordinal: usize,
    field: &'static FieldDescriptor<T>,
}

impl<T: Entity> RowMapper<T> {
    pub(crate) fn build(shape: &[String]) -> Self {
        let mut steps = Vec::new();
        for field in T::fields() {
            if let Some(ordinal) = shape.iter().position(|column| column == field.name) {
                steps.push(Step { ordinal, field });
            }
        }
        Self { steps }
    }

    /// Number of fields this mapper assigns.
    pub fn mapped_fields(&self) -> usize {
        self.steps.len()
    }

    /// Materialize one entity from the cursor's current row.
    pub fn map<C: RowCursor + ?Sized>(&self, row: &C) -> Result<T, MapError> {
        let mut entity = T::default();
        for step in &self.steps {
            let raw = row.value_at(step.ordinal)?;
            if raw.is_null() {
                continue;
            }
            (step.field.set)(&mut entity, raw).map_err(|source| MapError::MappingType {
                field: step.field.name,
                source,
            })?;
        }
        Ok(entity)
    }
}
