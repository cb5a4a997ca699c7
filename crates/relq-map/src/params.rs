//! Compiled entity-to-parameter mappers.

use relq_types::{FieldType, Param};

use crate::descriptor::{Entity, FieldDescriptor};
use crate::error::MapError;

/// A compiled mapper from one entity type to its bound parameters.
///
/// One step per readable field, in declaration order, each producing a
/// parameter named `@` + field name. Unset nullable fields bind the null
/// marker; everything else binds the field's value.
pub struct ParamMapper<T: Entity> {
    steps: Vec<ParamStep<T>>,
}

struct ParamStep<T: 'static> {
    name: String,
    field: &'static FieldDescriptor<T>,
}

impl<T: Entity> ParamMapper<T> {
    /// Fails when a field's type has no parameter representation.
    pub(crate) fn build() -> Result<Self, MapError> {
        let mut steps = Vec::with_capacity(T::fields().len());
        for field in T::fields() {
            if let FieldType::Embedded { .. } = field.ty {
                return Err(MapError::UnsupportedParameterType {
                    field: field.name,
                    ty: field.ty,
                });
            }
            steps.push(ParamStep {
                name: format!("@{}", field.name),
                field,
            });
        }
        Ok(Self { steps })
    }

    /// Number of parameters this mapper emits.
    pub fn param_count(&self) -> usize {
        self.steps.len()
    }

    /// Convert one entity into its ordered parameter list.
    pub fn map(&self, entity: &T) -> Vec<Param> {
        self.steps
            .iter()
            .map(|step| Param::new(step.name.clone(), (step.field.get)(entity)))
            .collect()
    }
}
