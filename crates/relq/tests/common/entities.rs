//! Test entities mirroring the backing tables.

use chrono::{DateTime, TimeZone, Utc};
use relq::{Entity, FieldDescriptor, FieldType, ScalarType, SqlValue};

use super::uuid;

/// A table with an identifier and one string column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleStringRow {
    pub id: [u8; 16],
    pub test_string: String,
}

impl Entity for SingleStringRow {
    fn entity_name() -> &'static str {
        "SingleString"
    }

    fn fields() -> &'static [FieldDescriptor<Self>] {
        const FIELDS: &[FieldDescriptor<SingleStringRow>] = &[
            FieldDescriptor::new(
                "Id",
                FieldType::Scalar(ScalarType::Uuid),
                |e| SqlValue::Uuid(e.id),
                |e, v| {
                    e.id = v.try_into()?;
                    Ok(())
                },
            ),
            FieldDescriptor::new(
                "TestString",
                FieldType::Scalar(ScalarType::String),
                |e| SqlValue::String(e.test_string.clone()),
                |e, v| {
                    e.test_string = v.try_into()?;
                    Ok(())
                },
            ),
        ];
        FIELDS
    }
}

/// A table covering every mapped scalar, including nullable columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeRow {
    pub id: [u8; 16],
    pub test_int: i32,
    pub test_big_int: i64,
    pub test_string: String,
    pub test_date: DateTime<Utc>,
    pub test_null_int: Option<i32>,
    pub test_null_big_int: Option<i64>,
    pub test_null_date: Option<DateTime<Utc>>,
}

impl Entity for TypeRow {
    fn entity_name() -> &'static str {
        "TypeTest"
    }

    fn fields() -> &'static [FieldDescriptor<Self>] {
        const FIELDS: &[FieldDescriptor<TypeRow>] = &[
            FieldDescriptor::new(
                "Id",
                FieldType::Scalar(ScalarType::Uuid),
                |e| SqlValue::Uuid(e.id),
                |e, v| {
                    e.id = v.try_into()?;
                    Ok(())
                },
            ),
            FieldDescriptor::new(
                "TestInt",
                FieldType::Scalar(ScalarType::Int32),
                |e| SqlValue::Int32(e.test_int),
                |e, v| {
                    e.test_int = v.try_into()?;
                    Ok(())
                },
            ),
            FieldDescriptor::new(
                "TestBigInt",
                FieldType::Scalar(ScalarType::Int64),
                |e| SqlValue::Int64(e.test_big_int),
                |e, v| {
                    e.test_big_int = v.try_into()?;
                    Ok(())
                },
            ),
            FieldDescriptor::new(
                "TestString",
                FieldType::Scalar(ScalarType::String),
                |e| SqlValue::String(e.test_string.clone()),
                |e, v| {
                    e.test_string = v.try_into()?;
                    Ok(())
                },
            ),
            FieldDescriptor::new(
                "TestDate",
                FieldType::Scalar(ScalarType::Timestamp),
                |e| SqlValue::from(e.test_date),
                |e, v| {
                    e.test_date = v.try_into()?;
                    Ok(())
                },
            ),
            FieldDescriptor::new(
                "TestNullInt",
                FieldType::Optional(ScalarType::Int32),
                |e| e.test_null_int.into(),
                |e, v| {
                    e.test_null_int = Some(v.try_into()?);
                    Ok(())
                },
            ),
            FieldDescriptor::new(
                "TestNullBigInt",
                FieldType::Optional(ScalarType::Int64),
                |e| e.test_null_big_int.into(),
                |e, v| {
                    e.test_null_big_int = Some(v.try_into()?);
                    Ok(())
                },
            ),
            FieldDescriptor::new(
                "TestNullDate",
                FieldType::Optional(ScalarType::Timestamp),
                |e| e.test_null_date.into(),
                |e, v| {
                    e.test_null_date = Some(v.try_into()?);
                    Ok(())
                },
            ),
        ];
        FIELDS
    }
}

/// A fully-populated [`TypeRow`] with a seeded identifier.
pub fn sample_type_row(seed: u8) -> TypeRow {
    TypeRow {
        id: uuid(seed),
        test_int: 2,
        test_big_int: 5,
        test_string: "78910".to_string(),
        test_date: Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap(),
        test_null_int: Some(7),
        test_null_big_int: Some(4),
        test_null_date: Some(Utc.with_ymd_and_hms(2014, 1, 2, 0, 0, 0).unwrap()),
    }
}
