//! Validator
//!
//! A single recursive walk over a [`Schema`]'s field rules. The walk never stops
//! at the first violation: each field is checked in declaration order and every
//! failure is appended, so callers get the full list in one pass.

use serde_json::{Map, Value};

use crate::{
    errors::{ExpectedKind, FieldError, JsonType, Rule, ValidationErrors},
    path::{FieldPath, PathSegment},
    payloads::{FormField, NewProduct, Payload, ProductUpdate, Validated, Variation},
    schema::{Element, Field, FieldKind, Schema, SchemaName},
};

/// Validates `input` against the named schema.
///
/// # Errors
///
/// Returns every violation found when `input` does not satisfy the schema.
pub fn validate(schema: SchemaName, input: &Value) -> Result<Validated, ValidationErrors> {
    Ok(match schema {
        SchemaName::Variation => Validated::Variation(validate_as::<Variation>(input)?),
        SchemaName::FormField => Validated::FormField(validate_as::<FormField>(input)?),
        SchemaName::CreateProduct => Validated::CreateProduct(validate_as::<NewProduct>(input)?),
        SchemaName::UpdateProduct => Validated::UpdateProduct(validate_as::<ProductUpdate>(input)?),
    })
}

/// Validates `input` against `T::SCHEMA` and reads it into `T`.
///
/// # Errors
///
/// Returns every violation found when `input` does not satisfy the schema.
pub fn validate_as<T: Payload>(input: &Value) -> Result<T, ValidationErrors> {
    check(T::SCHEMA, input)?;

    T::deserialize(input).map_err(|error| {
        FieldError::root(Rule::Decode {
            message: error.to_string(),
        })
        .into()
    })
}

/// Checks `input` against `schema` without producing a typed value.
///
/// # Errors
///
/// Returns every violation found when `input` does not satisfy the schema.
pub fn check(schema: &Schema, input: &Value) -> Result<(), ValidationErrors> {
    let Some(object) = input.as_object() else {
        return Err(FieldError::root(Rule::MalformedRoot {
            actual: JsonType::of(input),
        })
        .into());
    };

    let mut walker = Walker::default();

    walker.object(schema, object);

    if walker.errors.is_empty() {
        Ok(())
    } else {
        Err(walker.errors.into())
    }
}

#[derive(Debug, Default)]
struct Walker {
    path: FieldPath,
    errors: Vec<FieldError>,
}

impl Walker {
    fn report(&mut self, rule: Rule) {
        self.errors.push(FieldError::new(self.path.clone(), rule));
    }

    fn object(&mut self, schema: &Schema, object: &Map<String, Value>) {
        for field in schema.fields {
            self.path.push(PathSegment::Field(field.name));
            self.field(field, object.get(field.name));
            self.path.pop();
        }
    }

    fn field(&mut self, field: &Field, value: Option<&Value>) {
        let value = match value {
            None | Some(Value::Null) => {
                if field.is_required() {
                    self.report(Rule::Required);
                }

                return;
            }
            Some(value) => value,
        };

        if field.is_required()
            && field.kind.is_string_like()
            && value.as_str().is_some_and(str::is_empty)
        {
            self.report(Rule::Required);

            return;
        }

        match field.kind {
            FieldKind::String => self.expect(value, ExpectedKind::String, Value::is_string),
            FieldKind::Scalar => self.expect(value, ExpectedKind::Scalar, |value| {
                value.is_string() || value.is_number() || value.is_boolean()
            }),
            FieldKind::Number => self.expect(value, ExpectedKind::Number, Value::is_number),
            FieldKind::Boolean => self.expect(value, ExpectedKind::Boolean, Value::is_boolean),
            FieldKind::Enum(allowed) => {
                if !value.as_str().is_some_and(|literal| allowed.contains(&literal)) {
                    self.report(Rule::EnumViolation { allowed });
                }
            }
            FieldKind::Array { element, min_items } => self.array(value, element, min_items),
        }
    }

    fn expect(&mut self, value: &Value, expected: ExpectedKind, accepts: fn(&Value) -> bool) {
        if !accepts(value) {
            self.report(Rule::TypeMismatch {
                expected,
                actual: JsonType::of(value),
            });
        }
    }

    fn array(&mut self, value: &Value, element: Element, min_items: usize) {
        let Some(items) = value.as_array() else {
            self.report(Rule::TypeMismatch {
                expected: ExpectedKind::Array,
                actual: JsonType::of(value),
            });

            return;
        };

        if items.len() < min_items {
            self.report(Rule::ArrayTooSmall {
                min: min_items,
                actual: items.len(),
            });
        }

        for (index, item) in items.iter().enumerate() {
            self.path.push(PathSegment::Index(index));
            self.element(element, item);
            self.path.pop();
        }
    }

    fn element(&mut self, element: Element, item: &Value) {
        match element {
            Element::String => self.expect(item, ExpectedKind::String, Value::is_string),
            Element::Schema(schema) => match item.as_object() {
                Some(object) => self.object(schema, object),
                None => self.report(Rule::TypeMismatch {
                    expected: ExpectedKind::Object,
                    actual: JsonType::of(item),
                }),
            },
        }
    }
}
