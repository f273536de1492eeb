//! Declarative field shapes and the generic walker that checks a decoded
//! value against them.
//!
//! Objects are non-strict: properties not listed in a [`Field`] table are
//! ignored. An optional field holding `null` counts as absent.

use serde_json::Value;

use super::types::SchemaViolation;

#[derive(Debug, Clone, Copy)]
pub enum Shape {
    String,
    Integer { min: i64, max: i64 },
    Number,
    Boolean,
    /// Exactly this string.
    Const(&'static str),
    /// One of these strings.
    OneOf(&'static [&'static str]),
    ArrayOf(&'static Shape),
    Object(&'static [Field]),
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub required: bool,
}

pub const fn required(name: &'static str, shape: Shape) -> Field {
    Field {
        name,
        shape,
        required: true,
    }
}

pub const fn optional(name: &'static str, shape: Shape) -> Field {
    Field {
        name,
        shape,
        required: false,
    }
}

/// Check `value` against `shape`, appending one violation per failed constraint.
pub fn check(shape: &Shape, value: &Value, path: &str, errors: &mut Vec<SchemaViolation>) {
    match shape {
        Shape::String => {
            if !value.is_string() {
                errors.push(SchemaViolation::new(path, "must be a string"));
            }
        }
        Shape::Integer { min, max } => match integer_of(value) {
            Some(n) if n < *min => {
                errors.push(SchemaViolation::new(path, format!("must be >= {}", min)))
            }
            Some(n) if n > *max => {
                errors.push(SchemaViolation::new(path, format!("must be <= {}", max)))
            }
            Some(_) => {}
            None => errors.push(SchemaViolation::new(path, "must be an integer")),
        },
        Shape::Number => {
            if !value.is_number() {
                errors.push(SchemaViolation::new(path, "must be a number"));
            }
        }
        Shape::Boolean => {
            if !value.is_boolean() {
                errors.push(SchemaViolation::new(path, "must be a boolean"));
            }
        }
        Shape::Const(expected) => {
            if value.as_str() != Some(*expected) {
                errors.push(SchemaViolation::new(
                    path,
                    format!("must be equal to '{}'", expected),
                ));
            }
        }
        Shape::OneOf(allowed) => {
            let ok = value.as_str().map(|s| allowed.contains(&s)).unwrap_or(false);
            if !ok {
                errors.push(SchemaViolation::new(
                    path,
                    format!("must be one of: {}", allowed.join(", ")),
                ));
            }
        }
        Shape::ArrayOf(item) => match value.as_array() {
            Some(items) => {
                for (idx, v) in items.iter().enumerate() {
                    check(item, v, &format!("{}[{}]", path, idx), errors);
                }
            }
            None => errors.push(SchemaViolation::new(path, "must be an array")),
        },
        Shape::Object(fields) => check_object(fields, value, path, errors),
    }
}

/// Check an object against a field table.
pub fn check_object(fields: &[Field], value: &Value, path: &str, errors: &mut Vec<SchemaViolation>) {
    let Some(map) = value.as_object() else {
        errors.push(SchemaViolation::new(path, "must be an object"));
        return;
    };

    for field in fields {
        let field_path = join_path(path, field.name);
        match map.get(field.name) {
            None | Some(Value::Null) if field.required => {
                errors.push(SchemaViolation::new(field_path, "is required"));
            }
            None | Some(Value::Null) => {}
            Some(v) => check(&field.shape, v, &field_path, errors),
        }
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn integer_of(value: &Value) -> Option<i64> {
    let n = value.as_number()?;
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // u64 beyond i64::MAX is still an integer, just out of every range we use.
    if n.as_u64().is_some() {
        return Some(i64::MAX);
    }
    // `1.0` counts as an integer; `1.5` does not.
    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        Some(f as i64)
    } else {
        None
    }
}
