pub mod codec;
pub mod document_set;
pub mod parser;
pub mod schema;
pub mod validation;

pub use codec::{decode, encode, DocumentCodec};
pub use document_set::{scaffold, DocumentRef, DocumentSet};
pub use parser::{parse_document, parse_document_with, parse_value, DslFormat};
pub use schema::*;
pub use validation::{
    detect_kind, validate, validate_document_set, SchemaValidator, SchemaViolation,
    ValidationReport,
};
