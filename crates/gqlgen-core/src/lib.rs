//! Turns hand-written GraphQL query and mutation documents that select fields
//! through `edges { node { ... } }` wrappers into [`ParsedQuery`] descriptors.
//!
//! Parsing runs as a fixed pipeline over the lines of one document:
//!
//! 1. The header parser extracts the operation name, the root object and the
//!    optional required variable.
//! 2. The structural scanner walks the selection sets and emits one [`Field`]
//!    per leaf selection.
//! 3. The name segmenter splits each dotted field name into capitalized
//!    segments.
//! 4. The path builder derives the accessor paths for every field and, for
//!    mutations, classifies it as writable or read-only.
//!
//! The resulting descriptor carries no rendering logic. It is handed to a
//! template-rendering collaborator as a plain value (or as JSON via `serde`).

mod derived_field;
mod field;
mod header;
mod name_segmenter;
mod operation_kind;
mod parse_query_error;
mod parsed_query;
mod path_builder;
mod prefix_stack;
mod response_shape;
mod scan_diagnostic;
mod scanner;

pub use derived_field::DerivedField;
pub use derived_field::FieldAccess;
pub use field::Field;
pub use header::QueryHeader;
pub use name_segmenter::segment_field_name;
pub use operation_kind::OperationKind;
pub use parse_query_error::ParseQueryError;
pub use parsed_query::ParsedQuery;
pub use response_shape::ResponseShape;
pub use scan_diagnostic::ScanDiagnostic;

#[cfg(test)]
mod tests;
