use crate::DerivedField;
use crate::Field;
use crate::OperationKind;
use crate::ParseQueryError;
use crate::QueryHeader;
use crate::ResponseShape;
use crate::ScanDiagnostic;
use crate::path_builder::PathBuilder;
use crate::scanner::StructuralScanner;
use serde::Serialize;
use std::path::Path;

type Result<T> = std::result::Result<T, ParseQueryError>;

/// The descriptor produced for one query or mutation document.
///
/// `fields` and `derived_fields` are index-aligned and follow the order in
/// which leaf selections appear in the document. No reordering or
/// deduplication is done.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ParsedQuery {
    pub(crate) derived_fields: Vec<DerivedField>,
    pub(crate) diagnostics: Vec<ScanDiagnostic>,
    pub(crate) fields: Vec<Field>,
    pub(crate) name: String,
    pub(crate) operation_kind: OperationKind,
    pub(crate) required_variable_name: Option<String>,
    pub(crate) response_shape: ResponseShape,
    pub(crate) root_object_name: String,
}
impl ParsedQuery {
    /// Parse a document read from a file on disk. Content that is not UTF-8
    /// fails with [`std::io::ErrorKind::InvalidData`].
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        if !file_path.is_file() {
            return Err(ParseQueryError::DocumentPathIsNotAFile(
                file_path.to_path_buf(),
            ));
        }

        let content = std::fs::read_to_string(file_path)
            .map_err(|err| ParseQueryError::DocumentReadError {
                file_path: file_path.to_path_buf(),
                err,
            })?;
        log::trace!("Parsing query document at {file_path:?}.");
        Self::from_str(content)
    }

    /// Parse the text of a single query or mutation document.
    pub fn from_str(content: impl AsRef<str>) -> Result<Self> {
        let lines: Vec<&str> = content.as_ref().lines().collect();
        let header = QueryHeader::parse(&lines)?;

        let mut diagnostics = vec![];
        if header.root_object_name.is_none() {
            diagnostics.push(ScanDiagnostic::MissingRootSelection);
        }

        let body_start = header.body_start.min(lines.len());
        let scan_output = StructuralScanner::scan(
            &lines[body_start..],
            body_start + 1,
        );
        diagnostics.extend(scan_output.diagnostics);

        let QueryHeader {
            name,
            operation_kind,
            required_variable_name,
            root_object_name,
            ..
        } = header;
        let root_object_name = root_object_name.unwrap_or_default();
        let response_shape = ResponseShape::from_required_variable(
            required_variable_name.as_deref(),
        );

        let path_builder = PathBuilder::new(
            root_object_name.as_str(),
            operation_kind,
            response_shape,
            scan_output.immutable_tokens.iter().map(String::as_str),
        );
        let derived_fields: Vec<DerivedField> =
            scan_output.fields
                .iter()
                .map(|field| path_builder.derive(field))
                .collect();

        log::debug!(
            "Parsed {} `{name}` with {} fields.",
            match operation_kind {
                OperationKind::Mutation => "mutation",
                OperationKind::Query => "query",
            },
            derived_fields.len(),
        );

        Ok(Self {
            derived_fields,
            diagnostics,
            fields: scan_output.fields,
            name,
            operation_kind,
            required_variable_name,
            response_shape,
            root_object_name,
        })
    }

    pub fn derived_fields(&self) -> &[DerivedField] {
        &self.derived_fields
    }

    /// Irregularities the scanner skipped over while parsing. Empty for
    /// well-formed documents.
    pub fn diagnostics(&self) -> &[ScanDiagnostic] {
        &self.diagnostics
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Derived fields of a mutation that are settable on create/update input,
    /// in declaration order.
    pub fn modify_fields(&self) -> impl Iterator<Item = &DerivedField> {
        self.derived_fields
            .iter()
            .filter(|field| field.access.is_some_and(|access| access.is_modify()))
    }

    /// The operation name, with its first character lower-cased.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    /// Derived fields of a mutation that are only ever produced by the server,
    /// in declaration order.
    pub fn read_only_fields(&self) -> impl Iterator<Item = &DerivedField> {
        self.derived_fields
            .iter()
            .filter(|field| field.access.is_some_and(|access| !access.is_modify()))
    }

    /// The variable filtering the root selection of a point lookup, if any.
    pub fn required_variable_name(&self) -> Option<&str> {
        self.required_variable_name.as_deref()
    }

    pub fn response_shape(&self) -> ResponseShape {
        self.response_shape
    }

    /// The object selected by the document's root selection line. Empty when
    /// the document has no root line.
    pub fn root_object_name(&self) -> &str {
        self.root_object_name.as_str()
    }
}
