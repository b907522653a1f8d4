use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseQueryError {
    #[error("Query document at {file_path:?} could not be read: {err}")]
    DocumentReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Expected a query document file at {0:?}")]
    DocumentPathIsNotAFile(PathBuf),

    #[error("Failed to parse GraphQL document: missing operation name")]
    MissingOperationName,
}

// `io::Error` has no `PartialEq`; read failures compare by kind.
impl std::cmp::PartialEq for ParseQueryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::DocumentReadError { file_path, err },
                Self::DocumentReadError { file_path: other_path, err: other_err },
            ) => file_path == other_path && err.kind() == other_err.kind(),

            (
                Self::DocumentPathIsNotAFile(path),
                Self::DocumentPathIsNotAFile(other_path),
            ) => path == other_path,

            (Self::MissingOperationName, Self::MissingOperationName) => true,

            _ => false,
        }
    }
}
