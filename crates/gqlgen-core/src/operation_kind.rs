use serde::Serialize;

/// The kind of operation a document declares in its header line.
///
/// Only [`OperationKind::Mutation`] documents get their fields classified into
/// writable and read-only sets (see [`FieldAccess`](crate::FieldAccess)).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    /// The keyword (including its trailing space) that opens a header line of
    /// this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation ",
            Self::Query => "query ",
        }
    }

    pub(crate) fn from_header_line(line: &str) -> Option<Self> {
        [Self::Query, Self::Mutation]
            .into_iter()
            .find(|kind| line.starts_with(kind.keyword()))
    }
}
