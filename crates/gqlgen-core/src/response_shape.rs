use serde::Serialize;

/// Whether the root selection of a document resolves to a single entity (a
/// point lookup through a required variable) or to a list of entities.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    List,
    Single,
}
impl ResponseShape {
    pub(crate) fn from_required_variable(required_variable: Option<&str>) -> Self {
        match required_variable {
            Some(_) => Self::Single,
            None => Self::List,
        }
    }

    /// The accessor that replaces an `Edges` segment in query paths.
    pub fn edges_accessor(&self) -> &'static str {
        match self {
            Self::List => "Edges[i]",
            Self::Single => "Edges[0]",
        }
    }
}
