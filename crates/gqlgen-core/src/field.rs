use serde::Serialize;

/// A leaf scalar selection, named by its underscore-joined path from the
/// document's root selection (e.g. `edges_node_role_description`).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    pub(crate) dotted_name: String,
}
impl Field {
    pub(crate) fn new(dotted_name: impl Into<String>) -> Self {
        Self {
            dotted_name: dotted_name.into(),
        }
    }

    pub fn dotted_name(&self) -> &str {
        self.dotted_name.as_str()
    }
}
