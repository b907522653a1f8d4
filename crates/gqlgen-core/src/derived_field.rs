use serde::Serialize;

/// Whether a mutation document's field is expected to be settable on
/// create/update input or only ever produced by the server.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldAccess {
    Modify,
    ReadOnly,
}
impl FieldAccess {
    /// Classify a field from its query path.
    ///
    /// Counting is case-insensitive over the whole path, root object
    /// included. A field is writable when its path mentions `node` fewer than
    /// twice and never mentions `id` (a scalar one hop from the root
    /// entity), or when it mentions `node` at least twice and `id` at least
    /// once (the identifier of a related entity). Everything else is
    /// read-only.
    pub fn classify(query_path: &str) -> Self {
        let lowered = query_path.to_lowercase();
        let node_count = lowered.matches("node").count();
        let id_count = lowered.matches("id").count();

        match (node_count, id_count) {
            (0..=1, 0) => Self::Modify,
            (2.., 1..) => Self::Modify,
            _ => Self::ReadOnly,
        }
    }

    pub fn is_modify(&self) -> bool {
        matches!(self, Self::Modify)
    }
}

/// The accessor paths derived for a single [`Field`](crate::Field).
///
/// For `edges_node_name_value` under root object `InfraDevice` in a point
/// lookup:
///
/// | path           | value                                  |
/// |----------------|----------------------------------------|
/// | `query`        | `InfraDevice.Edges[0].Node.Name.Value` |
/// | `no_prefix`    | `Name.Value`                           |
/// | `input_object` | `Name.Value`                           |
/// | `plain_object` | `Name.Value`                           |
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DerivedField {
    pub(crate) access: Option<FieldAccess>,
    pub(crate) dotted_name: String,
    pub(crate) input_object_path: String,
    pub(crate) no_prefix_path: String,
    pub(crate) plain_object_path: String,
    pub(crate) query_path: String,
    pub(crate) segments: Vec<String>,
}
impl DerivedField {
    /// How the field may be used in generated create/update code. Always
    /// `None` for query documents.
    pub fn access(&self) -> Option<FieldAccess> {
        self.access
    }

    /// The [`Field`](crate::Field) name this was derived from.
    pub fn dotted_name(&self) -> &str {
        self.dotted_name.as_str()
    }

    /// Left-hand side of an assignment into a mutation input structure. Same
    /// segments as [`DerivedField::no_prefix_path()`] but keeps a trailing
    /// `Id` as a plain field.
    pub fn input_object_path(&self) -> &str {
        self.input_object_path.as_str()
    }

    /// The query path without the root object and without any `Edges`/`Node`
    /// wrapper segments.
    pub fn no_prefix_path(&self) -> &str {
        self.no_prefix_path.as_str()
    }

    /// Path to read the value back from a create/upsert response object,
    /// i.e. all segments except the two outermost wrappers.
    pub fn plain_object_path(&self) -> &str {
        self.plain_object_path.as_str()
    }

    /// Full accessor path from the root object of a query response.
    pub fn query_path(&self) -> &str {
        self.query_path.as_str()
    }

    /// The capitalized segments of the dotted name, before any `Edges` or
    /// `Id` rewriting.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}
