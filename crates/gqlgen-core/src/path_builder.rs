use crate::DerivedField;
use crate::Field;
use crate::FieldAccess;
use crate::OperationKind;
use crate::ResponseShape;
use crate::segment_field_name;

const EDGES_SEGMENT: &str = "Edges";
const NODE_SEGMENT: &str = "Node";
const ID_SEGMENT: &str = "Id";

/// Generated clients expose identifiers of node references through an
/// accessor method rather than a field.
const ID_ACCESSOR: &str = "GetId()";

const PATH_SEPARATOR: &str = ".";

/// Number of outermost wrapper segments of a create/update response envelope.
const RESPONSE_ENVELOPE_DEPTH: usize = 2;

/// Derives the accessor paths of each [`Field`] of one document.
#[derive(Debug)]
pub(crate) struct PathBuilder<'a> {
    immutable_tokens: Vec<&'a str>,
    operation_kind: OperationKind,
    response_shape: ResponseShape,
    root_object_name: &'a str,
}
impl<'a> PathBuilder<'a> {
    pub fn new(
        root_object_name: &'a str,
        operation_kind: OperationKind,
        response_shape: ResponseShape,
        immutable_tokens: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            immutable_tokens: immutable_tokens.into_iter().collect(),
            operation_kind,
            response_shape,
            root_object_name,
        }
    }

    pub fn derive(&self, field: &Field) -> DerivedField {
        let segments =
            segment_field_name(field.dotted_name(), &self.immutable_tokens);

        let edges_accessor = self.response_shape.edges_accessor();
        let query_segments: Vec<&str> =
            segments.iter()
                .map(|segment| match segment.as_str() {
                    EDGES_SEGMENT => edges_accessor,
                    other => other,
                })
                .collect();

        let unwrapped_segments: Vec<&str> =
            segments.iter()
                .map(String::as_str)
                .filter(|segment| *segment != EDGES_SEGMENT && *segment != NODE_SEGMENT)
                .collect();

        let query_path = format!(
            "{}{PATH_SEPARATOR}{}",
            self.root_object_name,
            join_with_id_accessor(query_segments),
        );
        let no_prefix_path = join_with_id_accessor(unwrapped_segments.clone());
        let input_object_path = unwrapped_segments.join(PATH_SEPARATOR);
        let plain_object_path = join_with_id_accessor(
            segments.iter()
                .skip(RESPONSE_ENVELOPE_DEPTH)
                .map(String::as_str)
                .collect(),
        );

        let access = match self.operation_kind {
            OperationKind::Mutation => Some(FieldAccess::classify(&query_path)),
            OperationKind::Query => None,
        };

        DerivedField {
            access,
            dotted_name: field.dotted_name().to_string(),
            input_object_path,
            no_prefix_path,
            plain_object_path,
            query_path,
            segments,
        }
    }
}

fn join_with_id_accessor(mut segments: Vec<&str>) -> String {
    if let Some(last) = segments.last_mut() && *last == ID_SEGMENT {
        *last = ID_ACCESSOR;
    }
    segments.join(PATH_SEPARATOR)
}
