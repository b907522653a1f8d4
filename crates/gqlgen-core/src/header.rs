use crate::OperationKind;
use crate::ParseQueryError;

type Result<T> = std::result::Result<T, ParseQueryError>;

/// The operation-level facts carried by the first two significant lines of a
/// document:
///
/// ```graphql
/// query Device($device_name: String!) {
///     InfraDevice(name__value: $device_name) {
/// ```
///
/// Here the operation name is `device`, the root object is `InfraDevice` and
/// the required variable is `device_name`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryHeader {
    pub(crate) body_start: usize,
    pub(crate) name: String,
    pub(crate) operation_kind: OperationKind,
    pub(crate) required_variable_name: Option<String>,
    pub(crate) root_object_name: Option<String>,
}
impl QueryHeader {
    /// Scan `lines` from the top for the `query `/`mutation ` header line and
    /// read the root selection line that follows it.
    ///
    /// Fails with [`ParseQueryError::MissingOperationName`] when there is no
    /// header line or no usable name follows its keyword.
    pub fn parse(lines: &[&str]) -> Result<Self> {
        let (header_idx, operation_kind, header_line) =
            lines.iter()
                .enumerate()
                .find_map(|(idx, line)| {
                    let line = line.trim();
                    OperationKind::from_header_line(line)
                        .map(|kind| (idx, kind, line))
                })
                .ok_or(ParseQueryError::MissingOperationName)?;

        let name =
            parse_operation_name(header_line)
                .ok_or(ParseQueryError::MissingOperationName)?;

        let root_line =
            lines.iter()
                .enumerate()
                .skip(header_idx + 1)
                .find(|(_, line)| !line.trim().is_empty());

        let (root_object_name, required_variable_name, body_start) =
            match root_line {
                Some((idx, line)) => {
                    let (root, required) = parse_root_line(line.trim());
                    (Some(root), required, idx + 1)
                },
                None => (None, None, lines.len()),
            };

        Ok(Self {
            body_start,
            name,
            operation_kind,
            required_variable_name,
            root_object_name,
        })
    }

    /// Index of the first line after the root selection line.
    pub fn body_start(&self) -> usize {
        self.body_start
    }

    /// The operation name with its first character lower-cased.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn required_variable_name(&self) -> Option<&str> {
        self.required_variable_name.as_deref()
    }

    pub fn root_object_name(&self) -> Option<&str> {
        self.root_object_name.as_deref()
    }
}

fn parse_operation_name(header_line: &str) -> Option<String> {
    let token = header_line.split_whitespace().nth(1)?;
    let name = token.split(['(', '{']).next().unwrap_or_default();

    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_alphabetic() || first == '_') {
        return None;
    }
    Some(first.to_lowercase().chain(chars).collect())
}

/// Splits a root selection line into its object name and, when the line
/// filters by an argument (`Object(arg: $var) {`), the variable name.
fn parse_root_line(line: &str) -> (String, Option<String>) {
    let Some((before_colon, after_colon)) = line.split_once(':') else {
        let root = line.split_whitespace().next().unwrap_or_default();
        return (root.to_string(), None);
    };

    let root = before_colon.split('(').next().unwrap_or_default().trim();
    let required =
        after_colon.split(':')
            .next()
            .and_then(|arg| arg.split_once('$'))
            .map(|(_, var)| {
                var.split(char::is_whitespace)
                    .next()
                    .unwrap_or_default()
                    .trim_end_matches([')', ',', '{'])
            })
            .filter(|var| !var.is_empty())
            .map(str::to_string);

    (root.to_string(), required)
}
