/// Separator placed after every open selection-set name in a dotted prefix.
pub(crate) const SEPARATOR: char = '_';

/// The stack of selection-set names currently open while scanning a document.
///
/// The rendered prefix is every open name followed by [`SEPARATOR`], so
/// `["edges", "node"]` renders as `edges_node_`. Pushing and popping whole
/// entries keeps names that themselves contain underscores intact.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PrefixStack {
    names: Vec<String>,
}
impl PrefixStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }

    /// Open a selection set named `name` and return the new rendered prefix.
    pub fn push(&mut self, name: impl Into<String>) -> String {
        self.names.push(name.into());
        self.rendered()
    }

    /// Close the innermost selection set and return the new rendered prefix,
    /// or `None` if nothing was open.
    pub fn pop(&mut self) -> Option<String> {
        self.names.pop()?;
        Some(self.rendered())
    }

    pub fn rendered(&self) -> String {
        self.names
            .iter()
            .fold(String::new(), |mut prefix, name| {
                prefix.push_str(name);
                prefix.push(SEPARATOR);
                prefix
            })
    }

    /// Number of separator characters in the rendered prefix, counting those
    /// inside names as well as the ones between them.
    pub fn separator_count(&self) -> usize {
        self.names
            .iter()
            .map(|name| name.matches(SEPARATOR).count() + 1)
            .sum()
    }
}
