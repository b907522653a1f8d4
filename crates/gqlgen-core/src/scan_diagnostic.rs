use serde::Serialize;

/// A non-fatal irregularity noticed while parsing a document.
///
/// Diagnostics never change the fields a document produces. They only make
/// visible the places where the line-oriented scanner silently dropped or
/// truncated input. Line numbers are 1-based.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanDiagnostic {
    /// The header line was not followed by a root selection line.
    MissingRootSelection,

    /// A leaf line appeared while no selection set was open and was skipped.
    SelectionOutsideBlock {
        line: usize,
        text: String,
    },

    /// Scanning stopped at a shallow closing brace while selection text
    /// remained below it.
    TrailingContentIgnored {
        stopped_at_line: usize,
        first_ignored_line: usize,
    },

    /// The document ended with selection sets still open.
    UnclosedSelectionSet {
        depth: usize,
    },
}
