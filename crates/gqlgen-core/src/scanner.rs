use crate::Field;
use crate::ScanDiagnostic;
use crate::prefix_stack::PrefixStack;
use crate::prefix_stack::SEPARATOR;
use indexmap::IndexSet;

/// Suffix of a line that opens a selection set (`edges {`).
const OPENING_MARKER: &str = " {";

/// A line that closes the innermost selection set.
const CLOSING_MARKER: &str = "}";

/// A closing brace seen while the rendered prefix holds fewer separators than
/// this ends the scan.
const MIN_SEPARATORS_TO_CONTINUE: usize = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ScanState {
    Idle,
    InBlock(usize),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ScanOutput {
    pub diagnostics: Vec<ScanDiagnostic>,
    pub fields: Vec<Field>,

    /// Selection-set names and leaf tokens that contain a separator, in the
    /// order they were first seen. The name segmenter never splits these.
    pub immutable_tokens: IndexSet<String>,
}

/// Walks the selection lines below a document's root line, tracking nesting
/// with a [`PrefixStack`] and emitting one [`Field`] per leaf selection.
#[derive(Debug)]
pub(crate) struct StructuralScanner {
    current_prefix: String,
    output: ScanOutput,
    prefix: PrefixStack,
}
impl StructuralScanner {
    fn new() -> Self {
        Self {
            current_prefix: String::new(),
            output: ScanOutput::default(),
            prefix: PrefixStack::new(),
        }
    }

    /// Scan `lines`, where `lines[0]` is line `first_line_number` (1-based) of
    /// the document.
    pub fn scan(lines: &[&str], first_line_number: usize) -> ScanOutput {
        let mut scanner = Self::new();

        for (idx, raw_line) in lines.iter().enumerate() {
            let line = raw_line.trim();
            let line_number = first_line_number + idx;

            if let Some(name) = line.strip_suffix(OPENING_MARKER) {
                scanner.open_selection_set(name.trim());
            } else if line == CLOSING_MARKER {
                if scanner.prefix.separator_count() < MIN_SEPARATORS_TO_CONTINUE {
                    log::trace!(
                        "Stopping scan at shallow closing brace on line \
                        {line_number}.",
                    );
                    scanner.note_ignored_tail(&lines[idx + 1..], line_number);
                    return scanner.finish();
                }
                if let Some(prefix) = scanner.prefix.pop() {
                    scanner.current_prefix = prefix;
                }
            } else if line.is_empty() {
                continue
            } else {
                match scanner.state() {
                    ScanState::InBlock(depth) => {
                        log::trace!("Leaf selection at depth {depth}: `{line}`.");
                        scanner.add_leaf(line);
                    },
                    ScanState::Idle => scanner.output.diagnostics.push(
                        ScanDiagnostic::SelectionOutsideBlock {
                            line: line_number,
                            text: line.to_string(),
                        },
                    ),
                }
            }
        }

        let depth = scanner.prefix.depth();
        if depth > 0 {
            scanner.output.diagnostics.push(
                ScanDiagnostic::UnclosedSelectionSet { depth },
            );
        }
        scanner.finish()
    }

    fn state(&self) -> ScanState {
        match self.prefix.depth() {
            0 => ScanState::Idle,
            depth => ScanState::InBlock(depth),
        }
    }

    fn open_selection_set(&mut self, name: &str) {
        self.remember_if_compound(name);
        self.current_prefix = self.prefix.push(name);
    }

    fn add_leaf(&mut self, line: &str) {
        let Some(token) = line.split_whitespace().next() else {
            return
        };
        self.remember_if_compound(token);
        self.output.fields.push(Field::new(
            format!("{}{token}", self.current_prefix),
        ));
    }

    fn remember_if_compound(&mut self, token: &str) {
        if token.contains(SEPARATOR) {
            self.output.immutable_tokens.insert(token.to_string());
        }
    }

    /// Records a diagnostic if anything other than closing braces follows the
    /// point where scanning stopped.
    fn note_ignored_tail(&mut self, tail: &[&str], stopped_at_line: usize) {
        let first_ignored =
            tail.iter().position(|line| {
                let line = line.trim();
                !line.is_empty() && line != CLOSING_MARKER
            });

        if let Some(offset) = first_ignored {
            self.output.diagnostics.push(
                ScanDiagnostic::TrailingContentIgnored {
                    stopped_at_line,
                    first_ignored_line: stopped_at_line + offset + 1,
                },
            );
        }
    }

    fn finish(self) -> ScanOutput {
        for diagnostic in &self.output.diagnostics {
            log::debug!("Scan diagnostic: {diagnostic:?}");
        }
        self.output
    }
}
