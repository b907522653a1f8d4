use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqlgen_core::OperationKind;
use gqlgen_core::ParseQueryError;
use gqlgen_core::ParsedQuery;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

const PROVIDER_REGISTRATION_FILE_NAME: &str = "provider.json";

#[derive(Debug, clap::Args)]
pub(crate) struct DescribeCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Write one `<name>.json` descriptor per document, plus a \
             `provider.json` registration list, into this directory instead \
             of printing a single report to stdout.",
        long,
    )]
    output_dir: Option<PathBuf>,

    #[arg(
        help="Skip documents that fail to parse instead of failing the run.",
        long,
    )]
    skip_invalid: bool,

    #[arg(
        help="Paths to one or more GraphQL documents or directories containing \
             GraphQL documents to describe.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for DescribeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match self.find_document_paths() {
            Ok(file_paths) => file_paths,
            Err(errors) => return CommandResult::stderr(format_args!(
                "{} Errors while searching for GraphQL documents: {errors:#?}",
                output_utils::RED_X,
            )),
        };

        log::debug!("Found {} GraphQL documents to describe.", file_paths.len());

        // Each document owns its parsing state, so they parse independently.
        // Collecting keeps the input order.
        let parse_results: Vec<(&PathBuf, Result<ParsedQuery, ParseQueryError>)> =
            file_paths.par_iter()
                .map(|path| (path, ParsedQuery::from_file(path)))
                .collect();

        let mut queries = vec![];
        let mut failures = vec![];
        for (path, result) in parse_results {
            match result {
                Ok(query) => {
                    for diagnostic in query.diagnostics() {
                        log::warn!("{path:?}: {diagnostic:?}");
                    }
                    queries.push(query);
                },
                Err(e) if self.skip_invalid => log::warn!(
                    "{} Skipping {path:?}: {e}",
                    output_utils::WARNING_SIGN,
                ),
                Err(e) => failures.push(format!("{path:?}: {e}")),
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to parse {} documents:\n  * {}",
                output_utils::RED_X,
                failures.len(),
                failures.join("\n  * "),
            ));
        }

        let report = DescribeReport::new(queries);
        let output = match &self.output_dir {
            Some(output_dir) => write_report_files(&report, output_dir),
            None => serde_json::to_string_pretty(&report)
                .context("Failed to serialize descriptor report"),
        };

        match output {
            Ok(stdout) => CommandResult::stdout(format_args!("{stdout}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}
impl DescribeCmd {
    /// Find all GraphQL documents recursively located at or under each path
    /// passed as an arg, sorted by file name within each directory.
    pub(crate) fn find_document_paths(&self) -> Result<Vec<PathBuf>, Vec<Box<dyn Error>>> {
        let mut errors: Vec<Box<dyn Error>> = vec![];
        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            let walker =
                WalkDir::new(path.as_path())
                    .follow_links(true)
                    .sort_by_file_name();
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }
                if has_graphql_ext(entry_path, &graphql_file_exts) {
                    log::trace!("Found document at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A single file passed explicitly is described whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to describe {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        if errors.is_empty() {
            Ok(file_paths)
        } else {
            Err(errors)
        }
    }
}

/// Normalize extensions to their dotted form (`graphql` -> `.graphql`).
pub(crate) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| graphql_file_exts.contains(&ext))
}

/// Everything the rendering stage needs: the descriptors plus the names to
/// register as data sources (queries) and resources (mutations).
#[derive(Debug, Serialize)]
pub(crate) struct DescribeReport {
    pub data_sources: Vec<String>,
    pub resources: Vec<String>,
    pub documents: Vec<ParsedQuery>,
}
impl DescribeReport {
    pub(crate) fn new(documents: Vec<ParsedQuery>) -> Self {
        let names_of = |kind: OperationKind| -> Vec<String> {
            documents.iter()
                .filter(|doc| doc.operation_kind() == kind)
                .map(|doc| doc.name().to_string())
                .collect()
        };

        Self {
            data_sources: names_of(OperationKind::Query),
            resources: names_of(OperationKind::Mutation),
            documents,
        }
    }

    /// Document names shared by more than one descriptor, in first-seen order.
    pub(crate) fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = vec![];
        for document in &self.documents {
            let name = document.name();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

#[derive(Debug, Serialize)]
struct ProviderRegistration<'a> {
    data_sources: &'a [String],
    resources: &'a [String],
}

/// Writes one `<name>.json` per descriptor plus the provider registration.
/// Fails before writing anything if two documents share a name, since their
/// descriptor files would collide.
pub(crate) fn write_report_files(
    report: &DescribeReport,
    output_dir: &Path,
) -> anyhow::Result<String> {
    let duplicates = report.duplicate_names();
    if !duplicates.is_empty() {
        anyhow::bail!(
            "Multiple documents share the operation name(s) {}; each \
            descriptor is written to `<name>.json`, so names must be unique",
            duplicates.iter()
                .map(|name| format!("`{name}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {output_dir:?}"))?;

    for document in &report.documents {
        let file_path = output_dir.join(format!("{}.json", document.name()));
        write_json(&file_path, document)?;
        log::info!("Wrote descriptor for `{}` to {file_path:?}.", document.name());
    }

    let registration = ProviderRegistration {
        data_sources: &report.data_sources,
        resources: &report.resources,
    };
    write_json(&output_dir.join(PROVIDER_REGISTRATION_FILE_NAME), &registration)?;

    Ok(format!(
        concat!(
            "{} Described GraphQL documents successfully:\n",
            "  * Wrote {} descriptors to {:?}.\n",
            "  * Registered {} data sources.\n",
            "  * Registered {} resources.",
        ),
        output_utils::GREEN_CHECK,
        report.documents.len(),
        output_dir,
        report.data_sources.len(),
        report.resources.len(),
    ))
}

fn write_json(file_path: &Path, value: &impl Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {file_path:?}"))?;
    std::fs::write(file_path, json)
        .with_context(|| format!("Failed to write {file_path:?}"))
}
