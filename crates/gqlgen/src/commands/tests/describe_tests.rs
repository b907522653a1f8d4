use crate::commands::CommandEnum;
use crate::commands::describe::DescribeReport;
use crate::commands::describe::normalize_file_exts;
use crate::commands::describe::write_report_files;
use crate::commands::tests::parse_command;
use gqlgen_core::ParsedQuery;
use std::path::Path;
use std::path::PathBuf;

const DEVICE_QUERY: &str = "\
query Device($device_name: String!) {
  InfraDevice(name__value: $device_name) {
    edges {
      node {
        name {
          value
        }
      }
    }
  }
}
";

const DEVICE_MUTATION: &str = "\
mutation DeviceUpsert($device_name: String!) {
  InfraDevice(name__value: $device_name) {
    edges {
      node {
        id
      }
    }
  }
}
";

fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gqlgen-describe-{test_name}-{}",
        std::process::id(),
    ));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn find_paths(args: &[&str]) -> Vec<PathBuf> {
    let CommandEnum::Describe(cmd) = parse_command(args) else {
        panic!("expected the describe command");
    };
    cmd.find_document_paths().unwrap()
}

fn relative_to(paths: Vec<PathBuf>, dir: &Path) -> Vec<String> {
    paths.iter()
        .map(|path| path.strip_prefix(dir).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn file_exts_are_normalized_to_dotted_form() {
    let exts = normalize_file_exts(&["graphql".to_string(), ".gql".to_string()]);

    assert!(exts.contains(".graphql"));
    assert!(exts.contains(".gql"));
    assert_eq!(exts.len(), 2);
}

#[test]
fn directories_are_walked_for_matching_documents() {
    let dir = scratch_dir("walk");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    std::fs::write(dir.join("b.gql"), DEVICE_MUTATION).unwrap();
    std::fs::write(dir.join("a.graphql"), DEVICE_QUERY).unwrap();
    std::fs::write(dir.join("notes.txt"), "not a document").unwrap();
    std::fs::write(dir.join("nested").join("c.graphql"), DEVICE_QUERY).unwrap();

    let paths = find_paths(&["describe", dir.to_str().unwrap()]);

    assert_eq!(
        relative_to(paths, &dir),
        vec!["a.graphql", "b.gql", "nested/c.graphql"],
    );
    std::fs::remove_dir_all(&dir).unwrap();
}

/// A single explicit file is described even when its extension is not listed.
#[test]
fn single_file_with_other_extension_is_accepted() {
    let dir = scratch_dir("single");
    let file_path = dir.join("device.query");
    std::fs::write(&file_path, DEVICE_QUERY).unwrap();

    let paths = find_paths(&["describe", file_path.to_str().unwrap()]);

    assert_eq!(paths, vec![file_path]);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn report_lists_queries_as_data_sources_and_mutations_as_resources() {
    let report = DescribeReport::new(vec![
        ParsedQuery::from_str(DEVICE_QUERY).unwrap(),
        ParsedQuery::from_str(DEVICE_MUTATION).unwrap(),
    ]);

    assert_eq!(report.data_sources, vec!["device"]);
    assert_eq!(report.resources, vec!["deviceUpsert"]);
    assert_eq!(report.documents.len(), 2);
}

#[test]
fn report_serializes_descriptor_fields() {
    let report = DescribeReport::new(vec![
        ParsedQuery::from_str(DEVICE_MUTATION).unwrap(),
    ]);
    let json = serde_json::to_value(&report).unwrap();

    let document = &json["documents"][0];
    assert_eq!(document["name"], "deviceUpsert");
    assert_eq!(document["operation_kind"], "mutation");
    assert_eq!(document["response_shape"], "single");
    assert_eq!(
        document["derived_fields"][0]["query_path"],
        "InfraDevice.Edges[0].Node.GetId()",
    );
    assert_eq!(document["derived_fields"][0]["access"], "read_only");
}

#[test]
fn output_dir_receives_descriptor_per_document() {
    let dir = scratch_dir("output");
    let report = DescribeReport::new(vec![
        ParsedQuery::from_str(DEVICE_QUERY).unwrap(),
        ParsedQuery::from_str(DEVICE_MUTATION).unwrap(),
    ]);

    write_report_files(&report, &dir).unwrap();

    assert!(dir.join("device.json").is_file());
    assert!(dir.join("deviceUpsert.json").is_file());
    let registration: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.join("provider.json")).unwrap(),
    ).unwrap();
    assert_eq!(registration["data_sources"][0], "device");
    assert_eq!(registration["resources"][0], "deviceUpsert");
    std::fs::remove_dir_all(&dir).unwrap();
}

/// Two documents with the same operation name would write the same
/// `<name>.json`, so nothing is written and the run fails.
#[test]
fn output_dir_rejects_duplicate_document_names() {
    let dir = scratch_dir("duplicates");
    let output_dir = dir.join("out");
    let report = DescribeReport::new(vec![
        ParsedQuery::from_str(DEVICE_QUERY).unwrap(),
        ParsedQuery::from_str(DEVICE_MUTATION).unwrap(),
        ParsedQuery::from_str(DEVICE_QUERY).unwrap(),
    ]);
    assert_eq!(report.duplicate_names(), vec!["device"]);

    let err = write_report_files(&report, &output_dir).unwrap_err();

    assert!(err.to_string().contains("`device`"));
    assert!(!output_dir.exists());
    std::fs::remove_dir_all(&dir).unwrap();
}
