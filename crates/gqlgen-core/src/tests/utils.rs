//! Shared query documents and helpers for the parsing tests.

use crate::ParsedQuery;

/// A point lookup: the root selection is filtered by a required variable.
pub(super) const DEVICE_QUERY: &str = "\
query Device($device_name: String!) {
  InfraDevice(name__value: $device_name) {
    edges {
      node {
        id
        name {
          value
        }
        role {
          value
          id
        }
        platform {
          node {
            id
          }
        }
        primary_address {
          node {
            id
          }
        }
      }
    }
  }
}
";

/// Same selections as [`DEVICE_QUERY`], declared as a mutation document.
pub(super) const DEVICE_MUTATION: &str = "\
mutation Device($device_name: String!) {
  InfraDevice(name__value: $device_name) {
    edges {
      node {
        id
        name {
          value
        }
        role {
          value
          id
        }
        platform {
          node {
            id
          }
        }
        primary_address {
          node {
            id
          }
        }
      }
    }
  }
}
";

/// A list query: the root selection has no required variable.
pub(super) const DEVICES_QUERY: &str = "\
query Devices {
  InfraDevice {
    edges {
      node {
        name {
          value
        }
        device_type {
          node {
            id
          }
        }
      }
    }
  }
}
";

pub(super) fn parse(doc: &str) -> ParsedQuery {
    ParsedQuery::from_str(doc).unwrap()
}

pub(super) fn field_names(query: &ParsedQuery) -> Vec<&str> {
    query.fields().iter().map(|field| field.dotted_name()).collect()
}

pub(super) fn query_paths(query: &ParsedQuery) -> Vec<&str> {
    query.derived_fields().iter().map(|field| field.query_path()).collect()
}
