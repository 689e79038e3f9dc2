//! Parses the edgelist text format into [`EdgeSpec`] values for
//! [`hls_core::graph::Graph::from_edges`].
//!
//! Grounded on `networkx.read_edgelist`'s default `write_edgelist`
//! rendering: one edge per line, `root child key=value...`, blank lines and
//! `#`-prefixed lines skipped. Node enumeration order — which determines
//! which label becomes the source and which the sink — is first-seen order
//! while scanning top to bottom; `Graph::from_edges` derives that order
//! itself from the edge list, so this reader only needs to preserve line
//! order.

use std::path::Path;

use hls_core::graph::EdgeSpec;

use crate::error::EdgelistError;

/// Reads and parses an edgelist file at `path`.
pub fn read_file(path: &Path) -> Result<Vec<EdgeSpec>, EdgelistError> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses edgelist text into a list of [`EdgeSpec`] values, in line order.
pub fn parse_str(content: &str) -> Result<Vec<EdgeSpec>, EdgelistError> {
    let mut edges = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let root = tokens.next().ok_or(EdgelistError::MalformedLine { line: line_no })?;
        let child = tokens.next().ok_or(EdgelistError::MalformedLine { line: line_no })?;

        let mut attrs = std::collections::HashMap::new();
        for token in tokens {
            let (key, value) = token
                .split_once('=')
                .ok_or(EdgelistError::MalformedLine { line: line_no })?;
            attrs.insert(key.to_string(), value.to_string());
        }

        let field = |name: &str| -> Result<u32, EdgelistError> {
            let raw = attrs.get(name).ok_or_else(|| EdgelistError::MissingField {
                line: line_no,
                field: name.to_string(),
            })?;
            raw.parse::<u32>().map_err(|_| EdgelistError::InvalidValue {
                line: line_no,
                field: name.to_string(),
                value: raw.clone(),
            })
        };

        edges.push(EdgeSpec {
            root: root.to_string(),
            child: child.to_string(),
            root_unit: field("root")?,
            child_unit: field("child")?,
            root_cost: field("root_cost")?,
            child_cost: field("child_cost")?,
        });
    }

    if edges.is_empty() {
        return Err(EdgelistError::Empty);
    }

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_edge() {
        let edges = parse_str("s v1 root=0 child=3 root_cost=0 child_cost=3\n").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].root, "s");
        assert_eq!(edges[0].child, "v1");
        assert_eq!(edges[0].child_unit, 3);
        assert_eq!(edges[0].child_cost, 3);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let content = "\n# a comment\ns v1 root=0 child=3 root_cost=0 child_cost=3\n\n";
        let edges = parse_str(content).unwrap();
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn attribute_order_is_flexible() {
        let edges = parse_str("s v1 child_cost=3 root=0 child=3 root_cost=0\n").unwrap();
        assert_eq!(edges[0].child_cost, 3);
        assert_eq!(edges[0].root_unit, 0);
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = parse_str("s v1 root=0 child=3 root_cost=0\n").unwrap_err();
        assert!(matches!(
            err,
            EdgelistError::MissingField { field, .. } if field == "child_cost"
        ));
    }

    #[test]
    fn invalid_value_is_an_error() {
        let err = parse_str("s v1 root=x child=3 root_cost=0 child_cost=3\n").unwrap_err();
        assert!(matches!(err, EdgelistError::InvalidValue { field, .. } if field == "root"));
    }

    #[test]
    fn missing_child_label_is_malformed() {
        let err = parse_str("s\n").unwrap_err();
        assert!(matches!(err, EdgelistError::MalformedLine { line: 1 }));
    }

    #[test]
    fn empty_content_is_an_error() {
        let err = parse_str("\n# only a comment\n").unwrap_err();
        assert!(matches!(err, EdgelistError::Empty));
    }

    #[test]
    fn line_numbers_are_one_based_and_account_for_skipped_lines() {
        let content = "# header\ns v1 root=0 child=3 root_cost=0\n";
        let err = parse_str(content).unwrap_err();
        assert!(matches!(err, EdgelistError::MissingField { line: 2, .. }));
    }
}
