//! Writes the emitter's line buffer to a `.lp` file and parses a GLPK
//! `--cpxlp -o <file>` textual result report back.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::LpFileError;

/// The parsed result of a solved schedule: the minimized objective value
/// and every `<variable, value>` assignment GLPK reported.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    /// The minimized objective value.
    pub objective: f64,
    /// Variable assignments, keyed by variable name.
    pub assignments: BTreeMap<String, f64>,
}

/// Writes `lines` to `path`, LF-terminated, UTF-8, atomically: the content
/// is written to a temp file in the same directory and then renamed into
/// place, so a failure partway through leaves no partial `.lp` file.
pub fn write_lp(path: &Path, lines: &[String]) -> Result<(), LpFileError> {
    let mut content = lines.join("\n");
    content.push('\n');

    let tmp_path = sibling_tmp_path(path);
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

fn sibling_tmp_path(path: &Path) -> std::path::PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let tmp_name = format!(".{file_name}.tmp-{}", std::process::id());
    path.with_file_name(tmp_name)
}

/// Parses a GLPK result report, extracting the `Objective:` summary line
/// and every `<k> <name> * <value> ...` variable-assignment line.
pub fn read_glpk_result(path: &Path) -> Result<SolverResult, LpFileError> {
    let content = std::fs::read_to_string(path)?;
    parse_glpk_result(&content)
}

fn parse_glpk_result(content: &str) -> Result<SolverResult, LpFileError> {
    let mut objective = None;
    let mut assignments = BTreeMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("Objective:") {
            objective = Some(parse_objective_value(rest, trimmed)?);
            continue;
        }
        if let Some(assignment) = parse_assignment_line(trimmed) {
            let (name, value) = assignment?;
            assignments.insert(name, value);
        }
    }

    Ok(SolverResult {
        objective: objective.unwrap_or(0.0),
        assignments,
    })
}

/// `"Objective:"` lines look like `"Objective: obj = 7 (MINimum)"`.
fn parse_objective_value(rest: &str, whole_line: &str) -> Result<f64, LpFileError> {
    rest.split('=')
        .nth(1)
        .and_then(|v| v.split_whitespace().next())
        .and_then(|v| v.parse::<f64>().ok())
        .ok_or_else(|| LpFileError::UnrecognizedLine(whole_line.to_string()))
}

/// Variable rows look like `"1 x_0_0 * 1 0 1"`: an index, a name, a literal
/// `*`, then the activity value. Returns `None` for lines that don't start
/// with an integer index (table headers, separators, section titles).
fn parse_assignment_line(line: &str) -> Option<Result<(String, f64), LpFileError>> {
    let mut tokens = line.split_whitespace();
    tokens.next()?.parse::<u64>().ok()?;
    let name = tokens.next()?;
    let star = tokens.next()?;
    if star != "*" {
        return None;
    }
    let value = tokens.next()?;
    match value.parse::<f64>() {
        Ok(v) => Some(Ok((name.to_string(), v))),
        Err(_) => Some(Err(LpFileError::UnrecognizedLine(line.to_string()))),
    }
}
