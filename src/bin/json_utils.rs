use serde_json::{json, Value};

use crate::bin::border::HandRule;
use crate::bin::error::{MazeError, Result};
use crate::bin::grid::Position;

pub fn parse_json(msg: &str) -> std::result::Result<Value, serde_json::Error> {
    serde_json::from_str(msg)
}

/// Chemin parcouru au format JSON : `{"rule": .., "path": [[r, c], ..], "length": n}`.
pub fn path_to_json(rule: HandRule, path: &[Position]) -> Value {
    let cells: Vec<Value> = path.iter().map(|&(row, col)| json!([row, col])).collect();
    json!({
        "rule": rule.name(),
        "path": cells,
        "length": path.len(),
    })
}

/// Paramètres d'une requête `Trace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRequest {
    pub maze: String,
    pub row: usize,
    pub col: usize,
    pub rule: HandRule,
}

pub fn extract_validate_maze(json: &Value) -> Option<&str> {
    json.get("Validate")?.get("maze")?.as_str()
}

pub fn extract_trace_request(json: &Value) -> Option<Result<TraceRequest>> {
    let trace = json.get("Trace")?;
    Some(parse_trace_request(trace))
}

fn parse_trace_request(trace: &Value) -> Result<TraceRequest> {
    let maze = trace
        .get("maze")
        .and_then(Value::as_str)
        .ok_or_else(|| MazeError::InvalidRequest("Trace.maze must be a string".to_string()))?;
    let row = position_field(trace, "row")?;
    let col = position_field(trace, "col")?;
    let rule_name = trace.get("rule").and_then(Value::as_str).unwrap_or("right");
    let rule = HandRule::from_name(rule_name)
        .ok_or_else(|| MazeError::InvalidRequest(format!("unknown rule `{}`", rule_name)))?;
    Ok(TraceRequest {
        maze: maze.to_string(),
        row,
        col,
        rule,
    })
}

fn position_field(trace: &Value, name: &str) -> Result<usize> {
    trace
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| MazeError::InvalidRequest(format!("Trace.{} must be a positive integer", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_json() {
        let value = path_to_json(HandRule::RightHand, &[(1, 1), (1, 2)]);
        assert_eq!(value["rule"], "right");
        assert_eq!(value["length"], 2);
        assert_eq!(value["path"], json!([[1, 1], [1, 2]]));
    }

    #[test]
    fn test_extract_validate() {
        let msg = parse_json(r#"{"Validate": {"maze": "1 1\n0\n"}}"#).unwrap();
        assert_eq!(extract_validate_maze(&msg), Some("1 1\n0\n"));
        assert_eq!(extract_validate_maze(&json!({"Validate": 3})), None);
    }

    #[test]
    fn test_extract_trace() {
        let msg = parse_json(r#"{"Trace": {"maze": "1 1\n3\n", "row": 1, "col": 1, "rule": "left"}}"#).unwrap();
        let request = extract_trace_request(&msg).unwrap().unwrap();
        assert_eq!(request.row, 1);
        assert_eq!(request.rule, HandRule::LeftHand);

        let defaulted = json!({"Trace": {"maze": "", "row": 2, "col": 3}});
        assert_eq!(
            extract_trace_request(&defaulted).unwrap().unwrap().rule,
            HandRule::RightHand
        );

        assert!(extract_trace_request(&json!({"Other": {}})).is_none());
    }

    #[test]
    fn test_bad_trace_requests() {
        let negative = json!({"Trace": {"maze": "", "row": -1, "col": 1}});
        assert!(matches!(
            extract_trace_request(&negative),
            Some(Err(MazeError::InvalidRequest(_)))
        ));
        let bad_rule = json!({"Trace": {"maze": "", "row": 1, "col": 1, "rule": "up"}});
        assert!(matches!(
            extract_trace_request(&bad_rule),
            Some(Err(MazeError::InvalidRequest(_)))
        ));
    }
}
