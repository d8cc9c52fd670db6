use calc_core::{ErrorKind, EvaluationResult};
use clap::ValueEnum;
use serde::Serialize;

/// Output format of one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct EvaluationReport<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
}

/// Renders the outcome of evaluating `expression`.
pub fn render_evaluation(
    expression: &str,
    result: &EvaluationResult<f64>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(match result {
            Ok(value) => value.to_string(),
            Err(e) => format!("error: {}", e),
        }),
        OutputFormat::Json => {
            let report = match result {
                Ok(value) => EvaluationReport {
                    expression,
                    value: Some(*value),
                    error: None,
                    kind: None,
                },
                Err(e) => EvaluationReport {
                    expression,
                    value: None,
                    error: Some(e.to_string()),
                    kind: Some(e.kind()),
                },
            };
            serde_json::to_string(&report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::evaluate;
    use serde_json::{Value, json};

    #[test]
    fn test_render_text() {
        let rendered = render_evaluation("7/2", &evaluate("7/2"), OutputFormat::Text).unwrap();
        assert_eq!(rendered, "3.5");

        let rendered = render_evaluation("1/0", &evaluate("1/0"), OutputFormat::Text).unwrap();
        assert_eq!(rendered, "error: division by zero");
    }

    #[test]
    fn test_render_json() {
        let rendered = render_evaluation("1+1", &evaluate("1+1"), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, json!({ "expression": "1+1", "value": 2.0 }));

        let rendered = render_evaluation("(1", &evaluate("(1"), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["kind"], "unbalanced_parens");
        assert_eq!(
            value["error"],
            "unbalanced parentheses: missing ')' at position 2"
        );
        assert!(value.get("value").is_none());
    }
}
