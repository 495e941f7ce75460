//! Typed model of the SPARQL JSON results format and its flattening.
//!
//! The store answers a query with
//! `{"results": {"bindings": [{<var>: {"value": ..., "type": ..., ...}}]}}`.
//! Callers only ever want the bound value, so flattening keeps the `"value"`
//! field per variable and drops the datatype/type metadata.

use std::collections::HashMap;

use serde::Deserialize;

/// One flattened result row: binding variable name to its bound value.
pub type ResultRow = HashMap<String, String>;

/// Top-level SPARQL JSON results document.
#[derive(Debug, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}

#[derive(Debug, Deserialize)]
pub struct SparqlResults {
    pub bindings: Vec<HashMap<String, BindingValue>>,
}

/// A single bound term. Fields other than `value` (datatype, language tag,
/// term type) are accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct BindingValue {
    pub value: String,
}

impl SparqlResponse {
    /// Flatten the bindings into rows, preserving upstream order.
    pub fn into_rows(self) -> Vec<ResultRow> {
        self.results
            .bindings
            .into_iter()
            .map(|binding| {
                binding
                    .into_iter()
                    .map(|(var, term)| (var, term.value))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_keeps_only_value_field() {
        let response: SparqlResponse = serde_json::from_str(
            r#"{"results":{"bindings":[
                {"age":{"value":"34","datatype":"http://www.w3.org/2001/XMLSchema#int","type":"literal"},
                 "sex":{"value":"M","type":"literal"}}
            ]}}"#,
        )
        .unwrap();
        let rows = response.into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["age"], "34");
        assert_eq!(rows[0]["sex"], "M");
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_flatten_preserves_binding_order() {
        let response: SparqlResponse = serde_json::from_str(
            r#"{"results":{"bindings":[
                {"dataset":{"value":"b"}},
                {"dataset":{"value":"a"}},
                {"dataset":{"value":"c"}}
            ]}}"#,
        )
        .unwrap();
        let rows = response.into_rows();
        let order: Vec<&str> = rows.iter().map(|r| r["dataset"].as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_bindings_flatten_to_empty_vec() {
        let response: SparqlResponse =
            serde_json::from_str(r#"{"results":{"bindings":[]}}"#).unwrap();
        assert!(response.into_rows().is_empty());
    }

    #[test]
    fn test_missing_results_key_is_a_parse_error() {
        let result: Result<SparqlResponse, _> = serde_json::from_str(r#"{"head":{}}"#);
        assert!(result.is_err());
    }
}
