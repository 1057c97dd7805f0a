//! Lenient decoding of Context7 search payloads.
//!
//! The search endpoint is loosely typed: field casing varies, numbers arrive as
//! integers, floats or strings, and bodies occasionally carry trailing commas.
//! Rather than failing the whole response, each field falls back to its default.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use super::types::{SearchResponse, SearchResult, TrustScore};

/// Decode a search response body.
///
/// Only malformed JSON is an error; a missing `results` array yields an empty
/// response and non-object entries are skipped.
pub(crate) fn parse_search_response(body: &str) -> Result<SearchResponse, serde_json::Error> {
    let cleaned = strip_trailing_commas(body);
    let root: Value = serde_json::from_str(&cleaned)?;

    let results = root
        .as_object()
        .and_then(|obj| field(obj, "results"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(search_result)
                .collect()
        })
        .unwrap_or_default();

    Ok(SearchResponse { results })
}

fn search_result(obj: &Map<String, Value>) -> SearchResult {
    SearchResult {
        id: text(obj, "id").unwrap_or_default(),
        title: text(obj, "title").unwrap_or_default(),
        description: text(obj, "description").unwrap_or_default(),
        branch: text(obj, "branch"),
        last_update_date: text(obj, "lastUpdateDate").and_then(|s| parse_date(&s)),
        state: text(obj, "state"),
        total_tokens: count(obj, "totalTokens"),
        total_snippets: field(obj, "totalSnippets")
            .filter(|v| !v.is_null())
            .map(|v| number(v).map(|n| n as i64).unwrap_or(0)),
        total_pages: count(obj, "totalPages"),
        stars: field(obj, "stars")
            .and_then(number)
            .filter(|n| *n >= 0.0)
            .map(|n| n as u64),
        trust_score: field(obj, "trustScore").and_then(number).map(TrustScore),
    }
}

/// Look up a field, falling back to a case-insensitive match.
fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name).or_else(|| {
        obj.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

fn text(obj: &Map<String, Value>, name: &str) -> Option<String> {
    match field(obj, name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a JSON number or numeric string as a finite `f64`.
fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Non-negative count; anything unusable becomes zero.
fn count(obj: &Map<String, Value>, name: &str) -> u64 {
    field(obj, name)
        .and_then(number)
        .filter(|n| *n >= 0.0)
        .map(|n| n as u64)
        .unwrap_or(0)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Drop commas that directly precede `]` or `}`, ignoring string contents.
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().copied().find(|ch| !ch.is_whitespace());
                if !matches!(next, Some(']') | Some('}')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_commas_removed_outside_strings() {
        assert_eq!(strip_trailing_commas(r#"[1, 2, ]"#), "[1, 2 ]");
        assert_eq!(strip_trailing_commas(r#"{"a": 1,}"#), r#"{"a": 1}"#);
        assert_eq!(strip_trailing_commas(r#"{"a": ",}"}"#), r#"{"a": ",}"}"#);
        assert_eq!(strip_trailing_commas(r#"{"a": "\",]",}"#), r#"{"a": "\",]"}"#);
    }

    #[test]
    fn case_insensitive_fields() {
        let body = r#"{"Results": [{"ID": "/a/b", "Title": "A", "TrustScore": 7}]}"#;
        let resp = parse_search_response(body).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].id, "/a/b");
        assert_eq!(resp.results[0].title, "A");
        assert_eq!(resp.results[0].trust_score, Some(TrustScore(7.0)));
    }

    #[test]
    fn exact_case_preferred_over_other_casing() {
        let body = r#"{"results": [{"title": "exact", "TITLE": "loud"}]}"#;
        let resp = parse_search_response(body).unwrap();
        assert_eq!(resp.results[0].title, "exact");
    }

    #[test]
    fn numeric_fields_fall_back_to_defaults() {
        let body = r#"{"results": [{
            "id": "/a/b",
            "totalTokens": "lots",
            "totalSnippets": {"nested": true},
            "totalPages": -3,
            "stars": "n/a",
            "trustScore": "high"
        }]}"#;
        let resp = parse_search_response(body).unwrap();
        let r = &resp.results[0];
        assert_eq!(r.total_tokens, 0);
        assert_eq!(r.total_snippets, Some(0));
        assert_eq!(r.total_pages, 0);
        assert_eq!(r.stars, None);
        assert_eq!(r.trust_score, None);
    }

    #[test]
    fn numbers_accept_int_float_and_string() {
        let body = r#"{"results": [{
            "totalTokens": 1200.0,
            "totalSnippets": "42",
            "stars": 1500,
            "trustScore": 8.5
        }]}"#;
        let resp = parse_search_response(body).unwrap();
        let r = &resp.results[0];
        assert_eq!(r.total_tokens, 1200);
        assert_eq!(r.total_snippets, Some(42));
        assert_eq!(r.stars, Some(1500));
        assert_eq!(r.trust_score, Some(TrustScore(8.5)));
    }

    #[test]
    fn missing_snippets_is_absent() {
        let resp = parse_search_response(r#"{"results": [{"id": "/a/b"}]}"#).unwrap();
        let r = &resp.results[0];
        assert_eq!(r.total_snippets, None);
        assert_eq!(r.trust_score, None);
        assert_eq!(r.branch, None);
    }

    #[test]
    fn dates_parse_or_drop() {
        let body = r#"{"results": [
            {"lastUpdateDate": "2025-04-01T10:20:30.123Z"},
            {"lastUpdateDate": "2025-04-01T10:20:30"},
            {"lastUpdateDate": "yesterday"}
        ]}"#;
        let resp = parse_search_response(body).unwrap();
        assert!(resp.results[0].last_update_date.is_some());
        assert!(resp.results[1].last_update_date.is_some());
        assert!(resp.results[2].last_update_date.is_none());
    }

    #[test]
    fn missing_results_is_empty() {
        assert!(parse_search_response("{}").unwrap().is_empty());
        assert!(parse_search_response(r#"{"results": null}"#).unwrap().is_empty());
    }

    #[test]
    fn non_object_entries_skipped() {
        let resp = parse_search_response(r#"{"results": [1, "x", {"id": "/a/b"}]}"#).unwrap();
        assert_eq!(resp.results.len(), 1);
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(parse_search_response("{\"results\": [").is_err());
        assert!(parse_search_response("not json").is_err());
    }

    #[test]
    fn order_preserved() {
        let body = r#"{"results": [{"id": "/z/z"}, {"id": "/a/a"}, {"id": "/m/m"},]}"#;
        let ids: Vec<_> = parse_search_response(body)
            .unwrap()
            .results
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["/z/z", "/a/a", "/m/m"]);
    }
}
