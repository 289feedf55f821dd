//! Tool names, arguments and results

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;

pub const FETCH_NEWS: &str = "fetch_news_mcp";
pub const GEN_VID_TRANS: &str = "gen_vid_trans_mcp";

/// Arguments shared by both tools
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NewsQuery {
    /// Topic, keyword, or phrase to report on
    pub query: String,
}

/// Map a short alias to the advertised tool name
pub fn canonical_name(name: &str) -> Option<&'static str> {
    match name {
        "fetch_news" => Some(FETCH_NEWS),
        "gen_vid_trans" => Some(GEN_VID_TRANS),
        _ => None,
    }
}

/// Text content on success; reported errors (if any) on a null result
pub fn tool_result(output: Option<String>, errors: Vec<String>) -> CallToolResult {
    match output {
        Some(text) => CallToolResult::success(vec![Content::text(text)]),
        None if errors.is_empty() => CallToolResult::success(Vec::new()),
        None => CallToolResult::error(errors.into_iter().map(Content::text).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(result: &CallToolResult) -> Vec<String> {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    #[test]
    fn test_aliases() {
        assert_eq!(canonical_name("fetch_news"), Some(FETCH_NEWS));
        assert_eq!(canonical_name("gen_vid_trans"), Some(GEN_VID_TRANS));
        assert_eq!(canonical_name(FETCH_NEWS), None);
        assert_eq!(canonical_name("read_file"), None);
    }

    #[test]
    fn test_success_result() {
        let result = tool_result(Some("Breaking".to_string()), Vec::new());
        assert_eq!(result.is_error, Some(false));
        assert_eq!(texts(&result), vec!["Breaking"]);
    }

    #[test]
    fn test_null_result_carries_errors() {
        let result = tool_result(None, vec!["Error fetching news: boom".to_string()]);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(texts(&result), vec!["Error fetching news: boom"]);

        let silent = tool_result(None, Vec::new());
        assert_eq!(silent.is_error, Some(false));
        assert!(silent.content.is_empty());
    }

    #[test]
    fn test_query_schema_requires_query() {
        let schema = serde_json::to_value(schemars::schema_for!(NewsQuery)).unwrap();
        assert_eq!(schema["required"], serde_json::json!(["query"]));
    }
}
