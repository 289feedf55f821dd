use newsreel_llm::{NewsPipeline, NoticeCollector};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::tool::ToolCallContext;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_router, ErrorData, RoleServer, ServerHandler};
use tracing::{debug, info};

use crate::tools::{canonical_name, tool_result, NewsQuery};

pub const SERVER_NAME: &str = "newsreel";

pub const SERVER_INSTRUCTIONS: &str = "This tool is for fetching news and generating video scripts";

/// MCP server exposing the news pipeline as tools
#[derive(Clone)]
pub struct NewsServer {
    pipeline: NewsPipeline,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NewsServer {
    pub fn new(pipeline: NewsPipeline) -> Self {
        Self {
            pipeline,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "fetch_news_mcp",
        description = "Fetch a short, factual summary of the latest news about a topic. Pass 'query' (topic, keyword, or phrase)."
    )]
    async fn fetch_news(&self, Parameters(args): Parameters<NewsQuery>) -> Result<CallToolResult, ErrorData> {
        info!("Tool call: fetch_news_mcp (query: {:?})", args.query);

        let reporter = NoticeCollector::new();
        let news = self.pipeline.summarize(&args.query, &reporter).await;
        Ok(tool_result(news, reporter.drain()))
    }

    #[tool(
        name = "gen_vid_trans_mcp",
        description = "Fetch the latest news about a topic and turn it into a 100-120 word short video script with a hook and a call to action. Pass 'query' (topic, keyword, or phrase)."
    )]
    async fn gen_vid_trans(&self, Parameters(args): Parameters<NewsQuery>) -> Result<CallToolResult, ErrorData> {
        info!("Tool call: gen_vid_trans_mcp (query: {:?})", args.query);

        let reporter = NoticeCollector::new();
        let script = self.pipeline.news_to_script(&args.query, &reporter).await;
        Ok(tool_result(script, reporter.drain()))
    }
}

impl ServerHandler for NewsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            ..ServerInfo::default()
        }
    }

    async fn call_tool(
        &self,
        mut request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        if let Some(name) = canonical_name(&request.name) {
            debug!("Tool alias {} resolved to {}", request.name, name);
            request.name = name.into();
        }

        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tool_router.list_all()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::framed;
    use newsreel_llm::testing::MockBackend;
    use rmcp::ServiceExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    const INITIALIZE: &str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"t","version":"0"}}}"#;
    const INITIALIZED: &str = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;

    fn server(news_reply: Value, script_reply: Value) -> (NewsServer, Arc<MockBackend>, Arc<MockBackend>) {
        let news = Arc::new(MockBackend::replying("news", news_reply));
        let script = Arc::new(MockBackend::replying("script", script_reply));
        let pipeline = NewsPipeline::new(news.clone(), script.clone());
        (NewsServer::new(pipeline), news, script)
    }

    /// Run a session over an in-memory pipe and collect replies until `expected` have arrived
    async fn exchange(server: NewsServer, input: &[u8], expected: usize) -> Vec<Value> {
        let (client, server_io) = tokio::io::duplex(64 * 1024);
        let (server_read, server_write) = tokio::io::split(server_io);
        let (client_read, mut client_write) = tokio::io::split(client);

        tokio::spawn(async move {
            if let Ok(running) = server.serve(framed(server_read, server_write)).await {
                let _ = running.waiting().await;
            }
        });

        client_write.write_all(input).await.unwrap();
        client_write.flush().await.unwrap();

        let mut lines = BufReader::new(client_read).lines();
        let mut frames = Vec::new();
        while frames.len() < expected {
            let line = tokio::time::timeout(Duration::from_secs(5), lines.next_line())
                .await
                .expect("timed out waiting for a reply")
                .unwrap()
                .expect("session closed early");
            frames.push(serde_json::from_str(&line).unwrap());
        }
        drop(client_write);
        frames
    }

    fn session(requests: &[&str]) -> Vec<u8> {
        let mut input = Vec::new();
        for line in [INITIALIZE, INITIALIZED].iter().chain(requests) {
            input.extend_from_slice(line.as_bytes());
            input.push(b'\n');
        }
        input
    }

    fn reply<'a>(frames: &'a [Value], id: i64) -> &'a Value {
        frames.iter().find(|f| f["id"] == json!(id)).unwrap()
    }

    #[test]
    fn test_server_info() {
        let (server, _, _) = server(json!({}), json!({}));
        let info = server.get_info();
        assert_eq!(info.server_info.name, "newsreel");
        assert_eq!(info.instructions.as_deref(), Some(SERVER_INSTRUCTIONS));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_tool_names() {
        let (server, _, _) = server(json!({}), json!({}));
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["fetch_news_mcp", "gen_vid_trans_mcp"]);
    }

    #[tokio::test]
    async fn test_fetch_news_passes_through() {
        let (server, _, script) = server(json!({ "content": " Breaking: topic X update. " }), json!({}));

        let result = server
            .fetch_news(Parameters(NewsQuery {
                query: "topic X".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content[0].as_text().unwrap().text, "Breaking: topic X update.");
        assert_eq!(script.calls(), 0);
    }

    #[tokio::test]
    async fn test_gen_vid_trans_composes() {
        let (server, _, script) = server(
            json!({ "content": "S" }),
            json!({ "choices": [ { "message": { "content": "Script body." } } ] }),
        );

        let result = server
            .gen_vid_trans(Parameters(NewsQuery {
                query: "topic".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(result.content[0].as_text().unwrap().text, "Script body.");
        let (prompt, _, _) = script.last_call().unwrap();
        assert!(prompt.trim_end().ends_with('S'));
    }

    #[tokio::test]
    async fn test_gen_vid_trans_short_circuits() {
        let news = Arc::new(MockBackend::failing("news", "unauthorized"));
        let script = Arc::new(MockBackend::replying("script", json!({ "content": "never" })));
        let server = NewsServer::new(NewsPipeline::new(news, script.clone()));

        let result = server
            .gen_vid_trans(Parameters(NewsQuery {
                query: "topic".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(script.calls(), 0);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert!(result.content[0].as_text().unwrap().text.starts_with("Error fetching news:"));
    }

    #[tokio::test]
    async fn test_session_lists_and_calls_tools() {
        let (server, news, _) = server(json!({ "content": " Breaking: topic X update. " }), json!({}));
        let input = session(&[
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"fetch_news","arguments":{"query":"topic X"}}}"#,
        ]);

        let frames = exchange(server, &input, 3).await;

        assert_eq!(reply(&frames, 1)["result"]["serverInfo"]["name"], "newsreel");
        assert_eq!(reply(&frames, 2)["result"]["tools"].as_array().unwrap().len(), 2);
        assert_eq!(
            reply(&frames, 3)["result"]["content"][0]["text"],
            "Breaking: topic X update."
        );
        assert_eq!(news.calls(), 1);
    }

    #[tokio::test]
    async fn test_session_survives_invalid_utf8() {
        let (server, _, _) = server(json!({}), json!({}));
        let mut input = session(&[]);
        input.extend_from_slice(b"\xff\xfe\n");
        input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"ping\"}\n");

        let frames = exchange(server, &input, 2).await;

        assert!(reply(&frames, 7)["result"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error() {
        let (server, news, _) = server(json!({}), json!({}));
        let input = session(&[
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"read_file","arguments":{}}}"#,
        ]);

        let frames = exchange(server, &input, 2).await;

        assert!(reply(&frames, 4)["error"]["code"].is_i64());
        assert_eq!(news.calls(), 0);
    }
}
