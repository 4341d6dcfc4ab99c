//! reddit-summary MCP Server
//!
//! Stdio JSON-RPC server exposing the reddit feed tools and the fixed
//! summary prompt. Stdout carries the protocol; all diagnostics go to
//! stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcp_core::{McpServer, PromptDefinition, PromptRegistry, ToolRegistry};
use reddit_feed::{
    FeedAdapter, HttpRedditGateway, RedditGateway, SUMMARIZE_MY_PAGE_PROMPT,
    SUMMARIZE_MY_PAGE_PROMPT_DESCRIPTION, SUMMARIZE_MY_PAGE_PROMPT_NAME,
    tools::{FetchCommentsTool, SummarizeFrontpageTool, SummarizeSubredditTool},
};

const SERVER_NAME: &str = "reddit-summary";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr; stdout is the protocol channel
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Credentials are read per connect, so a misconfigured process still
    // starts and reports through the tool results
    let gateway: Arc<dyn RedditGateway> = Arc::new(HttpRedditGateway::new());
    tracing::info!("gateway: {}", gateway.name());

    let adapter = Arc::new(FeedAdapter::new(gateway));

    // Initialize tools
    let mut tools = ToolRegistry::new();
    tools.register(FetchCommentsTool::new(adapter.clone()));
    tools.register(SummarizeFrontpageTool::new(adapter.clone()));
    tools.register(SummarizeSubredditTool::new(adapter.clone()));

    tracing::info!("Registered {} tools:", tools.len());
    for name in tools.names() {
        tracing::info!("  • {}", name);
    }

    // Initialize prompts
    let mut prompts = PromptRegistry::new();
    prompts.register(PromptDefinition::new(
        SUMMARIZE_MY_PAGE_PROMPT_NAME,
        SUMMARIZE_MY_PAGE_PROMPT_DESCRIPTION,
        SUMMARIZE_MY_PAGE_PROMPT,
    ));

    let server = McpServer::new(
        SERVER_NAME,
        env!("CARGO_PKG_VERSION"),
        Arc::new(tools),
        Arc::new(prompts),
    );

    tracing::info!("{} server listening on stdio", SERVER_NAME);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if let Some(response) = server.handle_line(&line).await {
            stdout.write_all(response.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
