use std::sync::Arc;

use lunch_agent::config::KakaoConfig;
use lunch_agent::context::ToolContext;
use lunch_agent::kakao::KakaoLocalClient;
use lunch_agent::tools::{RestaurantSearchTool, Tool};

/// Defaults matching the "lunch near a station" scenario.
const DEFAULT_RADIUS: i64 = 2000;
const DEFAULT_LIMIT: i64 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = KakaoConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export KAKAO_MAP_API_KEY=<REST API key>");
        std::process::exit(1);
    });

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_else(|| "삼성역".to_string());
    let radius: i64 = args
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RADIUS);
    let limit: i64 = args
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LIMIT);

    eprintln!("🍜 Lunch Agent v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Query: {query}");
    eprintln!("   Radius: {radius}m, results: {limit}\n");

    let api = Arc::new(KakaoLocalClient::new(config));
    let tool = RestaurantSearchTool::new(api);

    let params = serde_json::json!({
        "query": query,
        "radius": radius,
        "n_search_results_to_use": limit,
    });

    let output = tool.execute(params, &ToolContext::default()).await?;
    println!("{}", output.as_text().unwrap_or_default());

    Ok(())
}
