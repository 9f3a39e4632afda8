use anyhow::Result;
use std::sync::Arc;
use storefront::config::Config;
use storefront::router::create_app_router;
use storefront::session::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use storefront::mcp::handlers::handle_tool_call;
    use storefront::mcp::models::{ADD_TOOL_NAME, UPDATE_QUANTITY_TOOL_NAME};
    use storefront::session::AppState;

    #[test]
    fn test_tool_calls_share_session_state() {
        let state = AppState::new();
        let session_id = "test_session_1";

        for _ in 0..3 {
            let args = json!({ "sessionId": session_id, "productId": 5 });
            handle_tool_call(&state, ADD_TOOL_NAME, args).expect("Tool call failed");
        }

        let args = json!({ "sessionId": session_id, "productId": 5, "delta": -1 });
        let result =
            handle_tool_call(&state, UPDATE_QUANTITY_TOOL_NAME, args).expect("Tool call failed");

        let session = state.sessions.get(session_id).unwrap();
        let line = session.cart.line(5).unwrap();
        assert_eq!(line.quantity, 2, "Quantity should be 3-1=2");
        assert_eq!(result["structuredContent"]["view"]["totalPrice"], 1000);
    }
}
