use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;

/// Plain liveness probe so an operator can check the bot without Telegram.
pub(crate) async fn serve_health_endpoint(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Health endpoint listening on {addr}");
    axum::serve(listener, health_router()).await?;
    Ok(())
}

fn health_router() -> Router {
    Router::new().route("/", get(running))
}

async fn running() -> &'static str {
    "Zhartobot is running"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_reports_liveness() {
        let response = health_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Zhartobot is running");
    }
}
