mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let res = client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    Ok(())
}

#[tokio::test]
async fn unknown_route_returns_json_404() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let res = client.get(server.url("/no/such/route")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"]["status"], 404);
    assert_eq!(body["error"]["message"], "Not Found");
    Ok(())
}
