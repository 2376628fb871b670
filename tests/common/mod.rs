#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

static SERVER: OnceLock<Option<TestServer>> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_biztime-api-rust"));
        cmd.env("APP_ENV", "test")
            .env("HOST", "127.0.0.1")
            .env("BIZTIME_PORT", port.to_string())
            .env("DATABASE_RUN_MIGRATIONS", "true")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server sees DATABASE_URL / DATABASE_NAME
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Shared server for this test binary, or `None` when no database is configured.
pub async fn ensure_server() -> Result<Option<&'static TestServer>> {
    let server = SERVER.get_or_init(|| {
        let _ = dotenvy::dotenv();
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("DATABASE_URL not set; skipping database-backed tests");
            return None;
        }
        Some(TestServer::spawn().expect("failed to spawn server binary"))
    });

    match server {
        Some(server) => {
            server.wait_ready(Duration::from_secs(15)).await?;
            Ok(Some(server))
        }
        None => Ok(None),
    }
}

/// Short unique identifier so concurrent tests never share rows
pub fn unique(prefix: &str) -> String {
    format!("{}{}", prefix, &uuid::Uuid::new_v4().simple().to_string()[..10])
}

pub async fn create_company(client: &reqwest::Client, server: &TestServer, code: &str) -> Result<Value> {
    let res = client
        .post(server.url("/companies"))
        .json(&json!({
            "code": code,
            "name": format!("Company {}", code),
            "description": "Integration test company"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED, "create company {}", code);
    Ok(res.json::<Value>().await?["company"].clone())
}

pub async fn create_invoice(
    client: &reqwest::Client,
    server: &TestServer,
    comp_code: &str,
    amt: f64,
) -> Result<Value> {
    let res = client
        .post(server.url("/invoices"))
        .json(&json!({ "comp_code": comp_code, "amt": amt }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "create invoice for {}", comp_code);
    Ok(res.json::<Value>().await?["invoice"].clone())
}

pub async fn create_industry(client: &reqwest::Client, server: &TestServer, code: &str) -> Result<Value> {
    let res = client
        .post(server.url("/industries"))
        .json(&json!({ "code": code, "industry": format!("Industry {}", code) }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "create industry {}", code);
    Ok(res.json::<Value>().await?["industry"].clone())
}

pub async fn associate(
    client: &reqwest::Client,
    server: &TestServer,
    ind_code: &str,
    comp_code: &str,
) -> Result<reqwest::Response> {
    Ok(client
        .post(server.url(&format!("/industries/{}", ind_code)))
        .json(&json!({ "comp_code": comp_code }))
        .send()
        .await?)
}
