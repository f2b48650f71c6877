//! Login and load the company tree.
//!
//! Run against a live backend:
//!
//! ```sh
//! KITCHEN_API=https://api.example.com \
//! KITCHEN_EMAIL=me@example.com KITCHEN_PASSWORD=secret \
//! cargo run --example login_flow
//! ```

use kitchen_client::{
    BearerAuth, ClientConfig, ErrorLogger, HttpClient, ModuleName, NoticeQueue, RequestLogger,
    SessionStore,
};
use shared::models::LoginRequest;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kitchen_client=debug".into()),
        )
        .init();

    let base_url = std::env::var("KITCHEN_API").unwrap_or_else(|_| "http://localhost:8080".into());
    let session = Arc::new(SessionStore::in_memory());
    let notices = NoticeQueue::new();

    let client = HttpClient::builder(ClientConfig::new(base_url))
        .session(session.clone())
        .request_interceptor(Arc::new(RequestLogger))
        .request_interceptor(Arc::new(BearerAuth::new(session.clone())))
        .error_interceptor(Arc::new(ErrorLogger::new().quiet(401)))
        .build()?;

    let request = LoginRequest {
        email: std::env::var("KITCHEN_EMAIL")?,
        password: std::env::var("KITCHEN_PASSWORD")?,
    };
    let user = client.login(&request).await?;
    println!("signed in as {} ({})", user.name, user.role);
    println!("schedules access: {:?}", session.access(ModuleName::Schedules));

    let companies = client.list_companies().await?;
    println!("{} companies", companies.len());

    let ids: Vec<_> = companies.iter().map(|c| c.id).collect();
    for (company_id, branches) in client.load_branches_batch(&ids).await {
        match branches {
            Ok(branches) => println!("  company {}: {} branches", company_id, branches.len()),
            Err(err) => notices.push_error(&err),
        }
    }

    for notice in notices.active(chrono::Utc::now()) {
        eprintln!("[{:?}] {}", notice.surface, notice.message);
    }

    client.logout().await?;
    Ok(())
}
