//! Minimal admin console loop against a running backend
//!
//! Usage: LEAD_API_URL=http://localhost:8000 cargo run --example admin_console

use lead_client::display::{approval_summary, format_ist};
use lead_client::{ApprovalQueue, ClientConfig, Dashboard, REFRESH_INTERVAL, UiEvent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lead_client=debug".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    let client = config.build_http_client()?;

    let health = client.health().await?;
    println!("backend: {} ({})", client.base_url(), health.status);

    let dashboard = Dashboard::over_http(client.clone());
    let approvals = ApprovalQueue::over_http(client.clone());

    let mut events = approvals.sync().subscribe_events();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            if let UiEvent::ActionFailed { action, message } = event {
                eprintln!("ALERT: {action} failed: {message}");
            }
        }
    });

    dashboard.sync().spawn(REFRESH_INTERVAL);
    approvals.sync().spawn(REFRESH_INTERVAL);

    loop {
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;

        let dash = dashboard.sync().state().await;
        if let Some(stats) = &dash.stats {
            println!(
                "leads: {} total, {} new today, {} pending follow-ups, refreshed {}",
                stats.total_leads,
                stats.new_leads_today,
                stats.pending_follow_ups,
                format_ist(dash.last_refresh.as_ref()),
            );
        }

        let queue = approvals.sync().state().await;
        let filter = approvals.sync().filter().await;
        println!("{}", approval_summary(filter, queue.items.len()));
    }
}
