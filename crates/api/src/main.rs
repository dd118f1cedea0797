use tasklist_api::routes::create_router;
use tasklist_api::server::{Server, ServerConfig};
use tasklist_api::state::AppState;
use tasklist_domain::{Task, TaskStore};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Task List Service - Starting Server");

    let config = ServerConfig::from_env();

    let store = TaskStore::with_tasks(seed_tasks());
    let state = AppState::new(store);

    let router = create_router(state);

    let server = Server::new(config);
    server.run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tasklist_api=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}

/// Sample rows the store starts with on every boot; there is no
/// persistence, so a restart always comes back to exactly these.
fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("1", "T1"),
        Task::new("2", "T2"),
        Task::new("3", "T3"),
    ]
}
