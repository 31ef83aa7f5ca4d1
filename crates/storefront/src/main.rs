//! Storefront entry point.

use domain::{Customer, Order, Product};
use event_dispatch::ConsoleSink;
use persistence::{InMemoryRepository, PostgresRepository};
use sqlx::postgres::PgPoolOptions;
use storefront::{Config, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Handler output owns stdout.
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> storefront::Result<()> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 3. Pick storage and run
    let sink = ConsoleSink::stdout();
    let summary = match &config.database_url {
        Some(url) => {
            tracing::info!("using PostgreSQL storage");
            let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
            let repo = PostgresRepository::new(pool);
            repo.run_migrations().await?;
            storefront::run(&repo, &repo, &repo, &sink).await?
        }
        None => {
            tracing::info!("using in-memory storage");
            let customers: InMemoryRepository<Customer> = InMemoryRepository::new();
            let products: InMemoryRepository<Product> = InMemoryRepository::new();
            let orders: InMemoryRepository<Order> = InMemoryRepository::new();
            storefront::run(&customers, &products, &orders, &sink).await?
        }
    };

    println!(
        "Order {} for {} totals {} ({} reward points)",
        summary.order.id(),
        summary.customer.name(),
        summary.order.total(),
        summary.customer.reward_points()
    );

    // 4. Optionally dump the metrics snapshot
    if config.print_metrics {
        println!("{}", metrics_handle.render());
    }

    Ok(())
}
