use std::sync::Arc;

use paysplit_core::{PaycheckSplitter, PaycheckSplitterTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub paycheck_splitter: Arc<dyn PaycheckSplitterTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state() -> Arc<AppState> {
    let paycheck_splitter = Arc::new(PaycheckSplitter::new());
    tracing::info!(
        "Default bucket set: {}",
        paycheck_splitter
            .default_buckets()
            .iter()
            .map(|b| format!("{}={}%", b.name, b.percentage))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Arc::new(AppState { paycheck_splitter })
}
