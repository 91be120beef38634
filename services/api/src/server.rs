use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::rubric_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use patent_rubric::config::AppConfig;
use patent_rubric::error::AppError;
use patent_rubric::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(prometheus_handle);

    let app = rubric_routes()
        .layer(Extension(app_state.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app_state.mark_ready();

    info!(?config.environment, %addr, "patent rubric service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
