use actix_web::{web, App, HttpServer};
use club_admin::config::AdminConfig;
use club_admin::middleware::request_trace::RequestTrace;
use club_admin::middleware::structured_logger::StructuredLogger;
use club_admin::middleware::trace_span::TraceSpan;
use club_admin::routes;
use club_admin::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AdminConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let host = config.host.clone();
    let port = config.port;

    println!("🚀 Starting club admin on http://{}:{}", host, port);
    println!("🎾 Backend: {}", config.api_base_url);

    let app_state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
