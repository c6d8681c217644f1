use vitals_dashboard::server::{self, ServerConfig};

#[tokio::main]
async fn main() {
    let _ = vitals_dashboard::telemetry::init_default_tracing();

    let result = match ServerConfig::from_env() {
        Ok(config) => server::serve(config).await,
        Err(err) => Err(err),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
