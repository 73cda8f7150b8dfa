use std::net::TcpListener;

use axum::routing::{get, IntoMakeService};
use axum::Router;
use hyper::server::conn::AddrIncoming;
use hyper::Server;
use tower::ServiceBuilder;
use tower_http::request_id::MakeRequestUuid;
use tower_http::trace::TraceLayer;
use tower_http::ServiceBuilderExt;

use crate::configuration::Settings;
use crate::routes;

pub struct Application {
    port: u16,
    server: Server<AddrIncoming, IntoMakeService<Router>>,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        // Binding port 0 asks the OS for a random free port, so tests can
        // run the application without stepping on each other.
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, app().await)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> hyper::Result<()> {
        self.server.await
    }
}

pub async fn app() -> Router {
    Router::new()
        .route("/health_check", get(routes::health_check))
        .route("/api/data", get(routes::get_data))
        .layer(
            ServiceBuilder::new()
                .set_x_request_id(MakeRequestUuid)
                .layer(TraceLayer::new_for_http())
                .propagate_x_request_id(),
        )
}

pub fn run(
    listener: TcpListener,
    app: Router,
) -> Result<Server<AddrIncoming, IntoMakeService<Router>>, std::io::Error> {
    let server = Server::from_tcp(listener)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        .serve(app.into_make_service());
    Ok(server)
}
