use crate::auth::TokenVerifier;
use crate::conf::Conf;
use crate::sheets::SheetStore;
use crate::theme_hub::ThemeHub;
use static_routes::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit, ServiceBuilderExt,
};

#[derive(Clone, Default)]
pub struct RequestIdProducer {
    counter: Arc<std::sync::atomic::AtomicU64>,
}

impl tower_http::request_id::MakeRequestId for RequestIdProducer {
    fn make_request_id<B>(
        &mut self,
        _request: &hyper::http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let request_id = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            .to_string()
            .parse()
            .unwrap();

        Some(tower_http::request_id::RequestId::new(request_id))
    }
}

pub fn router(static_dir: Option<PathBuf>) -> Router<AppState> {
    use crate::routes::*;

    let routes = routes().api;

    let api_router = Router::new()
        .route(routes.health_check.get().postfix(), get(health_check))
        .route(routes.events.get().postfix(), get(event_list))
        .route(routes.events.post().postfix(), post(create_event))
        .route("/events/:id", put(update_event))
        .route("/events/:id", delete(delete_event))
        .route("/events/:id/attachments", post(upload_attachment))
        .route(
            "/events/:id/attachments/:file_id",
            delete(delete_attachment),
        )
        .route(routes.admin.check.get().postfix(), get(admin_check))
        .route(routes.theme.current.get().postfix(), get(current_theme))
        .route(routes.theme.current.post().postfix(), post(set_theme))
        .route(routes.theme.ws.get().postfix(), get(ws_theme));

    let request_tracing_layer = tower::ServiceBuilder::new()
        .set_x_request_id(RequestIdProducer::default())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &hyper::http::Request<hyper::Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request.headers().get("x-request-id").unwrap().to_str().unwrap(),
                    )
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Seconds),
                ),
        )
        .propagate_x_request_id();

    let router = Router::new().nest("/api", api_router);

    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(&dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => router,
    };

    router.layer(request_tracing_layer)
}

#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<SheetStore>,
    pub theme_hub: Arc<ThemeHub>,
    pub verifier: Arc<TokenVerifier>,
    pub uploads_dir: PathBuf,
}

pub struct Application {
    port: u16,
    host: String,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = hyper::Result<()>> + Send>>,
    sheets: Arc<SheetStore>,
}

impl Application {
    pub async fn build(conf: &Conf) -> Self {
        let address = format!("{}:{}", conf.host, conf.port);
        let listener = std::net::TcpListener::bind(&address).unwrap();
        tracing::info!("Listening on http://{}", address);
        let host = conf.host.clone();
        let port = listener.local_addr().unwrap().port();

        let sheets = Arc::new(SheetStore::init(
            conf.sheets.snapshot.as_ref().map(PathBuf::from),
            &conf.auth.fallback_admin,
        ));

        let app_state = AppState {
            sheets: sheets.clone(),
            theme_hub: Arc::new(ThemeHub::default()),
            verifier: Arc::new(TokenVerifier::new(conf.auth.token_info_url.clone())),
            uploads_dir: PathBuf::from(&conf.uploads_dir),
        };

        let static_dir = conf.static_dir.as_ref().map(PathBuf::from);
        let app = router(static_dir).with_state(app_state);

        let server = Box::pin(
            axum::Server::from_tcp(listener)
                .unwrap()
                .serve(app.into_make_service()),
        );

        Self {
            port,
            host,
            server,
            sheets,
        }
    }

    // needs to consume to produce 1 server max
    pub fn server(self) -> impl std::future::Future<Output = hyper::Result<()>> + Send {
        self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn sheets(&self) -> Arc<SheetStore> {
        self.sheets.clone()
    }
}
