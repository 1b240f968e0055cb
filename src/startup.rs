use {
    crate::{
        api_client::ApiClient,
        configuration::Settings,
        routes::{confirm, confirmation_page, health_check, home},
    },
    actix_web::{dev::Server, web, App, HttpServer},
    std::net::TcpListener,
    tracing_actix_web::TracingLogger,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(app_config: Settings) -> Result<Self, std::io::Error> {
        let api_client = app_config.api.client();

        let address = format!(
            "{}:{}",
            app_config.application.host, app_config.application.port
        );
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, api_client)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    api_client: ApiClient,
) -> Result<Server, std::io::Error> {
    // `web::Data` is basically `Arc`, which will safely share the app state across threads
    let api_client = web::Data::new(api_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/confirm", web::get().to(confirmation_page))
            .route("/confirm", web::post().to(confirm))
            .route("/confirm/{token}", web::get().to(confirmation_page))
            .route("/confirm/{token}", web::post().to(confirm))
            .app_data(api_client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
