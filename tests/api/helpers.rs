use {
    confirmation_page::{
        configuration::get_config,
        startup::Application,
        telemetry::{get_subscriber, init_subscriber},
    },
    once_cell::sync::Lazy,
    wiremock::MockServer,
};

// Subscriber should be created once ()
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    /// Stands in for the backend the page activates accounts against
    pub api_server: MockServer,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Return given route prepended with test app's address
    fn app_route(&self, route: &str) -> String {
        format!("{}/{}", self.address, route)
    }

    fn confirmation_route(&self, token: Option<&str>) -> String {
        match token {
            Some(token) => self.app_route(&format!("confirm/{}", token)),
            None => self.app_route("confirm"),
        }
    }

    /// Get the confirmation page
    pub async fn get_confirmation_page(&self, token: Option<&str>) -> reqwest::Response {
        self.http_client
            .get(self.confirmation_route(token))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Get HTML string of the confirmation page
    pub async fn get_confirmation_page_html(&self, token: Option<&str>) -> String {
        self.get_confirmation_page(token).await.text().await.unwrap()
    }

    /// Press the confirmation button
    pub async fn post_confirmation(&self, token: Option<&str>) -> reqwest::Response {
        self.http_client
            .post(self.confirmation_route(token))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_home(&self) -> reqwest::Response {
        self.http_client
            .get(self.app_route(""))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.http_client
            .get(self.app_route("health_check"))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    // Init tracing subscriber
    Lazy::force(&TRACING);

    let api_server = MockServer::start().await;

    let app_config = {
        let mut c = get_config().expect("Failed to read configuration.");
        c.application.host = "127.0.0.1".into();
        c.application.port = 0;
        c.api.base_url = api_server.uri();
        c.api.timeout_milliseconds = 500;
        c
    };

    let application = Application::build(app_config)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    // Redirects are asserted on, never followed
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        api_server,
        http_client: client,
    }
}

/// Commonly used assert test for redirection
pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
