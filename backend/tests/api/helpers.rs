use backend::conf::{Conf, Env, EnvConf};
use backend::startup::Application;
use once_cell::sync::Lazy;
use reqwest::RequestBuilder;
use static_routes::*;

pub static ADMIN_EMAIL: &str = "admin@example.com";

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = telemetry::TracingSubscriber::new("testing");

    if std::env::var("TEST_LOG").is_ok() {
        telemetry::init_global_default(subscriber.build(std::io::stdout));
    } else {
        telemetry::init_global_default(subscriber.build(std::io::sink));
    };
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let conf = Conf::new(Env::Local, EnvConf::test_default());

    let application = Application::build(&conf).await;

    let address = format!("http://{}:{}", application.host(), application.port());
    let _ = tokio::spawn(application.server());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        api_client,
    }
}

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub fn get(&self, static_path: impl Get) -> RequestBuilder {
        self.api_client
            .get(static_path.get().with_base(&self.address).complete())
    }

    pub fn post(&self, static_path: impl Post) -> RequestBuilder {
        self.api_client
            .post(static_path.post().with_base(&self.address).complete())
    }

    pub fn put_path(&self, path: &str) -> RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete_path(&self, path: &str) -> RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    pub fn post_path(&self, path: &str) -> RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

pub trait AsUser {
    fn as_admin(self) -> Self;
    fn as_guest(self) -> Self;
}

impl AsUser for RequestBuilder {
    fn as_admin(self) -> Self {
        self.header("x-user-email", ADMIN_EMAIL)
    }

    fn as_guest(self) -> Self {
        self.header("x-user-email", "guest@example.com")
    }
}

pub fn event_form(name: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "eventName": name,
        "events": "Festival",
        "date": date,
        "time": "6:00 PM",
        "location": "Community hall",
    })
}
