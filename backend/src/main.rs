use backend::conf::{Conf, Env, EnvConf};
use backend::startup::Application;

#[tokio::main]
async fn main() -> hyper::Result<()> {
    let subscriber = telemetry::TracingSubscriber::new("events-site").build(std::io::stdout);
    telemetry::init_global_default(subscriber);

    let env = Env::derive();
    tracing::info!("Env: {}", env);

    let conf = Conf::new(env, EnvConf::derive(env));

    let application = Application::build(&conf).await;

    application.server().await
}
