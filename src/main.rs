use confirmation_page::{
    configuration::get_config,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("confirmation-page".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let app_config = get_config()?;
    let application = Application::build(app_config).await?;
    tracing::info!(port = application.port(), "Serving the confirmation page");
    application.run_until_stopped().await?;

    Ok(())
}
