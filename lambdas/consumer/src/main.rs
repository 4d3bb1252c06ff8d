use aws_lambda_events::kafka::KafkaEvent;
use lambda_runtime::{service_fn, Error, LambdaEvent};

mod config;
mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .without_time()
        .init();

    lambda_runtime::run(service_fn(|event: LambdaEvent<KafkaEvent>| async {
        handler::handle(event, &config).await
    }))
    .await
}
