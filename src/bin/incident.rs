use anyhow::Context as _;
use itsm_event_bridge::event::SnsEvent;
use itsm_event_bridge::handler::incident;
use itsm_event_bridge::{init_logger, Credentials, ItsmClient, ParameterNames, SsmParameterStore};
use lambda_runtime::{handler_fn, Context};
use rusoto_core::Region;
use rusoto_ssm::SsmClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let names = ParameterNames::from_env()?;
    let store = SsmParameterStore::new_with_client(SsmClient::new(Region::default()));
    let credentials = Credentials::load(&store, &names)
        .await
        .context("Error getting parameter")?;
    let client = Arc::new(ItsmClient::new(credentials));

    lambda_runtime::run(handler_fn(move |event: SnsEvent, _: Context| {
        let client = Arc::clone(&client);
        async move { incident::handle(client.as_ref(), event).await }
    }))
    .await
    .map_err(|error| anyhow::anyhow!(error))
}
