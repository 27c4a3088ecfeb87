use itsm_event_bridge::estimate::{self, CatalogCostEstimator};
use itsm_event_bridge::event::ApiGatewayProxyRequest;
use itsm_event_bridge::init_logger;
use lambda_runtime::{handler_fn, Context};
use rusoto_cloudformation::CloudFormationClient;
use rusoto_core::Region;
use rusoto_servicecatalog::ServiceCatalogClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let estimator = Arc::new(CatalogCostEstimator::new_with_clients(
        ServiceCatalogClient::new(Region::default()),
        CloudFormationClient::new(Region::default()),
    ));

    lambda_runtime::run(handler_fn(move |request: ApiGatewayProxyRequest, _: Context| {
        let estimator = Arc::clone(&estimator);
        async move { estimate::handle(estimator.as_ref(), request).await }
    }))
    .await
    .map_err(|error| anyhow::anyhow!(error))
}
