use crate::error::BridgeError;
use crate::event::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use async_trait::async_trait;
use rusoto_cloudformation::{
    CloudFormation, CloudFormationClient, EstimateTemplateCostInput, Parameter,
};
use rusoto_servicecatalog::{
    DescribeProvisioningArtifactInput, ServiceCatalog, ServiceCatalogClient,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const INVALID_JSON_MESSAGE: &str = "Invalid json";
// Misspelling kept; existing callers match on this text.
pub const ESTIMATE_FAILED_MESSAGE: &str = "Unable to get estamate";

const TEMPLATE_INFO_KEY: &str = "CloudFormationTemplate";

#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct ProvisionRequest {
    #[serde(rename = "productid", default)]
    pub product_id: Option<String>,
    #[serde(rename = "provisioningartifactid", default)]
    pub provisioning_artifact_id: Option<String>,
    #[serde(rename = "provisioningparameters", default)]
    pub provisioning_parameters: Vec<ProvisioningParameter>,
}

impl ProvisionRequest {
    /// Object keys match regardless of case (`productId`, `ProductId`, `productid`).
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        serde_json::from_value(lowercase_keys(value))
    }
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProvisioningParameter {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl From<ProvisioningParameter> for Parameter {
    fn from(parameter: ProvisioningParameter) -> Parameter {
        Parameter {
            parameter_key: parameter.key,
            parameter_value: parameter.value,
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct EstimateBody {
    url: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[async_trait]
pub trait ProvisioningService {
    /// Template body of a provisioning artifact, if the catalog returned one.
    async fn template_body(
        &self,
        product_id: Option<String>,
        provisioning_artifact_id: Option<String>,
    ) -> Result<Option<String>, BridgeError>;

    /// URL of the cost calculator pre-filled for the template.
    async fn estimate_template_cost(
        &self,
        template_body: Option<String>,
        parameters: Vec<ProvisioningParameter>,
    ) -> Result<String, BridgeError>;
}

pub struct CatalogCostEstimator {
    catalog: ServiceCatalogClient,
    cloud_formation: CloudFormationClient,
}

impl CatalogCostEstimator {
    pub fn new_with_clients(
        catalog: ServiceCatalogClient,
        cloud_formation: CloudFormationClient,
    ) -> Self {
        CatalogCostEstimator {
            catalog,
            cloud_formation,
        }
    }
}

#[async_trait]
impl ProvisioningService for CatalogCostEstimator {
    async fn template_body(
        &self,
        product_id: Option<String>,
        provisioning_artifact_id: Option<String>,
    ) -> Result<Option<String>, BridgeError> {
        let output = self
            .catalog
            .describe_provisioning_artifact(DescribeProvisioningArtifactInput {
                product_id,
                provisioning_artifact_id,
                verbose: Some(true),
                ..Default::default()
            })
            .await?;
        Ok(output
            .info
            .and_then(|mut info| info.remove(TEMPLATE_INFO_KEY)))
    }

    async fn estimate_template_cost(
        &self,
        template_body: Option<String>,
        parameters: Vec<ProvisioningParameter>,
    ) -> Result<String, BridgeError> {
        let output = self
            .cloud_formation
            .estimate_template_cost(EstimateTemplateCostInput {
                parameters: Some(parameters.into_iter().map(Parameter::from).collect()),
                template_body,
                ..Default::default()
            })
            .await?;
        output.url.ok_or(BridgeError::MissingEstimateUrl)
    }
}

fn error_response(message: &str) -> Result<ApiGatewayProxyResponse, BridgeError> {
    let body = serde_json::to_string(&ErrorBody { error: message })?;
    Ok(ApiGatewayProxyResponse::json(400, body))
}

pub async fn handle<P: ProvisioningService + ?Sized>(
    service: &P,
    request: ApiGatewayProxyRequest,
) -> Result<ApiGatewayProxyResponse, BridgeError> {
    let body = request.body.unwrap_or_default();
    let provision = match ProvisionRequest::from_json(&body) {
        Ok(provision) => provision,
        Err(error) => {
            log::error!("error: {}", error);
            return error_response(INVALID_JSON_MESSAGE);
        }
    };

    let template_body = match service
        .template_body(provision.product_id, provision.provisioning_artifact_id)
        .await
    {
        Ok(template_body) => template_body,
        Err(error) => {
            log::error!("error: {}", error);
            return error_response(&error.to_string());
        }
    };

    let url = match service
        .estimate_template_cost(template_body, provision.provisioning_parameters)
        .await
    {
        Ok(url) => url,
        Err(error) => {
            log::error!("error: {}", error);
            return error_response(ESTIMATE_FAILED_MESSAGE);
        }
    };

    log::info!("Estimate URL: {}", url);
    let body = serde_json::to_string(&EstimateBody { url })?;
    Ok(ApiGatewayProxyResponse::json(200, body))
}
