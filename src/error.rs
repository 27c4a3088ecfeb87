use std::error::Error;

use rusoto_cloudformation::EstimateTemplateCostError;
use rusoto_core::RusotoError;
use rusoto_servicecatalog::DescribeProvisioningArtifactError;
use rusoto_ssm::GetParametersError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BridgeError {
    MissingEnvVar(&'static str),
    MissingParameter(String),
    GetParametersError(RusotoError<GetParametersError>),
    HttpError(reqwest::Error),
    SerializeError(serde_json::Error),
    EmptyBatch,
    MissingAccessToken,
    DescribeArtifactError(RusotoError<DescribeProvisioningArtifactError>),
    EstimateCostError(RusotoError<EstimateTemplateCostError>),
    MissingEstimateUrl,
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            BridgeError::MissingEnvVar(name) => write!(f, "${} not set", name),
            BridgeError::MissingParameter(ref name) => {
                write!(f, "Parameter {} not found in parameter store", name)
            }
            BridgeError::GetParametersError(ref error) => Display::fmt(error, f),
            BridgeError::HttpError(ref error) => Display::fmt(error, f),
            BridgeError::SerializeError(ref error) => Display::fmt(error, f),
            BridgeError::EmptyBatch => write!(f, "Notification batch contains no records"),
            BridgeError::MissingAccessToken => {
                write!(f, "Token endpoint returned no access token")
            }
            BridgeError::DescribeArtifactError(ref error) => Display::fmt(error, f),
            BridgeError::EstimateCostError(ref error) => Display::fmt(error, f),
            BridgeError::MissingEstimateUrl => write!(f, "Cost estimate returned no url"),
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            BridgeError::GetParametersError(ref error) => Some(error),
            BridgeError::HttpError(ref error) => Some(error),
            BridgeError::SerializeError(ref error) => Some(error),
            BridgeError::DescribeArtifactError(ref error) => Some(error),
            BridgeError::EstimateCostError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<GetParametersError>> for BridgeError {
    fn from(e: RusotoError<GetParametersError>) -> BridgeError {
        BridgeError::GetParametersError(e)
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(e: reqwest::Error) -> BridgeError {
        BridgeError::HttpError(e)
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> BridgeError {
        BridgeError::SerializeError(e)
    }
}

impl From<RusotoError<DescribeProvisioningArtifactError>> for BridgeError {
    fn from(e: RusotoError<DescribeProvisioningArtifactError>) -> BridgeError {
        BridgeError::DescribeArtifactError(e)
    }
}

impl From<RusotoError<EstimateTemplateCostError>> for BridgeError {
    fn from(e: RusotoError<EstimateTemplateCostError>) -> BridgeError {
        BridgeError::EstimateCostError(e)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BridgeError;
    use rusoto_core::RusotoError;
    use std::error::Error;

    #[test]
    fn test_display_missing_env_var() {
        assert_eq!(
            BridgeError::MissingEnvVar("CLIENT_ID").to_string(),
            "$CLIENT_ID not set"
        );
    }

    #[test]
    fn test_display_sdk_error_is_verbatim() {
        let error = BridgeError::DescribeArtifactError(RusotoError::Validation(
            "Product prod-abc not found".to_string(),
        ));
        assert_eq!(error.to_string(), "Product prod-abc not found");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_plain_variants_have_no_source() {
        assert!(BridgeError::EmptyBatch.source().is_none());
        assert!(BridgeError::MissingAccessToken.source().is_none());
    }
}
