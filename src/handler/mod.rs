pub mod cmdb;
pub mod incident;

use crate::business_object::BusinessObjectUpdate;
use crate::client::Submit;
use crate::error::BridgeError;
use crate::event::HandlerOutput;

pub(crate) async fn dispatch<S: Submit + ?Sized>(
    submitter: &S,
    update: BusinessObjectUpdate,
) -> Result<HandlerOutput, BridgeError> {
    match submitter.submit(&update).await {
        Ok(message) => Ok(HandlerOutput { message }),
        Err(error) => {
            log::error!("error: {}", error);
            Err(error)
        }
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use crate::business_object::BusinessObjectUpdate;
    use crate::client::Submit;
    use crate::error::BridgeError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every update and answers with its serialized form.
    #[derive(Default)]
    pub struct RecordingSubmitter {
        pub submitted: Mutex<Vec<BusinessObjectUpdate>>,
    }

    #[async_trait]
    impl Submit for RecordingSubmitter {
        async fn submit(&self, update: &BusinessObjectUpdate) -> Result<String, BridgeError> {
            self.submitted.lock().unwrap().push(update.clone());
            Ok(serde_json::to_string(update)?)
        }
    }

    pub struct FailingSubmitter;

    #[async_trait]
    impl Submit for FailingSubmitter {
        async fn submit(&self, _update: &BusinessObjectUpdate) -> Result<String, BridgeError> {
            Err(BridgeError::MissingAccessToken)
        }
    }
}
