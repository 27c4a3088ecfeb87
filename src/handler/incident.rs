use crate::business_object::BusinessObjectUpdate;
use crate::client::Submit;
use crate::error::BridgeError;
use crate::event::{HandlerOutput, SnsEvent, SnsMessage};
use crate::handler::dispatch;
use crate::schema::incident::{Source, BUS_OB_ID, FIELDS};

fn source_value(message: &SnsMessage, source: Source) -> String {
    let value = match source {
        Source::Subject => &message.subject,
        Source::TopicArn => &message.topic_arn,
        Source::Message => &message.message,
        Source::MessageId => &message.message_id,
    };
    value.clone().unwrap_or_default()
}

/// Maps the first record only; later records are logged and dropped.
pub fn incident_update(event: &SnsEvent) -> Result<BusinessObjectUpdate, BridgeError> {
    let (first, rest) = event.records.split_first().ok_or(BridgeError::EmptyBatch)?;
    if !rest.is_empty() {
        log::warn!("ignoring {} additional notification records", rest.len());
    }

    Ok(FIELDS
        .iter()
        .fold(BusinessObjectUpdate::new(BUS_OB_ID), |update, (field_id, source)| {
            update.with_field(field_id, source_value(&first.sns, *source))
        }))
}

pub async fn handle<S: Submit + ?Sized>(
    submitter: &S,
    event: SnsEvent,
) -> Result<HandlerOutput, BridgeError> {
    let update = incident_update(&event).map_err(|error| {
        log::error!("error: {}", error);
        error
    })?;
    dispatch(submitter, update).await
}

#[cfg(test)]
mod tests {
    use crate::business_object::FieldValue;
    use crate::error::BridgeError;
    use crate::event::SnsEvent;
    use crate::handler::incident::{handle, incident_update};
    use crate::handler::stub::RecordingSubmitter;
    use crate::schema::incident;

    const TOPIC: &str = "arn:aws:sns:us-east-1:123456789012:itsm-incidents";

    fn event() -> SnsEvent {
        serde_json::from_str(include_str!("../../test_resources/events/sns.json")).unwrap()
    }

    fn field(field_id: &str, value: &str) -> FieldValue {
        FieldValue {
            dirty: true,
            field_id: field_id.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_incident_update() {
        let update = incident_update(&event()).unwrap();

        assert_eq!(update.bus_ob_id, incident::BUS_OB_ID);
        assert!(update.persist);
        assert_eq!(
            update.fields,
            vec![
                field(incident::SUBJECT, "ALARM: High CPU on web tier"),
                field(incident::SOURCE_TOPIC, TOPIC),
                field(incident::MESSAGE, "CPUUtilization > 90 for 3 datapoints"),
                field(incident::TOPIC_ARN, TOPIC),
                field(incident::MESSAGE_ID, "95df01b4-ee98-5cb9-9903-4c221d41eb5e"),
                field(incident::REPORTED_BY, TOPIC),
            ]
        );
    }

    #[test]
    fn test_incident_update_empty_batch() {
        let event: SnsEvent =
            serde_json::from_str(include_str!("../../test_resources/events/sns_empty.json"))
                .unwrap();
        let result = incident_update(&event);

        assert!(matches!(result.err().unwrap(), BridgeError::EmptyBatch));
    }

    #[test]
    fn test_incident_update_missing_attributes() {
        let event: SnsEvent = serde_json::from_str(
            r#"{"Records":[{"Sns":{"MessageId":"m-1","Subject":null}}]}"#,
        )
        .unwrap();
        let update = incident_update(&event).unwrap();

        assert_eq!(update.fields.len(), 6);
        assert_eq!(update.fields[0].value, "");
        assert_eq!(update.fields[1].value, "");
        assert_eq!(update.fields[4].value, "m-1");
    }

    #[tokio::test]
    async fn test_handle_uses_first_record_only() {
        let submitter = RecordingSubmitter::default();
        handle(&submitter, event()).await.unwrap();

        let submitted = submitter.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].fields[0].value, "ALARM: High CPU on web tier");
    }

    #[tokio::test]
    async fn test_handle_empty_batch_does_not_submit() {
        let submitter = RecordingSubmitter::default();
        let event: SnsEvent =
            serde_json::from_str(include_str!("../../test_resources/events/sns_empty.json"))
                .unwrap();
        let result = handle(&submitter, event).await;

        assert!(matches!(result.err().unwrap(), BridgeError::EmptyBatch));
        assert!(submitter.submitted.lock().unwrap().is_empty());
    }
}
