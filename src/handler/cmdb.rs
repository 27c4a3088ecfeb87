use crate::business_object::BusinessObjectUpdate;
use crate::client::Submit;
use crate::error::BridgeError;
use crate::event::{CloudWatchEvent, HandlerOutput};
use crate::handler::dispatch;
use crate::schema::change_record;

pub fn change_record_update(event: &CloudWatchEvent) -> BusinessObjectUpdate {
    BusinessObjectUpdate::new(change_record::BUS_OB_ID)
        .with_field(change_record::DETAIL, event.detail_json())
}

pub async fn handle<S: Submit + ?Sized>(
    submitter: &S,
    event: CloudWatchEvent,
) -> Result<HandlerOutput, BridgeError> {
    log::info!("complete request {} from {}", event.id, event.source);
    dispatch(submitter, change_record_update(&event)).await
}
