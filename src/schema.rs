pub mod change_record {
    pub const BUS_OB_ID: &str = "943e3fc2a8dab7f22f1d174bdf8e0c7010681362ec";

    pub const DETAIL: &str =
        "BO:943e3fc2a8dab7f22f1d174bdf8e0c7010681362ec,FI:943e3fc42d204079d03a2947f9840e4c6f45884f35";
}

pub mod incident {
    pub const BUS_OB_ID: &str = "943a570d82fb530ad8d5084b419a501b64f7aca4ee";

    pub const SUBJECT: &str =
        "BO:943a570d82fb530ad8d5084b419a501b64f7aca4ee,FI:943ab42268534c8c57744f440d97b75a56679be34e";
    pub const SOURCE_TOPIC: &str =
        "BO:943a570d82fb530ad8d5084b419a501b64f7aca4ee,FI:943ab422e8666c8154105949e9a2c088eb82eb87b7";
    pub const MESSAGE: &str =
        "BO:943a570d82fb530ad8d5084b419a501b64f7aca4ee,FI:943a5713896502f41b4e4b474c8f141a23c61700ac";
    pub const TOPIC_ARN: &str =
        "BO:943a570d82fb530ad8d5084b419a501b64f7aca4ee,FI:943ab44e4091ce7144405d48c997dc48d41ff0bcd3";
    pub const MESSAGE_ID: &str =
        "BO:943a570d82fb530ad8d5084b419a501b64f7aca4ee,FI:943ab44dd9d73f2216a8be4fd2839a0300e516a234";
    pub const REPORTED_BY: &str =
        "BO:943a570d82fb530ad8d5084b419a501b64f7aca4ee,FI:943ab44e6fa2b6189b51214faeb5e3535e286035ea";

    /// Attribute of the first SNS record that feeds each incident field.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Source {
        Subject,
        TopicArn,
        Message,
        MessageId,
    }

    pub const FIELDS: [(&str, Source); 6] = [
        (SUBJECT, Source::Subject),
        (SOURCE_TOPIC, Source::TopicArn),
        (MESSAGE, Source::Message),
        (TOPIC_ARN, Source::TopicArn),
        (MESSAGE_ID, Source::MessageId),
        (REPORTED_BY, Source::TopicArn),
    ];
}

#[cfg(test)]
mod tests {
    use crate::schema::{change_record, incident};

    #[test]
    fn test_field_ids_belong_to_their_business_object() {
        assert!(change_record::DETAIL.starts_with(&format!("BO:{},FI:", change_record::BUS_OB_ID)));
        for (field_id, _) in incident::FIELDS.iter() {
            assert!(field_id.starts_with(&format!("BO:{},FI:", incident::BUS_OB_ID)));
        }
    }

    #[test]
    fn test_incident_field_ids_are_distinct() {
        let mut ids: Vec<&str> = incident::FIELDS.iter().map(|(id, _)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
