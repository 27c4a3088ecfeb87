use serde::Serialize;

pub const SAVE_PATH: &str = "/CherwellAPI/api/V1/savebusinessobject";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    pub dirty: bool,
    pub field_id: String,
    pub value: String,
}

/// Body of the save call. Field order follows the mapping table it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessObjectUpdate {
    pub bus_ob_id: String,
    pub fields: Vec<FieldValue>,
    pub persist: bool,
}

impl BusinessObjectUpdate {
    pub fn new(bus_ob_id: &str) -> Self {
        BusinessObjectUpdate {
            bus_ob_id: bus_ob_id.to_string(),
            fields: Vec::new(),
            persist: true,
        }
    }

    pub fn with_field(mut self, field_id: &str, value: impl Into<String>) -> Self {
        self.fields.push(FieldValue {
            dirty: true,
            field_id: field_id.to_string(),
            value: value.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::business_object::BusinessObjectUpdate;

    #[test]
    fn test_serialize_wire_shape() {
        let update = BusinessObjectUpdate::new("bo-1")
            .with_field("BO:bo-1,FI:f-1", "first")
            .with_field("BO:bo-1,FI:f-2", "");

        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"busObId":"bo-1","fields":[{"dirty":true,"fieldId":"BO:bo-1,FI:f-1","value":"first"},{"dirty":true,"fieldId":"BO:bo-1,FI:f-2","value":""}],"persist":true}"#
        );
    }
}
