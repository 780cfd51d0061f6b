use crate::api::Property;
use crate::domain::{GenerationStatus, MessageTracker, SituationCatalog};

/// One entry of the displayed result list.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub property: Property,
    pub situation_label: String,
    pub generation: GenerationStatus,
    pub message: Option<String>,
}

/// Maps search results into display rows, in the order the backend
/// returned them, each joined with its situation label and message state.
pub fn build_rows(
    properties: Vec<Property>,
    catalog: &SituationCatalog,
    messages: &MessageTracker,
) -> Vec<PropertyRow> {
    properties
        .into_iter()
        .map(|property| {
            let situation_label = catalog.label_for(&property.situation_type).to_string();
            let generation = messages.status(property.id);
            let message = messages.message(property.id).map(|m| m.generated_message);
            PropertyRow {
                property,
                situation_label,
                generation,
                message,
            }
        })
        .collect()
}
