use serde::Deserialize;

use super::nested::{Choice, CustomFields, Related, Tag, Termination, nullable};

/// `dcim/cables/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Cable {
    pub id: u64,
    pub url: String,
    pub display: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub a_terminations: Vec<Termination>,
    #[serde(deserialize_with = "nullable")]
    pub b_terminations: Vec<Termination>,
    pub status: Option<Choice>,
    pub tenant: Option<Related>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub length: Option<f64>,
    pub length_unit: Option<Choice>,
    pub description: Option<String>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(Cable {
    "ID" => id,
    "URL" => url,
    "Type" => kind,
    "A Side" => a_terminations,
    "B Side" => b_terminations,
    "Status" => status,
    "Tenant" => tenant,
    "Label" => label,
    "Color" => color,
    "Length" => length,
    "Length Unit" => length_unit,
    "Description" => description,
    "Comments" => comments,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
});
