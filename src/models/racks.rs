use serde::Deserialize;

use super::nested::{Choice, CustomFields, Related, Tag, nullable};

/// `dcim/racks/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Rack {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub facility_id: Option<String>,
    pub site: Option<Related>,
    pub location: Option<Related>,
    pub tenant: Option<Related>,
    pub status: Option<Choice>,
    pub role: Option<Related>,
    pub rack_type: Option<Related>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    /// Called `type` before Netbox 4.1
    #[serde(alias = "type")]
    pub form_factor: Option<Choice>,
    pub width: Option<Choice>,
    pub u_height: Option<u32>,
    pub starting_unit: Option<u32>,
    pub weight: Option<f64>,
    pub max_weight: Option<u64>,
    pub weight_unit: Option<Choice>,
    pub desc_units: bool,
    pub outer_width: Option<u32>,
    pub outer_depth: Option<u32>,
    pub outer_unit: Option<Choice>,
    pub mounting_depth: Option<u32>,
    pub airflow: Option<Choice>,
    pub description: Option<String>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub device_count: Option<u64>,
    pub powerfeed_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(Rack {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Facility ID" => facility_id,
    "Site" => site,
    "Location" => location,
    "Tenant" => tenant,
    "Status" => status,
    "Role" => role,
    "Rack Type" => rack_type,
    "Serial" => serial,
    "Asset Tag" => asset_tag,
    "Form Factor" => form_factor,
    "Width" => width,
    "Height (U)" => u_height,
    "Starting Unit" => starting_unit,
    "Weight" => weight,
    "Max Weight" => max_weight,
    "Weight Unit" => weight_unit,
    "Descending Units" => desc_units,
    "Outer Width" => outer_width,
    "Outer Depth" => outer_depth,
    "Outer Unit" => outer_unit,
    "Mounting Depth" => mounting_depth,
    "Airflow" => airflow,
    "Description" => description,
    "Comments" => comments,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Devices" => device_count,
    "Power Feeds" => powerfeed_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/rack-roles/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RackRole {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub rack_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(RackRole {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Slug" => slug,
    "Color" => color,
    "Description" => description,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Racks" => rack_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/rack-reservations/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RackReservation {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub rack: Option<Related>,
    #[serde(deserialize_with = "nullable")]
    pub units: Vec<u32>,
    pub user: Option<Related>,
    pub tenant: Option<Related>,
    pub description: Option<String>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(RackReservation {
    "ID" => id,
    "URL" => url,
    "Rack" => rack,
    "Units" => units,
    "User" => user,
    "Tenant" => tenant,
    "Description" => description,
    "Comments" => comments,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
});
