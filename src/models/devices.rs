use serde::Deserialize;
use serde_json::Value;

use super::nested::{Choice, CustomFields, Related, Tag, nullable};
use super::Record;
use crate::render::{Render, Renderer};

/// `dcim/devices/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: Option<String>,
    pub device_type: Option<Related>,
    pub role: Option<Related>,
    /// Pre-4.0 name of `role`; 3.6 and 3.7 send both
    pub device_role: Option<Related>,
    pub tenant: Option<Related>,
    pub platform: Option<Related>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    pub site: Option<Related>,
    pub location: Option<Related>,
    pub rack: Option<Related>,
    pub position: Option<f64>,
    pub face: Option<Choice>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub parent_device: Option<Related>,
    pub status: Option<Choice>,
    pub airflow: Option<Choice>,
    pub primary_ip: Option<Related>,
    pub primary_ip4: Option<Related>,
    pub primary_ip6: Option<Related>,
    pub oob_ip: Option<Related>,
    pub cluster: Option<Related>,
    pub virtual_chassis: Option<Related>,
    pub vc_position: Option<u32>,
    pub vc_priority: Option<u32>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub config_template: Option<Related>,
    pub local_context_data: Value,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    pub interface_count: Option<u64>,
    pub console_port_count: Option<u64>,
    pub power_port_count: Option<u64>,
    pub device_bay_count: Option<u64>,
}

impl Render for Device {
    fn render(&self, r: &mut Renderer) {
        r.field("ID", &self.id);
        r.field("URL", &self.url);
        r.field("Name", &self.name);
        r.field("Device Type", &self.device_type);
        r.field("Role", &self.role.as_ref().or(self.device_role.as_ref()));
        r.field("Tenant", &self.tenant);
        r.field("Platform", &self.platform);
        r.field("Serial", &self.serial);
        r.field("Asset Tag", &self.asset_tag);
        r.field("Site", &self.site);
        r.field("Location", &self.location);
        r.field("Rack", &self.rack);
        r.field("Position", &self.position);
        r.field("Face", &self.face);
        r.field("Latitude", &self.latitude);
        r.field("Longitude", &self.longitude);
        r.field("Parent Device", &self.parent_device);
        r.field("Status", &self.status);
        r.field("Airflow", &self.airflow);
        r.field("Primary IP", &self.primary_ip);
        r.field("Primary IPv4", &self.primary_ip4);
        r.field("Primary IPv6", &self.primary_ip6);
        r.field("OOB IP", &self.oob_ip);
        r.field("Cluster", &self.cluster);
        r.field("Virtual Chassis", &self.virtual_chassis);
        r.field("VC Position", &self.vc_position);
        r.field("VC Priority", &self.vc_priority);
        r.field("Description", &self.description);
        r.field("Comments", &self.comments);
        r.field("Config Template", &self.config_template);
        r.field("Local Context Data", &self.local_context_data);
        r.field("Tags", &self.tags);
        r.field("Custom Fields", &self.custom_fields);
        r.field("Created", &self.created);
        r.field("Last Updated", &self.last_updated);
        r.field("Interfaces", &self.interface_count);
        r.field("Console Ports", &self.console_port_count);
        r.field("Power Ports", &self.power_port_count);
        r.field("Device Bays", &self.device_bay_count);
    }
}

impl Record for Device {
    fn id(&self) -> u64 {
        self.id
    }

    fn display(&self) -> &str {
        &self.display
    }
}

/// `dcim/device-bays/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceBay {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub installed_device: Option<Related>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(DeviceBay {
    "ID" => id,
    "URL" => url,
    "Device" => device,
    "Name" => name,
    "Label" => label,
    "Description" => description,
    "Installed Device" => installed_device,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/device-bay-templates/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceBayTemplate {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device_type: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(DeviceBayTemplate {
    "ID" => id,
    "URL" => url,
    "Device Type" => device_type,
    "Name" => name,
    "Label" => label,
    "Description" => description,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/device-roles/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceRole {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub vm_role: bool,
    pub config_template: Option<Related>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub device_count: Option<u64>,
    pub virtualmachine_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(DeviceRole {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Slug" => slug,
    "Color" => color,
    "VM Role" => vm_role,
    "Config Template" => config_template,
    "Description" => description,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Devices" => device_count,
    "Virtual Machines" => virtualmachine_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/device-types/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceType {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub manufacturer: Option<Related>,
    pub default_platform: Option<Related>,
    pub model: String,
    pub slug: String,
    pub part_number: Option<String>,
    pub u_height: Option<f64>,
    pub exclude_from_utilization: bool,
    pub is_full_depth: bool,
    pub subdevice_role: Option<Choice>,
    pub airflow: Option<Choice>,
    pub weight: Option<f64>,
    pub weight_unit: Option<Choice>,
    pub front_image: Option<String>,
    pub rear_image: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub device_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(DeviceType {
    "ID" => id,
    "URL" => url,
    "Manufacturer" => manufacturer,
    "Default Platform" => default_platform,
    "Model" => model,
    "Slug" => slug,
    "Part Number" => part_number,
    "Height (U)" => u_height,
    "Exclude From Utilization" => exclude_from_utilization,
    "Full Depth" => is_full_depth,
    "Subdevice Role" => subdevice_role,
    "Airflow" => airflow,
    "Weight" => weight,
    "Weight Unit" => weight_unit,
    "Front Image" => front_image,
    "Rear Image" => rear_image,
    "Description" => description,
    "Comments" => comments,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Devices" => device_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/manufacturers/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manufacturer {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub devicetype_count: Option<u64>,
    pub inventoryitem_count: Option<u64>,
    pub platform_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(Manufacturer {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Slug" => slug,
    "Description" => description,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Device Types" => devicetype_count,
    "Inventory Items" => inventoryitem_count,
    "Platforms" => platform_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/platforms/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub manufacturer: Option<Related>,
    pub config_template: Option<Related>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub device_count: Option<u64>,
    pub virtualmachine_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(Platform {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Slug" => slug,
    "Manufacturer" => manufacturer,
    "Config Template" => config_template,
    "Description" => description,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Devices" => device_count,
    "Virtual Machines" => virtualmachine_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/virtual-chassis/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VirtualChassis {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub domain: Option<String>,
    pub master: Option<Related>,
    pub description: Option<String>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub member_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(VirtualChassis {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Domain" => domain,
    "Master" => master,
    "Description" => description,
    "Comments" => comments,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Members" => member_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NOT_FOUND;
    use serde_json::json;

    #[test]
    fn accepts_legacy_device_role_key() {
        let device: Device = serde_json::from_value(json!({
            "id": 3,
            "display": "leaf-03",
            "name": "leaf-03",
            "device_role": {"id": 2, "display": "Leaf", "slug": "leaf"},
            "rack": {"id": 11, "display": "R11"},
            "position": 38.0,
            "face": {"value": "front", "label": "Front"},
            "local_context_data": null
        }))
        .unwrap();

        assert!(device.role.is_none());

        let mut r = Renderer::new(false);
        r.record(&device.title(), &device);
        let text = r.finish();
        assert!(text.starts_with("leaf-03\n"));
        let role = text.lines().find(|l| l.trim_start().starts_with("Role:")).unwrap();
        assert!(role.ends_with("Leaf"));
        assert!(text.contains("Front"));
        let context = text
            .lines()
            .find(|l| l.trim_start().starts_with("Local Context Data:"))
            .unwrap();
        assert!(context.ends_with(NOT_FOUND));
    }

    #[test]
    fn unnamed_device_decodes_with_null_name() {
        let device: Device = serde_json::from_value(json!({
            "id": 77,
            "display": "",
            "name": null,
            "serial": null
        }))
        .unwrap();
        assert_eq!(device.title(), "#77");
        assert!(device.name.is_none());
    }

    #[test]
    fn device_bay_shows_installed_device() {
        let bay: DeviceBay = serde_json::from_value(json!({
            "id": 4,
            "display": "Slot 1",
            "device": {"id": 1, "display": "chassis-1"},
            "name": "Slot 1",
            "installed_device": {"id": 9, "display": "blade-9"}
        }))
        .unwrap();

        let mut r = Renderer::new(false);
        r.record(&bay.title(), &bay);
        let text = r.finish();
        assert!(text.contains("blade-9"));
    }
}
