use serde::Deserialize;

use super::nested::{Choice, CustomFields, Related, Tag, nullable};

/// `dcim/sites/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Site {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub status: Option<Choice>,
    pub region: Option<Related>,
    pub group: Option<Related>,
    pub tenant: Option<Related>,
    pub facility: Option<String>,
    pub time_zone: Option<String>,
    pub description: Option<String>,
    pub physical_address: Option<String>,
    pub shipping_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub asns: Vec<Related>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub circuit_count: Option<u64>,
    pub device_count: Option<u64>,
    pub prefix_count: Option<u64>,
    pub rack_count: Option<u64>,
    pub virtualmachine_count: Option<u64>,
    pub vlan_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(Site {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Slug" => slug,
    "Status" => status,
    "Region" => region,
    "Group" => group,
    "Tenant" => tenant,
    "Facility" => facility,
    "Time Zone" => time_zone,
    "Description" => description,
    "Physical Address" => physical_address,
    "Shipping Address" => shipping_address,
    "Latitude" => latitude,
    "Longitude" => longitude,
    "Comments" => comments,
    "ASNs" => asns,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Circuits" => circuit_count,
    "Devices" => device_count,
    "Prefixes" => prefix_count,
    "Racks" => rack_count,
    "Virtual Machines" => virtualmachine_count,
    "VLANs" => vlan_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/regions/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Region {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub parent: Option<Related>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub site_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_depth")]
    pub depth: u32,
}

netbox_record!(Region {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Slug" => slug,
    "Parent" => parent,
    "Description" => description,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Sites" => site_count,
    "Created" => created,
    "Last Updated" => last_updated,
    "Depth" => depth,
});

/// `dcim/site-groups/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteGroup {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub parent: Option<Related>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub site_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_depth")]
    pub depth: u32,
}

netbox_record!(SiteGroup {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Slug" => slug,
    "Parent" => parent,
    "Description" => description,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Sites" => site_count,
    "Created" => created,
    "Last Updated" => last_updated,
    "Depth" => depth,
});

/// `dcim/locations/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub site: Option<Related>,
    pub parent: Option<Related>,
    pub status: Option<Choice>,
    pub tenant: Option<Related>,
    pub facility: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub rack_count: Option<u64>,
    pub device_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_depth")]
    pub depth: u32,
}

netbox_record!(Location {
    "ID" => id,
    "URL" => url,
    "Name" => name,
    "Slug" => slug,
    "Site" => site,
    "Parent" => parent,
    "Status" => status,
    "Tenant" => tenant,
    "Facility" => facility,
    "Description" => description,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Racks" => rack_count,
    "Devices" => device_count,
    "Created" => created,
    "Last Updated" => last_updated,
    "Depth" => depth,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::render::{Renderer, NOT_FOUND};
    use serde_json::json;

    #[test]
    fn renders_site_with_placeholders() {
        let site: Site = serde_json::from_value(json!({
            "id": 1,
            "display": "AMS1",
            "name": "AMS1",
            "slug": "ams1",
            "status": {"value": "active", "label": "Active"},
            "region": {"id": 3, "display": "Netherlands"},
            "time_zone": null,
            "latitude": 52.3676,
            "asns": [],
            "tags": [],
            "custom_fields": {}
        }))
        .unwrap();

        let mut r = Renderer::new(false);
        r.record(&site.title(), &site);
        let text = r.finish();

        assert!(text.contains("Netherlands"));
        assert!(text.contains("52.3676"));
        for label in ["Time Zone:", "ASNs:", "Tags:", "Custom Fields:"] {
            let line = text
                .lines()
                .find(|l| l.trim_start().starts_with(label))
                .unwrap();
            assert!(line.ends_with(NOT_FOUND), "{line}");
        }
    }

    #[test]
    fn nested_location_keeps_parent() {
        let location: Location = serde_json::from_value(json!({
            "id": 8,
            "display": "Cage 4",
            "name": "Cage 4",
            "slug": "cage-4",
            "site": {"id": 1, "display": "AMS1"},
            "parent": {"id": 7, "display": "Hall B", "_depth": 0},
            "_depth": 1
        }))
        .unwrap();

        assert_eq!(location.parent.unwrap().display, "Hall B");
        assert_eq!(location.depth, 1);
    }
}
