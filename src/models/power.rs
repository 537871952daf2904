use serde::Deserialize;

use super::nested::{Choice, CustomFields, Related, Tag, nullable};

/// `dcim/power-feeds/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PowerFeed {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub power_panel: Option<Related>,
    pub rack: Option<Related>,
    pub name: String,
    pub status: Option<Choice>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub supply: Option<Choice>,
    pub phase: Option<Choice>,
    pub voltage: Option<i64>,
    pub amperage: Option<u64>,
    pub max_utilization: Option<u32>,
    pub mark_connected: bool,
    pub cable: Option<Related>,
    pub cable_end: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub link_peers: Vec<Related>,
    pub link_peers_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub connected_endpoints: Vec<Related>,
    pub connected_endpoints_type: Option<String>,
    pub connected_endpoints_reachable: Option<bool>,
    pub description: Option<String>,
    pub tenant: Option<Related>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_occupied")]
    pub occupied: bool,
}

netbox_record!(PowerFeed {
    "ID" => id,
    "URL" => url,
    "Power Panel" => power_panel,
    "Rack" => rack,
    "Name" => name,
    "Status" => status,
    "Type" => kind,
    "Supply" => supply,
    "Phase" => phase,
    "Voltage" => voltage,
    "Amperage" => amperage,
    "Max Utilization (%)" => max_utilization,
    "Mark Connected" => mark_connected,
    "Cable" => cable,
    "Cable End" => cable_end,
    "Link Peers" => link_peers,
    "Link Peers Type" => link_peers_type,
    "Connected Endpoints" => connected_endpoints,
    "Connected Endpoints Type" => connected_endpoints_type,
    "Reachable" => connected_endpoints_reachable,
    "Description" => description,
    "Tenant" => tenant,
    "Comments" => comments,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
    "Occupied" => occupied,
});

/// `dcim/power-panels/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PowerPanel {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub site: Option<Related>,
    pub location: Option<Related>,
    pub name: String,
    pub description: Option<String>,
    pub comments: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub powerfeed_count: Option<u64>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(PowerPanel {
    "ID" => id,
    "URL" => url,
    "Site" => site,
    "Location" => location,
    "Name" => name,
    "Description" => description,
    "Comments" => comments,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Power Feeds" => powerfeed_count,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/power-ports/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PowerPort {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: Option<Related>,
    pub module: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub maximum_draw: Option<u32>,
    pub allocated_draw: Option<u32>,
    pub description: Option<String>,
    pub mark_connected: bool,
    pub cable: Option<Related>,
    pub cable_end: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub link_peers: Vec<Related>,
    pub link_peers_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub connected_endpoints: Vec<Related>,
    pub connected_endpoints_type: Option<String>,
    pub connected_endpoints_reachable: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_occupied")]
    pub occupied: bool,
}

netbox_record!(PowerPort {
    "ID" => id,
    "URL" => url,
    "Device" => device,
    "Module" => module,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Maximum Draw (W)" => maximum_draw,
    "Allocated Draw (W)" => allocated_draw,
    "Description" => description,
    "Mark Connected" => mark_connected,
    "Cable" => cable,
    "Cable End" => cable_end,
    "Link Peers" => link_peers,
    "Link Peers Type" => link_peers_type,
    "Connected Endpoints" => connected_endpoints,
    "Connected Endpoints Type" => connected_endpoints_type,
    "Reachable" => connected_endpoints_reachable,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
    "Occupied" => occupied,
});

/// `dcim/power-port-templates/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PowerPortTemplate {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device_type: Option<Related>,
    pub module_type: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub maximum_draw: Option<u32>,
    pub allocated_draw: Option<u32>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(PowerPortTemplate {
    "ID" => id,
    "URL" => url,
    "Device Type" => device_type,
    "Module Type" => module_type,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Maximum Draw (W)" => maximum_draw,
    "Allocated Draw (W)" => allocated_draw,
    "Description" => description,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/power-outlets/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PowerOutlet {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: Option<Related>,
    pub module: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub power_port: Option<Related>,
    pub feed_leg: Option<Choice>,
    pub description: Option<String>,
    pub mark_connected: bool,
    pub cable: Option<Related>,
    pub cable_end: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub link_peers: Vec<Related>,
    pub link_peers_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub connected_endpoints: Vec<Related>,
    pub connected_endpoints_type: Option<String>,
    pub connected_endpoints_reachable: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_occupied")]
    pub occupied: bool,
}

netbox_record!(PowerOutlet {
    "ID" => id,
    "URL" => url,
    "Device" => device,
    "Module" => module,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Power Port" => power_port,
    "Feed Leg" => feed_leg,
    "Description" => description,
    "Mark Connected" => mark_connected,
    "Cable" => cable,
    "Cable End" => cable_end,
    "Link Peers" => link_peers,
    "Link Peers Type" => link_peers_type,
    "Connected Endpoints" => connected_endpoints,
    "Connected Endpoints Type" => connected_endpoints_type,
    "Reachable" => connected_endpoints_reachable,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
    "Occupied" => occupied,
});

/// `dcim/power-outlet-templates/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PowerOutletTemplate {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device_type: Option<Related>,
    pub module_type: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub power_port: Option<Related>,
    pub feed_leg: Option<Choice>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(PowerOutletTemplate {
    "ID" => id,
    "URL" => url,
    "Device Type" => device_type,
    "Module Type" => module_type,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Power Port" => power_port,
    "Feed Leg" => feed_leg,
    "Description" => description,
    "Created" => created,
    "Last Updated" => last_updated,
});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_power_feed_choices() {
        let feed: PowerFeed = serde_json::from_value(json!({
            "id": 2,
            "display": "Feed A",
            "power_panel": {"id": 1, "display": "Panel 1"},
            "name": "Feed A",
            "status": {"value": "active", "label": "Active"},
            "type": {"value": "primary", "label": "Primary"},
            "supply": {"value": "ac", "label": "AC"},
            "phase": {"value": "three-phase", "label": "Three-phase"},
            "voltage": 400,
            "amperage": 32,
            "max_utilization": 80
        }))
        .unwrap();

        assert_eq!(feed.voltage, Some(400));
        assert_eq!(feed.kind.unwrap().label, "Primary");
    }

    #[test]
    fn decodes_outlet_feed_leg() {
        let outlet: PowerOutlet = serde_json::from_value(json!({
            "id": 31,
            "display": "PSU1-out",
            "name": "PSU1-out",
            "power_port": {"id": 30, "display": "PSU1"},
            "feed_leg": {"value": "A", "label": "A"},
            "_occupied": false
        }))
        .unwrap();
        assert_eq!(outlet.power_port.unwrap().id, 30);
        assert_eq!(outlet.feed_leg.unwrap().label, "A");
    }

    #[test]
    fn unconnected_power_components_decode_null_endpoints() {
        let unconnected = json!({
            "id": 30,
            "display": "PSU1",
            "name": "PSU1",
            "cable": null,
            "link_peers": [],
            "connected_endpoints": null,
            "connected_endpoints_type": null,
            "connected_endpoints_reachable": null
        });

        let port: PowerPort = serde_json::from_value(unconnected.clone()).unwrap();
        assert!(port.connected_endpoints.is_empty());

        let outlet: PowerOutlet = serde_json::from_value(unconnected.clone()).unwrap();
        assert!(outlet.connected_endpoints.is_empty());

        let feed: PowerFeed = serde_json::from_value(unconnected).unwrap();
        assert!(feed.connected_endpoints.is_empty());
    }
}
