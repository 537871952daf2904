use serde::Deserialize;

use super::nested::{Choice, CustomFields, Related, Tag, nullable};

/// `dcim/console-ports/` and `dcim/console-server-ports/` share one schema
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConsolePort {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: Option<Related>,
    pub module: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub speed: Option<Choice>,
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

netbox_record!(ConsolePort {
    "ID" => id,
    "URL" => url,
    "Device" => device,
    "Module" => module,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Speed" => speed,
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

/// `dcim/console-port-templates/` and `dcim/console-server-port-templates/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConsolePortTemplate {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device_type: Option<Related>,
    pub module_type: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(ConsolePortTemplate {
    "ID" => id,
    "URL" => url,
    "Device Type" => device_type,
    "Module Type" => module_type,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Description" => description,
    "Created" => created,
    "Last Updated" => last_updated,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Renderer, NOT_FOUND};
    use serde_json::json;

    #[test]
    fn decodes_connected_console_port() {
        let port: ConsolePort = serde_json::from_value(json!({
            "id": 5,
            "display": "con0",
            "device": {"id": 1, "display": "edge-rtr-1", "name": "edge-rtr-1"},
            "module": null,
            "name": "con0",
            "label": "",
            "type": {"value": "rj-45", "label": "RJ-45"},
            "speed": null,
            "mark_connected": false,
            "cable": {"id": 40, "display": "#40", "label": ""},
            "cable_end": "A",
            "link_peers": [{"id": 8, "display": "port 8", "device": {"id": 2}}],
            "link_peers_type": "dcim.consoleserverport",
            "connected_endpoints": [{"id": 8, "display": "port 8"}],
            "connected_endpoints_type": "dcim.consoleserverport",
            "connected_endpoints_reachable": true,
            "_occupied": true
        }))
        .unwrap();

        assert!(port.occupied);
        assert_eq!(port.link_peers.len(), 1);

        let mut r = Renderer::new(false);
        r.record("con0", &port);
        let text = r.finish();
        assert!(text.contains("edge-rtr-1"));
        assert!(text.contains("RJ-45"));
        let speed = text.lines().find(|l| l.trim_start().starts_with("Speed:")).unwrap();
        assert!(speed.ends_with(NOT_FOUND));
    }

    #[test]
    fn unconnected_console_port_decodes_null_endpoints() {
        let port: ConsolePort = serde_json::from_value(json!({
            "id": 6,
            "display": "con1",
            "name": "con1",
            "cable": null,
            "link_peers": [],
            "connected_endpoints": null,
            "connected_endpoints_type": null,
            "connected_endpoints_reachable": null,
            "tags": null,
            "custom_fields": null
        }))
        .unwrap();

        assert!(port.connected_endpoints.is_empty());
        assert!(port.tags.is_empty());
        assert!(port.custom_fields.is_empty());

        let mut r = Renderer::new(false);
        r.record("con1", &port);
        let text = r.finish();
        let endpoints = text
            .lines()
            .find(|l| l.trim_start().starts_with("Connected Endpoints:"))
            .unwrap();
        assert!(endpoints.ends_with(NOT_FOUND));
    }
}
