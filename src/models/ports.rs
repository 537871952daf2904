use serde::Deserialize;

use super::nested::{Choice, CustomFields, Related, Tag, nullable};

/// `dcim/interfaces/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Interface {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: Option<Related>,
    #[serde(deserialize_with = "nullable")]
    pub vdcs: Vec<Related>,
    pub module: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub enabled: bool,
    pub parent: Option<Related>,
    pub bridge: Option<Related>,
    pub lag: Option<Related>,
    pub mtu: Option<u32>,
    pub mac_address: Option<String>,
    pub speed: Option<u64>,
    pub duplex: Option<Choice>,
    pub wwn: Option<String>,
    pub mgmt_only: bool,
    pub description: Option<String>,
    pub mode: Option<Choice>,
    pub rf_role: Option<Choice>,
    pub rf_channel: Option<Choice>,
    pub poe_mode: Option<Choice>,
    pub poe_type: Option<Choice>,
    pub rf_channel_frequency: Option<f64>,
    pub rf_channel_width: Option<f64>,
    pub tx_power: Option<i32>,
    pub untagged_vlan: Option<Related>,
    #[serde(deserialize_with = "nullable")]
    pub tagged_vlans: Vec<Related>,
    pub mark_connected: bool,
    pub cable: Option<Related>,
    pub cable_end: Option<String>,
    pub wireless_link: Option<Related>,
    #[serde(deserialize_with = "nullable")]
    pub link_peers: Vec<Related>,
    pub link_peers_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub wireless_lans: Vec<Related>,
    pub vrf: Option<Related>,
    pub l2vpn_termination: Option<Related>,
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
    pub count_ipaddresses: u64,
    pub count_fhrp_groups: u64,
    #[serde(rename = "_occupied")]
    pub occupied: bool,
}

netbox_record!(Interface {
    "ID" => id,
    "URL" => url,
    "Device" => device,
    "Virtual Device Contexts" => vdcs,
    "Module" => module,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Enabled" => enabled,
    "Parent" => parent,
    "Bridge" => bridge,
    "LAG" => lag,
    "MTU" => mtu,
    "MAC Address" => mac_address,
    "Speed (Kbps)" => speed,
    "Duplex" => duplex,
    "WWN" => wwn,
    "Management Only" => mgmt_only,
    "Description" => description,
    "802.1Q Mode" => mode,
    "RF Role" => rf_role,
    "RF Channel" => rf_channel,
    "PoE Mode" => poe_mode,
    "PoE Type" => poe_type,
    "Channel Frequency (MHz)" => rf_channel_frequency,
    "Channel Width (MHz)" => rf_channel_width,
    "TX Power (dBm)" => tx_power,
    "Untagged VLAN" => untagged_vlan,
    "Tagged VLANs" => tagged_vlans,
    "Mark Connected" => mark_connected,
    "Cable" => cable,
    "Cable End" => cable_end,
    "Wireless Link" => wireless_link,
    "Link Peers" => link_peers,
    "Link Peers Type" => link_peers_type,
    "Wireless LANs" => wireless_lans,
    "VRF" => vrf,
    "L2VPN Termination" => l2vpn_termination,
    "Connected Endpoints" => connected_endpoints,
    "Connected Endpoints Type" => connected_endpoints_type,
    "Reachable" => connected_endpoints_reachable,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
    "IP Addresses" => count_ipaddresses,
    "FHRP Groups" => count_fhrp_groups,
    "Occupied" => occupied,
});

/// `dcim/interface-templates/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InterfaceTemplate {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device_type: Option<Related>,
    pub module_type: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub enabled: bool,
    pub mgmt_only: bool,
    pub description: Option<String>,
    pub bridge: Option<Related>,
    pub poe_mode: Option<Choice>,
    pub poe_type: Option<Choice>,
    pub rf_role: Option<Choice>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(InterfaceTemplate {
    "ID" => id,
    "URL" => url,
    "Device Type" => device_type,
    "Module Type" => module_type,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Enabled" => enabled,
    "Management Only" => mgmt_only,
    "Description" => description,
    "Bridge" => bridge,
    "PoE Mode" => poe_mode,
    "PoE Type" => poe_type,
    "RF Role" => rf_role,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/front-ports/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontPort {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: Option<Related>,
    pub module: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub color: Option<String>,
    pub rear_port: Option<Related>,
    pub rear_port_position: Option<u32>,
    pub description: Option<String>,
    pub mark_connected: bool,
    pub cable: Option<Related>,
    pub cable_end: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub link_peers: Vec<Related>,
    pub link_peers_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_occupied")]
    pub occupied: bool,
}

netbox_record!(FrontPort {
    "ID" => id,
    "URL" => url,
    "Device" => device,
    "Module" => module,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Color" => color,
    "Rear Port" => rear_port,
    "Rear Port Position" => rear_port_position,
    "Description" => description,
    "Mark Connected" => mark_connected,
    "Cable" => cable,
    "Cable End" => cable_end,
    "Link Peers" => link_peers,
    "Link Peers Type" => link_peers_type,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
    "Occupied" => occupied,
});

/// `dcim/front-port-templates/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontPortTemplate {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device_type: Option<Related>,
    pub module_type: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub color: Option<String>,
    pub rear_port: Option<Related>,
    pub rear_port_position: Option<u32>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(FrontPortTemplate {
    "ID" => id,
    "URL" => url,
    "Device Type" => device_type,
    "Module Type" => module_type,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Color" => color,
    "Rear Port" => rear_port,
    "Rear Port Position" => rear_port_position,
    "Description" => description,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/rear-ports/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RearPort {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: Option<Related>,
    pub module: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub color: Option<String>,
    pub positions: Option<u32>,
    pub description: Option<String>,
    pub mark_connected: bool,
    pub cable: Option<Related>,
    pub cable_end: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub link_peers: Vec<Related>,
    pub link_peers_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_occupied")]
    pub occupied: bool,
}

netbox_record!(RearPort {
    "ID" => id,
    "URL" => url,
    "Device" => device,
    "Module" => module,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Color" => color,
    "Positions" => positions,
    "Description" => description,
    "Mark Connected" => mark_connected,
    "Cable" => cable,
    "Cable End" => cable_end,
    "Link Peers" => link_peers,
    "Link Peers Type" => link_peers_type,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
    "Created" => created,
    "Last Updated" => last_updated,
    "Occupied" => occupied,
});

/// `dcim/rear-port-templates/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RearPortTemplate {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device_type: Option<Related>,
    pub module_type: Option<Related>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<Choice>,
    pub color: Option<String>,
    pub positions: Option<u32>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
}

netbox_record!(RearPortTemplate {
    "ID" => id,
    "URL" => url,
    "Device Type" => device_type,
    "Module Type" => module_type,
    "Name" => name,
    "Label" => label,
    "Type" => kind,
    "Color" => color,
    "Positions" => positions,
    "Description" => description,
    "Created" => created,
    "Last Updated" => last_updated,
});

/// `dcim/inventory-items/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub device: Option<Related>,
    pub parent: Option<u64>,
    pub name: String,
    pub label: Option<String>,
    pub status: Option<Choice>,
    pub role: Option<Related>,
    pub manufacturer: Option<Related>,
    pub part_id: Option<String>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    pub discovered: bool,
    pub description: Option<String>,
    pub component_type: Option<String>,
    pub component_id: Option<u64>,
    pub component: Option<Related>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "nullable")]
    pub custom_fields: CustomFields,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    #[serde(rename = "_depth")]
    pub depth: u32,
}

netbox_record!(InventoryItem {
    "ID" => id,
    "URL" => url,
    "Device" => device,
    "Parent ID" => parent,
    "Name" => name,
    "Label" => label,
    "Status" => status,
    "Role" => role,
    "Manufacturer" => manufacturer,
    "Part ID" => part_id,
    "Serial" => serial,
    "Asset Tag" => asset_tag,
    "Discovered" => discovered,
    "Description" => description,
    "Component Type" => component_type,
    "Component ID" => component_id,
    "Component" => component,
    "Tags" => tags,
    "Custom Fields" => custom_fields,
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

    fn render(record: &impl Record) -> String {
        let mut r = Renderer::new(false);
        r.record(&record.title(), record);
        r.finish()
    }

    fn value_of<'a>(text: &'a str, label: &str) -> &'a str {
        text.lines()
            .find(|l| l.trim_start().starts_with(&format!("{}:", label)))
            .map(|l| l.trim_start()[label.len() + 1..].trim())
            .unwrap()
    }

    #[test]
    fn renders_interface_with_vlans_and_peers() {
        let iface: Interface = serde_json::from_value(json!({
            "id": 301,
            "display": "ge-0/0/1",
            "device": {"id": 3, "display": "leaf-03", "name": "leaf-03"},
            "name": "ge-0/0/1",
            "type": {"value": "1000base-t", "label": "1000BASE-T (1GE)"},
            "enabled": true,
            "mtu": 9216,
            "mac_address": null,
            "mode": {"value": "tagged", "label": "Tagged"},
            "untagged_vlan": {"id": 10, "display": "mgmt (10)", "vid": 10},
            "tagged_vlans": [
                {"id": 20, "display": "users (20)"},
                {"id": 30, "display": "voice (30)"}
            ],
            "link_peers": [{"id": 900, "display": "Eth1/1", "device": {"id": 4}}],
            "count_ipaddresses": 2,
            "_occupied": true
        }))
        .unwrap();

        let text = render(&iface);
        assert_eq!(value_of(&text, "Type"), "1000BASE-T (1GE)");
        assert_eq!(value_of(&text, "MTU"), "9216");
        assert_eq!(value_of(&text, "MAC Address"), NOT_FOUND);
        assert_eq!(value_of(&text, "Tagged VLANs"), "users (20), voice (30)");
        assert_eq!(value_of(&text, "Link Peers"), "Eth1/1");
        assert_eq!(value_of(&text, "IP Addresses"), "2");
        assert_eq!(value_of(&text, "Occupied"), "true");
    }

    #[test]
    fn front_port_points_at_rear_port() {
        let port: FrontPort = serde_json::from_value(json!({
            "id": 7,
            "display": "Port 1",
            "name": "Port 1",
            "type": {"value": "lc", "label": "LC"},
            "rear_port": {"id": 70, "display": "Rear 1"},
            "rear_port_position": 1
        }))
        .unwrap();

        let text = render(&port);
        assert_eq!(value_of(&text, "Rear Port"), "Rear 1");
        assert_eq!(value_of(&text, "Rear Port Position"), "1");
        assert_eq!(value_of(&text, "Cable"), NOT_FOUND);
    }

    #[test]
    fn inventory_item_keeps_tree_depth() {
        let item: InventoryItem = serde_json::from_value(json!({
            "id": 12,
            "display": "PSU 2",
            "name": "PSU 2",
            "parent": 10,
            "discovered": true,
            "_depth": 1
        }))
        .unwrap();

        assert_eq!(item.depth, 1);
        assert_eq!(item.parent, Some(10));
    }

    #[test]
    fn unconnected_interface_decodes_null_endpoints() {
        let page: crate::netbox::Page<Interface> = serde_json::from_value(json!({
            "count": 1,
            "next": null,
            "results": [{
                "id": 1,
                "display": "eth0",
                "name": "eth0",
                "enabled": true,
                "cable": null,
                "link_peers": [],
                "link_peers_type": null,
                "connected_endpoints": null,
                "connected_endpoints_type": null,
                "connected_endpoints_reachable": null,
                "tagged_vlans": [],
                "tags": [],
                "custom_fields": {}
            }]
        }))
        .unwrap();

        let iface = &page.results[0];
        assert!(iface.connected_endpoints.is_empty());

        let text = render(iface);
        assert_eq!(value_of(&text, "Connected Endpoints"), NOT_FOUND);
        assert_eq!(value_of(&text, "Enabled"), "true");
    }
}
