//! Brief references and small value types shared by every DCIM model

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::render::Field;

/// Custom field values keyed by field name
pub type CustomFields = BTreeMap<String, Value>;

/// Decode an explicit `null` like a missing key. Netbox sends `null` for
/// list fields such as `connected_endpoints` on unconnected components.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Brief reference to another object (`{id, url, display, name}`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Related {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub label: Option<String>,
}

impl Field for Related {
    fn text(&self) -> Option<String> {
        [Some(&self.display), self.name.as_ref(), self.label.as_ref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .cloned()
            .or_else(|| (self.id != 0).then(|| format!("#{}", self.id)))
    }
}

/// Choice field: machine value plus human label
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub value: Value,
    pub label: String,
}

impl Field for Choice {
    fn text(&self) -> Option<String> {
        self.label.text().or_else(|| self.value.text())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub slug: String,
    pub color: String,
}

impl Field for Tag {
    fn text(&self) -> Option<String> {
        self.name.text().or_else(|| self.display.text())
    }
}

/// One end of a cable
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Termination {
    pub object_type: String,
    pub object_id: u64,
    pub object: Option<Related>,
}

impl Field for Termination {
    fn text(&self) -> Option<String> {
        let kind = format!("{} #{}", self.object_type, self.object_id);
        match self.object.as_ref().and_then(Field::text) {
            Some(name) => Some(format!("{} [{}]", name, kind)),
            None if self.object_id != 0 => Some(kind),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn related_prefers_display_then_name() {
        let related: Related = serde_json::from_value(json!({
            "id": 4, "url": "https://nb/api/dcim/devices/4/", "display": "", "name": "core-1"
        }))
        .unwrap();
        assert_eq!(related.text().as_deref(), Some("core-1"));

        let unnamed: Related = serde_json::from_value(json!({"id": 9, "name": null})).unwrap();
        assert_eq!(unnamed.text().as_deref(), Some("#9"));

        assert_eq!(Related::default().text(), None);
    }

    #[test]
    fn choice_falls_back_to_value() {
        let width: Choice = serde_json::from_value(json!({"value": 19, "label": ""})).unwrap();
        assert_eq!(width.text().as_deref(), Some("19"));

        let status: Choice =
            serde_json::from_value(json!({"value": "active", "label": "Active"})).unwrap();
        assert_eq!(status.text().as_deref(), Some("Active"));
    }

    #[test]
    fn termination_names_object_and_type() {
        let end: Termination = serde_json::from_value(json!({
            "object_type": "dcim.interface",
            "object_id": 12,
            "object": {"id": 12, "display": "eth0", "name": "eth0"}
        }))
        .unwrap();
        assert_eq!(end.text().as_deref(), Some("eth0 [dcim.interface #12]"));
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Lists {
        #[serde(deserialize_with = "nullable")]
        peers: Vec<Related>,
        #[serde(deserialize_with = "nullable")]
        custom_fields: CustomFields,
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let lists: Lists =
            serde_json::from_value(json!({"peers": null, "custom_fields": null})).unwrap();
        assert!(lists.peers.is_empty());
        assert!(lists.custom_fields.is_empty());

        let lists: Lists = serde_json::from_value(json!({"peers": [{"id": 4}]})).unwrap();
        assert_eq!(lists.peers[0].id, 4);
    }
}
