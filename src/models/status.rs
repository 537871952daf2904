use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::nested::nullable;
use crate::render::{Render, Renderer};

/// `/api/status/`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(rename = "netbox-version")]
    pub netbox_version: Option<String>,
    #[serde(rename = "netbox-full-version")]
    pub netbox_full_version: Option<String>,
    #[serde(rename = "django-version")]
    pub django_version: Option<String>,
    #[serde(rename = "python-version")]
    pub python_version: Option<String>,
    #[serde(rename = "installed-apps")]
    #[serde(deserialize_with = "nullable")]
    pub installed_apps: BTreeMap<String, Value>,
    #[serde(deserialize_with = "nullable")]
    pub plugins: BTreeMap<String, Value>,
    #[serde(rename = "rq-workers-running")]
    pub rq_workers_running: Option<u64>,
}

impl Render for Status {
    fn render(&self, r: &mut Renderer) {
        r.field(
            "Netbox Version",
            &self.netbox_full_version.as_ref().or(self.netbox_version.as_ref()),
        );
        r.field("Django Version", &self.django_version);
        r.field("Python Version", &self.python_version);
        r.field("RQ Workers Running", &self.rq_workers_running);
        r.field("Plugins", &self.plugins);
        r.field("Installed Apps", &self.installed_apps);
    }
}
