//! Typed mirrors of the Netbox DCIM schemas
//!
//! Every model defaults all of its fields so brief responses and older or
//! newer Netbox releases still decode.

use serde::de::DeserializeOwned;

use crate::render::Render;

/// A top-level object returned by a DCIM endpoint
pub trait Record: DeserializeOwned + Render {
    fn id(&self) -> u64;

    fn display(&self) -> &str;

    /// Heading used when the record is rendered
    fn title(&self) -> String {
        let display = self.display().trim();
        if display.is_empty() {
            format!("#{}", self.id())
        } else {
            display.to_string()
        }
    }
}

/// Implements `Render` (label => field, in print order) and `Record`
macro_rules! netbox_record {
    ($ty:ident { $($label:literal => $field:ident),* $(,)? }) => {
        impl $crate::render::Render for $ty {
            fn render(&self, r: &mut $crate::render::Renderer) {
                $( r.field($label, &self.$field); )*
            }
        }

        impl $crate::models::Record for $ty {
            fn id(&self) -> u64 {
                self.id
            }

            fn display(&self) -> &str {
                &self.display
            }
        }
    };
}

pub mod cables;
pub mod console;
pub mod devices;
pub mod nested;
pub mod organization;
pub mod ports;
pub mod power;
pub mod racks;
pub mod status;

pub use cables::Cable;
pub use console::{ConsolePort, ConsolePortTemplate};
pub use devices::{
    Device, DeviceBay, DeviceBayTemplate, DeviceRole, DeviceType, Manufacturer, Platform,
    VirtualChassis,
};
pub use organization::{Location, Region, Site, SiteGroup};
pub use ports::{
    FrontPort, FrontPortTemplate, Interface, InterfaceTemplate, InventoryItem, RearPort,
    RearPortTemplate,
};
pub use power::{
    PowerFeed, PowerOutlet, PowerOutletTemplate, PowerPanel, PowerPort, PowerPortTemplate,
};
pub use racks::{Rack, RackReservation, RackRole};
pub use status::Status;
