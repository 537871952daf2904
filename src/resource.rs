//! Supported DCIM endpoints

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Cables,
    ConsolePortTemplates,
    ConsolePorts,
    ConsoleServerPortTemplates,
    ConsoleServerPorts,
    DeviceBayTemplates,
    DeviceBays,
    DeviceRoles,
    DeviceTypes,
    Devices,
    FrontPortTemplates,
    FrontPorts,
    InterfaceTemplates,
    Interfaces,
    InventoryItems,
    Locations,
    Manufacturers,
    Platforms,
    PowerFeeds,
    PowerOutletTemplates,
    PowerOutlets,
    PowerPanels,
    PowerPortTemplates,
    PowerPorts,
    RackReservations,
    RackRoles,
    Racks,
    RearPortTemplates,
    RearPorts,
    Regions,
    SiteGroups,
    Sites,
    VirtualChassis,
}

impl Resource {
    pub fn all() -> &'static [Resource] {
        Self::value_variants()
    }

    /// CLI name, e.g. `console-ports`
    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }

    /// Collection path relative to the API root
    pub fn path(self) -> &'static str {
        match self {
            Self::Cables => "dcim/cables/",
            Self::ConsolePortTemplates => "dcim/console-port-templates/",
            Self::ConsolePorts => "dcim/console-ports/",
            Self::ConsoleServerPortTemplates => "dcim/console-server-port-templates/",
            Self::ConsoleServerPorts => "dcim/console-server-ports/",
            Self::DeviceBayTemplates => "dcim/device-bay-templates/",
            Self::DeviceBays => "dcim/device-bays/",
            Self::DeviceRoles => "dcim/device-roles/",
            Self::DeviceTypes => "dcim/device-types/",
            Self::Devices => "dcim/devices/",
            Self::FrontPortTemplates => "dcim/front-port-templates/",
            Self::FrontPorts => "dcim/front-ports/",
            Self::InterfaceTemplates => "dcim/interface-templates/",
            Self::Interfaces => "dcim/interfaces/",
            Self::InventoryItems => "dcim/inventory-items/",
            Self::Locations => "dcim/locations/",
            Self::Manufacturers => "dcim/manufacturers/",
            Self::Platforms => "dcim/platforms/",
            Self::PowerFeeds => "dcim/power-feeds/",
            Self::PowerOutletTemplates => "dcim/power-outlet-templates/",
            Self::PowerOutlets => "dcim/power-outlets/",
            Self::PowerPanels => "dcim/power-panels/",
            Self::PowerPortTemplates => "dcim/power-port-templates/",
            Self::PowerPorts => "dcim/power-ports/",
            Self::RackReservations => "dcim/rack-reservations/",
            Self::RackRoles => "dcim/rack-roles/",
            Self::Racks => "dcim/racks/",
            Self::RearPortTemplates => "dcim/rear-port-templates/",
            Self::RearPorts => "dcim/rear-ports/",
            Self::Regions => "dcim/regions/",
            Self::SiteGroups => "dcim/site-groups/",
            Self::Sites => "dcim/sites/",
            Self::VirtualChassis => "dcim/virtual-chassis/",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Cables => "Physical connections between component terminations",
            Self::ConsolePortTemplates => "Console ports defined on device types",
            Self::ConsolePorts => "Console ports of devices",
            Self::ConsoleServerPortTemplates => "Console server ports defined on device types",
            Self::ConsoleServerPorts => "Console server ports of devices",
            Self::DeviceBayTemplates => "Device bays defined on device types",
            Self::DeviceBays => "Slots that hold child devices",
            Self::DeviceRoles => "Functional roles assigned to devices",
            Self::DeviceTypes => "Hardware models",
            Self::Devices => "Physical devices",
            Self::FrontPortTemplates => "Front pass-through ports defined on device types",
            Self::FrontPorts => "Front pass-through ports",
            Self::InterfaceTemplates => "Interfaces defined on device types",
            Self::Interfaces => "Network interfaces of devices",
            Self::InventoryItems => "Components tracked inside devices",
            Self::Locations => "Rooms, floors and cages within sites",
            Self::Manufacturers => "Hardware vendors",
            Self::Platforms => "Operating systems and software platforms",
            Self::PowerFeeds => "Electrical circuits from power panels",
            Self::PowerOutletTemplates => "Power outlets defined on device types",
            Self::PowerOutlets => "Power outlets of devices",
            Self::PowerPanels => "Electrical distribution panels",
            Self::PowerPortTemplates => "Power ports defined on device types",
            Self::PowerPorts => "Power inlets of devices",
            Self::RackReservations => "Reserved rack units",
            Self::RackRoles => "Functional roles assigned to racks",
            Self::Racks => "Equipment racks",
            Self::RearPortTemplates => "Rear pass-through ports defined on device types",
            Self::RearPorts => "Rear pass-through ports",
            Self::Regions => "Geographic groupings of sites",
            Self::SiteGroups => "Functional groupings of sites",
            Self::Sites => "Physical locations",
            Self::VirtualChassis => "Devices managed as one logical chassis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cli_names_match_api_paths() {
        for resource in Resource::all() {
            assert_eq!(
                resource.path(),
                format!("dcim/{}/", resource.name()),
                "{:?}",
                resource
            );
        }
    }

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<_> = Resource::all().iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Resource::all().len());
    }
}
