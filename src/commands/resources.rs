//! Supported resource listing

use colored::Colorize;
use serde_json::json;

use crate::output::Output;
use crate::resource::Resource;

pub fn run(out: &Output) {
    if out.is_json() {
        for resource in Resource::all() {
            out.emit(
                "resource",
                json!({
                    "name": resource.name(),
                    "path": resource.path(),
                    "summary": resource.summary(),
                }),
            );
        }
        return;
    }

    out.text(&table(Resource::all(), out.color()));
}

fn table(resources: &[Resource], color: bool) -> String {
    let width = resources
        .iter()
        .map(|r| r.name().len())
        .max()
        .unwrap_or(0);

    let mut text = String::new();
    for resource in resources {
        let name = format!("{:<width$}", resource.name(), width = width);
        let name = if color {
            name.cyan().to_string()
        } else {
            name
        };
        text.push_str(&format!("{}  {}\n", name, resource.summary()));
    }
    text.push_str("\nUsage: netbox-cli dcim <resource> <list|get|patch>\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_summaries() {
        let text = table(&[Resource::Racks, Resource::ConsoleServerPortTemplates], false);
        let lines: Vec<&str> = text.lines().collect();

        let racks_col = lines[0].find("Equipment racks").unwrap();
        let cspt_col = lines[1].find("Console server ports").unwrap();
        assert_eq!(racks_col, cspt_col);
        assert!(lines[0].starts_with("racks "));
    }

    #[test]
    fn lists_every_resource() {
        let text = table(Resource::all(), false);
        for resource in Resource::all() {
            assert!(text.contains(&resource.name()));
        }
    }
}
