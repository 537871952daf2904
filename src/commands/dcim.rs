//! DCIM resource commands: list, get, patch

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::cli::{ConnectionArgs, DcimAction, DcimCommand};
use crate::commands::{self, ArgError};
use crate::models::*;
use crate::netbox::{NetboxClient, Page};
use crate::output::Output;
use crate::pager::{self, PageMode, PageStats, Pager, Prompt};
use crate::render::{Renderer, NOT_FOUND};
use crate::resource::Resource;

pub async fn run(cmd: DcimCommand, conn: &ConnectionArgs, out: &Output) -> Result<()> {
    let client = commands::connect(conn)?;
    let resource = cmd.resource;
    let action = cmd.action;

    match resource {
        Resource::Cables => execute::<Cable>(&client, resource, action, out).await,
        Resource::ConsolePortTemplates | Resource::ConsoleServerPortTemplates => {
            execute::<ConsolePortTemplate>(&client, resource, action, out).await
        }
        Resource::ConsolePorts | Resource::ConsoleServerPorts => {
            execute::<ConsolePort>(&client, resource, action, out).await
        }
        Resource::DeviceBayTemplates => {
            execute::<DeviceBayTemplate>(&client, resource, action, out).await
        }
        Resource::DeviceBays => execute::<DeviceBay>(&client, resource, action, out).await,
        Resource::DeviceRoles => execute::<DeviceRole>(&client, resource, action, out).await,
        Resource::DeviceTypes => execute::<DeviceType>(&client, resource, action, out).await,
        Resource::Devices => execute::<Device>(&client, resource, action, out).await,
        Resource::FrontPortTemplates => {
            execute::<FrontPortTemplate>(&client, resource, action, out).await
        }
        Resource::FrontPorts => execute::<FrontPort>(&client, resource, action, out).await,
        Resource::InterfaceTemplates => {
            execute::<InterfaceTemplate>(&client, resource, action, out).await
        }
        Resource::Interfaces => execute::<Interface>(&client, resource, action, out).await,
        Resource::InventoryItems => {
            execute::<InventoryItem>(&client, resource, action, out).await
        }
        Resource::Locations => execute::<Location>(&client, resource, action, out).await,
        Resource::Manufacturers => execute::<Manufacturer>(&client, resource, action, out).await,
        Resource::Platforms => execute::<Platform>(&client, resource, action, out).await,
        Resource::PowerFeeds => execute::<PowerFeed>(&client, resource, action, out).await,
        Resource::PowerOutletTemplates => {
            execute::<PowerOutletTemplate>(&client, resource, action, out).await
        }
        Resource::PowerOutlets => execute::<PowerOutlet>(&client, resource, action, out).await,
        Resource::PowerPanels => execute::<PowerPanel>(&client, resource, action, out).await,
        Resource::PowerPortTemplates => {
            execute::<PowerPortTemplate>(&client, resource, action, out).await
        }
        Resource::PowerPorts => execute::<PowerPort>(&client, resource, action, out).await,
        Resource::RackReservations => {
            execute::<RackReservation>(&client, resource, action, out).await
        }
        Resource::RackRoles => execute::<RackRole>(&client, resource, action, out).await,
        Resource::Racks => execute::<Rack>(&client, resource, action, out).await,
        Resource::RearPortTemplates => {
            execute::<RearPortTemplate>(&client, resource, action, out).await
        }
        Resource::RearPorts => execute::<RearPort>(&client, resource, action, out).await,
        Resource::Regions => execute::<Region>(&client, resource, action, out).await,
        Resource::SiteGroups => execute::<SiteGroup>(&client, resource, action, out).await,
        Resource::Sites => execute::<Site>(&client, resource, action, out).await,
        Resource::VirtualChassis => {
            execute::<VirtualChassis>(&client, resource, action, out).await
        }
    }
}

async fn execute<T: Record>(
    client: &NetboxClient,
    resource: Resource,
    action: DcimAction,
    out: &Output,
) -> Result<()> {
    match action {
        DcimAction::List {
            filters,
            limit,
            offset,
            all,
            first_page,
            max_pages,
        } => {
            let mode = if all {
                PageMode::All
            } else if first_page {
                PageMode::First
            } else {
                PageMode::Prompt
            };
            let query = list_query(filters, limit, offset);
            list::<T, _>(client, resource, &query, mode, max_pages, pager::stdin_prompt(), out)
                .await
                .map(|_| ())
        }
        DcimAction::Get { id } => get::<T>(client, resource, id, out).await,
        DcimAction::Patch { id, set, data } => {
            let body = patch_body(&set, data.as_deref())?;
            patch::<T>(client, resource, id, &body, out).await
        }
    }
}

// ============ Commands ============

async fn list<T: Record, P: Prompt>(
    client: &NetboxClient,
    resource: Resource,
    query: &[(String, String)],
    mode: PageMode,
    max_pages: Option<usize>,
    prompt: P,
    out: &Output,
) -> Result<PageStats> {
    let url = client.endpoint(resource.path(), query)?;
    debug!(resource = %resource.name(), ?mode, "listing");

    let mut pager = Pager::new(client, prompt, mode).max_pages(max_pages);

    let result = if out.is_json() {
        pager
            .run::<Value, _>(url, |page| {
                for record in &page.results {
                    out.emit("record", record);
                }
                out.emit(
                    "page",
                    json!({
                        "resource": resource.name(),
                        "count": page.count,
                        "returned": page.results.len(),
                        "next": page.next,
                        "previous": page.previous,
                    }),
                );
            })
            .await
    } else {
        let color = out.color();
        pager
            .run::<T, _>(url, |page| out.text(&render_page(page, color)))
            .await
    };
    let stats = result.with_context(|| format!("Failed to list {}", resource.name()))?;

    if out.is_json() {
        out.emit(
            "summary",
            json!({
                "resource": resource.name(),
                "pages": stats.pages,
                "records": stats.records,
                "total": stats.total,
            }),
        );
    } else {
        out.text(&footer(resource, &stats));
    }

    Ok(stats)
}

async fn get<T: Record>(
    client: &NetboxClient,
    resource: Resource,
    id: u64,
    out: &Output,
) -> Result<()> {
    let url = client.object(resource.path(), id)?;
    let context = || format!("Failed to fetch {} #{}", resource.name(), id);

    if out.is_json() {
        let record: Value = client.get_json(url).await.with_context(context)?;
        out.emit("record", record);
    } else {
        let record: T = client.get_json(url).await.with_context(context)?;
        out.text(&render_record(&record, out.color()));
    }

    Ok(())
}

async fn patch<T: Record>(
    client: &NetboxClient,
    resource: Resource,
    id: u64,
    body: &Value,
    out: &Output,
) -> Result<()> {
    let url = client.object(resource.path(), id)?;
    let context = || format!("Failed to update {} #{}", resource.name(), id);
    debug!(resource = %resource.name(), id, %body, "patching");

    if out.is_json() {
        let record: Value = client.patch_json(url, body).await.with_context(context)?;
        out.emit("record", record);
    } else {
        let record: T = client.patch_json(url, body).await.with_context(context)?;
        out.text(&render_record(&record, out.color()));
    }

    Ok(())
}

// ============ Helpers ============

/// Query pairs for a list request. `--limit`/`--offset` replace any
/// `limit`/`offset` given as filters.
fn list_query(
    filters: Vec<(String, String)>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Vec<(String, String)> {
    let mut query = filters;
    for (key, value) in [("limit", limit), ("offset", offset)] {
        if let Some(value) = value {
            query.retain(|(k, _)| k != key);
            query.push((key.to_string(), value.to_string()));
        }
    }
    query
}

/// Request body for a PATCH. `--set` values that parse as JSON are sent as
/// JSON, anything else as a string.
fn patch_body(set: &[(String, String)], data: Option<&str>) -> Result<Value, ArgError> {
    let body = match data {
        Some(raw) => serde_json::from_str(raw).map_err(ArgError::InvalidJson)?,
        None => Value::Object(
            set.iter()
                .map(|(key, raw)| (key.clone(), field_value(raw)))
                .collect::<Map<String, Value>>(),
        ),
    };

    match &body {
        Value::Object(map) if map.is_empty() => Err(ArgError::NothingToPatch),
        Value::Object(_) => Ok(body),
        other => Err(ArgError::NotAnObject(json_kind(other))),
    }
}

fn field_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn render_record<T: Record>(record: &T, color: bool) -> String {
    let mut r = Renderer::new(color);
    r.record(&record.title(), record);
    r.finish()
}

fn render_page<T: Record>(page: &Page<T>, color: bool) -> String {
    let mut r = Renderer::new(color);
    if page.results.is_empty() {
        r.note(NOT_FOUND);
    }
    for record in &page.results {
        r.record(&record.title(), record);
        r.blank();
    }
    r.finish()
}

fn footer(resource: Resource, stats: &PageStats) -> String {
    format!(
        "{} of {} {} shown ({} page{})\n",
        stats.records,
        stats.total,
        resource.name(),
        stats.pages,
        if stats.pages == 1 { "" } else { "s" }
    )
}
