//! Netbox status (connectivity check)

use anyhow::{Context, Result};
use serde_json::Value;

use crate::cli::ConnectionArgs;
use crate::commands;
use crate::models::Status;
use crate::netbox::NetboxClient;
use crate::output::Output;
use crate::render::Renderer;

pub async fn run(conn: &ConnectionArgs, out: &Output) -> Result<()> {
    let client = commands::connect(conn)?;
    show(&client, out).await
}

async fn show(client: &NetboxClient, out: &Output) -> Result<()> {
    let url = client.endpoint("status/", &[])?;
    let context = || format!("Failed to reach Netbox at {}", url);

    if out.is_json() {
        let status: Value = client.get_json(url.clone()).await.with_context(context)?;
        out.emit("status", status);
    } else {
        let status: Status = client.get_json(url.clone()).await.with_context(context)?;
        out.text(&render(&status, out.color()));
    }

    Ok(())
}

fn render(status: &Status, color: bool) -> String {
    let mut r = Renderer::new(color);
    r.record("Netbox", status);
    r.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netbox::ConnectionConfig;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, token: &str) -> NetboxClient {
        NetboxClient::new(&ConnectionConfig {
            base_url: format!("{}/api", server.uri()),
            token: token.into(),
            verify_tls: true,
            ca_cert: None,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn fetches_status_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/status/"))
            .and(header("Authorization", "Bearer nbt_abc.def"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "netbox-version": "4.2.1",
                "django-version": "5.1.4",
                "python-version": "3.12.3",
                "plugins": {},
                "rq-workers-running": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        show(&client(&server, "nbt_abc.def"), &Output::capturing(false))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unauthorized_keeps_the_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/status/"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})),
            )
            .mount(&server)
            .await;

        let err = show(&client(&server, "bad"), &Output::capturing(false))
            .await
            .unwrap_err();

        let cli = crate::output::CliError::from_anyhow(&err);
        assert_eq!(cli.code, "UNAUTHORIZED");
        assert_eq!(cli.exit_code(), 3);
        assert!(cli.message.unwrap().contains("Invalid token"));
    }

    #[test]
    fn renders_plugins_placeholder() {
        let status: Status = serde_json::from_value(json!({
            "netbox-version": "3.7.8",
            "plugins": {}
        }))
        .unwrap();

        let text = render(&status, false);
        assert!(text.starts_with("Netbox\n"));
        assert!(text.contains("3.7.8"));
        assert!(text.contains("no entry found"));
    }

    #[tokio::test]
    async fn json_mode_emits_the_status_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/status/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "netbox-version": "4.2.1",
                "plugins": {"netbox_bgp": "0.15.0"}
            })))
            .mount(&server)
            .await;

        let out = Output::capturing(true);
        show(&client(&server, "abc"), &out).await.unwrap();

        let events = out.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["type"], "status");
        assert_eq!(events[0]["payload"]["plugins"]["netbox_bgp"], "0.15.0");
    }
}
