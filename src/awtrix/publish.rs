//! Publishing draw commands to an Awtrix device over its local HTTP API.

use anyhow::Context;
use reqwest::{Client, Url};
use serde::Serialize;

/// Name of the custom-app slot the chart is published into.
const APP_NAME: &str = "tibberPrices";

/// One custom-app payload: an ordered list of draw commands.
#[derive(Debug, Serialize)]
pub struct AwtrixApp {
    pub draw: Vec<AwtrixDrawCommand>,
}

/// A single command of the Awtrix drawing instruction set.
///
/// Only two commands are used here: `dt` draws text, `df` fills a
/// rectangle. Fields a command does not use are left out of the JSON.
#[derive(Debug, Serialize)]
pub struct AwtrixDrawCommand {
    pub command: &'static str,
    pub x: i32,
    pub y: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub color: &'static str,
}

impl AwtrixDrawCommand {
    /// A `dt` command drawing `text` at (`x`, `y`).
    pub fn text(x: i32, y: i32, text: impl Into<String>, color: &'static str) -> Self {
        Self {
            command: "dt",
            x,
            y,
            width: None,
            height: None,
            text: Some(text.into()),
            color,
        }
    }

    /// A `df` command filling a `width` × `height` rectangle at (`x`, `y`).
    pub fn fill(x: i32, y: i32, width: i32, height: i32, color: &'static str) -> Self {
        Self {
            command: "df",
            x,
            y,
            width: Some(width),
            height: Some(height),
            text: None,
            color,
        }
    }
}

/// Push a custom-app payload to the device at `awtrix_ip`.
///
/// The device lives on the local network and is expected to be reachable;
/// any transport error or non-success status propagates to the caller.
pub async fn post_application(
    client: &Client,
    awtrix_ip: &str,
    app: &AwtrixApp,
) -> anyhow::Result<()> {
    let mut url = Url::parse(&format!("http://{awtrix_ip}/api/custom"))
        .with_context(|| format!("invalid Awtrix address: {awtrix_ip}"))?;
    url.query_pairs_mut().append_pair("name", APP_NAME);

    client
        .post(url)
        .json(app)
        .send()
        .await
        .context("failed to send custom application to Awtrix")?
        .error_for_status()
        .context("non-success status from Awtrix")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_command_serializes_without_rectangle_fields() {
        let command = AwtrixDrawCommand::text(0, 1, " 23", "#FFFFFF");
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({"command": "dt", "x": 0, "y": 1, "text": " 23", "color": "#FFFFFF"})
        );
    }

    #[test]
    fn fill_command_serializes_without_text_field() {
        let command = AwtrixDrawCommand::fill(12, 4, 1, 8, "#00ff00");
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({"command": "df", "x": 12, "y": 4, "width": 1, "height": 8, "color": "#00ff00"})
        );
    }

    #[test]
    fn app_payload_keeps_command_order() {
        let app = AwtrixApp {
            draw: vec![
                AwtrixDrawCommand::text(0, 1, "?", "#FFFFFF"),
                AwtrixDrawCommand::fill(12, 4, 1, 8, "#ff0000"),
            ],
        };
        let value = serde_json::to_value(&app).unwrap();
        let draw = value["draw"].as_array().unwrap();
        assert_eq!(draw.len(), 2);
        assert_eq!(draw[0]["command"], "dt");
        assert_eq!(draw[1]["command"], "df");
    }
}
