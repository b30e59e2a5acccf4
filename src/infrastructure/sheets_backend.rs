use crate::config::StorageConfig;
use crate::domain::storage::StorageBackend;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header written above the payload cell. The payload is the first data row.
const HEADER_CELL: &str = "0";

/// Where an access token comes from. The token itself is never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSource {
    pub env: String,
    pub command: Option<Vec<String>>,
}

impl TokenSource {
    pub async fn token(&self) -> Result<String> {
        if let Ok(token) = std::env::var(&self.env) {
            let token = token.trim();
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }

        let Some((program, args)) = self.command.as_ref().and_then(|c| c.split_first()) else {
            bail!(
                "no access token: set {} or configure storage.token_command",
                self.env
            );
        };

        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("running token command `{program}`"))?;
        if !output.status.success() {
            bail!(
                "token command `{program}` exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        let token = String::from_utf8(output.stdout)
            .context("token command printed non-UTF-8 output")?
            .trim()
            .to_string();
        if token.is_empty() {
            bail!("token command `{program}` printed nothing");
        }
        Ok(token)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    major_dimension: Option<String>,
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl ValueRange {
    fn for_payload(range: String, content: &str) -> Self {
        Self {
            range: Some(range),
            major_dimension: Some("ROWS".to_string()),
            values: vec![
                vec![Value::String(HEADER_CELL.to_string())],
                vec![Value::String(content.to_string())],
            ],
        }
    }

    /// The first column of the first row under the header.
    fn payload(&self) -> Option<String> {
        let cell = self.values.get(1)?.first()?;
        let text = match cell {
            Value::String(s) => s.clone(),
            Value::Null => return None,
            other => other.to_string(),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Keeps the document in one cell of a Google Sheets worksheet.
pub struct SheetsBackend {
    client: Client,
    endpoint: String,
    spreadsheet_id: String,
    sheet: String,
    token: TokenSource,
}

impl SheetsBackend {
    pub fn new(
        endpoint: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        sheet: impl Into<String>,
        token: TokenSource,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            spreadsheet_id: spreadsheet_id.into(),
            sheet: sheet.into(),
            token,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let spreadsheet_id = config
            .spreadsheet_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| anyhow!("storage.spreadsheet_id is required for the sheets backend"))?;
        Ok(Self::new(
            config.endpoint.clone(),
            spreadsheet_id,
            config.sheet.clone(),
            TokenSource {
                env: config.token_env.clone(),
                command: config.token_command.clone(),
            },
        ))
    }

    fn payload_range(&self) -> String {
        format!("{}!A1:A2", self.sheet)
    }

    /// Everything on the worksheet outside the header and payload cells.
    fn leftover_ranges(&self) -> Vec<String> {
        vec![format!("{}!A3:A", self.sheet), format!("{}!B:ZZZ", self.sheet)]
    }

    fn spreadsheet_url(&self, tail: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)
            .with_context(|| format!("invalid sheets endpoint {}", self.endpoint))?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("sheets endpoint cannot be a base URL: {}", self.endpoint))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str()])
            .extend(tail);
        Ok(url)
    }

    fn values_url(&self, range: &str) -> Result<Url> {
        self.spreadsheet_url(&["values", range])
    }

    async fn clear_leftovers(&self, token: &str) -> Result<()> {
        let url = self.spreadsheet_url(&["values:batchClear"])?;
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "ranges": self.leftover_ranges() }))
            .send()
            .await
            .context("sheet clear request")?;
        ensure_success(response, "sheet clear").await?;
        Ok(())
    }
}

async fn ensure_success(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    bail!("{what} failed: {status} - {}", body.trim())
}

#[async_trait]
impl StorageBackend for SheetsBackend {
    async fn read(&self) -> Result<Option<String>> {
        let token = self.token.token().await?;
        let url = self.values_url(&self.payload_range())?;
        tracing::debug!(%url, "reading sheet");

        let response = self
            .client
            .get(url)
            .bearer_auth(&token)
            .send()
            .await
            .context("sheet read request")?;
        let range: ValueRange = ensure_success(response, "sheet read")
            .await?
            .json()
            .await
            .context("decoding sheet values")?;
        Ok(range.payload())
    }

    async fn write(&self, content: &str) -> Result<()> {
        let token = self.token.token().await?;

        let range = self.payload_range();
        let mut url = self.values_url(&range)?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");
        let response = self
            .client
            .put(url)
            .bearer_auth(&token)
            .json(&ValueRange::for_payload(range, content))
            .send()
            .await
            .context("sheet update request")?;
        ensure_success(response, "sheet update").await?;

        // The payload is already stored.
        if let Err(e) = self.clear_leftovers(&token).await {
            tracing::warn!(error = %e, sheet = %self.sheet, "could not clear leftover cells");
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sheet {}/{}", self.spreadsheet_id, self.sheet)
    }
}
