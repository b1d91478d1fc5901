use std::time::Duration;

use reqwest::blocking::Client;
use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::core::FukushuError;
use crate::persistence::ConnectionConfig;

const BRIDGE_API_VERSION: u32 = 1;

/// Envelope every bridge response comes back in.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self) -> Result<T, FukushuError> {
        if let Some(error) = self.error {
            return Err(FukushuError::Bridge(error));
        }
        self.result.ok_or_else(|| FukushuError::Bridge("empty response".to_string()))
    }
}

/// Blocking client for the sheet bridge: a small HTTP service that fronts one
/// spreadsheet and speaks `{action, version, params}` requests.
pub struct SheetsClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl SheetsClient {
    pub fn new(config: &ConnectionConfig) -> Result<Self, FukushuError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| FukushuError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(SheetsClient {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn make_request<T: DeserializeOwned>(
        &self,
        action: &str,
        params: Option<Value>,
    ) -> Result<T, FukushuError> {
        let mut body = serde_json::Map::new();
        body.insert("action".to_string(), Value::String(action.to_string()));
        body.insert("version".to_string(), Value::Number(BRIDGE_API_VERSION.into()));
        if let Some(params) = params {
            body.insert("params".to_string(), params);
        }

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(FukushuError::Bridge(format!(
                "HTTP {} from {}",
                response.status(),
                self.endpoint
            )));
        }

        let envelope: ApiResponse<T> = response.json()?;
        envelope.into_result()
    }

    /// Fetches every cell row of the worksheet. Cells arrive as raw JSON
    /// values; the bridge may hand dates or counts back typed rather than as
    /// strings, so coercion is the caller's job.
    pub fn read_rows(&self, worksheet: &str) -> Result<Vec<Vec<Value>>, FukushuError> {
        let params = serde_json::json!({ "worksheet": worksheet });
        self.make_request("readRows", Some(params))
    }

    /// Replaces the worksheet contents wholesale.
    pub fn update_rows(&self, worksheet: &str, rows: Vec<Vec<Value>>) -> Result<(), FukushuError> {
        let params = serde_json::json!({ "worksheet": worksheet, "rows": rows });
        // The bridge acks an update with `result: true`.
        let _acked: bool = self.make_request("updateRows", Some(params))?;
        Ok(())
    }

    /// Cheap reachability probe for the connection settings dialog.
    pub fn ping(&self) -> bool {
        self.make_request::<u32>("version", None).is_ok()
    }
}
