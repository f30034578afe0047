use phishguard_types::{ClassifyRequest, ClassifyResponse, ErrorBody, InterfaceConfig, Label};

const API_BASE_URL: &str = "http://localhost:7860";

pub struct ApiClient {
    client: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn interface_config(&self) -> Result<InterfaceConfig, Box<dyn std::error::Error>> {
        let response = self
            .client
            .get(format!("{API_BASE_URL}/config"))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            let error_text = response.text().await?;
            Err(format!("API error: {error_text}").into())
        }
    }

    pub async fn classify(&self, text: &str) -> Result<Label, Box<dyn std::error::Error>> {
        let response = self
            .client
            .post(format!("{API_BASE_URL}/v1/classify"))
            .json(&ClassifyRequest::new(text))
            .send()
            .await?;

        if response.status().is_success() {
            let body: ClassifyResponse = response.json().await?;
            Ok(body.label)
        } else {
            let error_text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&error_text)
                .map(|body| body.error)
                .unwrap_or(error_text);
            Err(message.into())
        }
    }
}
