use serde::{Deserialize, Serialize};

/// Topic search query
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    /// Topic, keyword, or phrase
    #[serde(default)]
    pub topic: String,
}

/// Script generation form
#[derive(Debug, Deserialize)]
pub struct ScriptForm {
    /// Topic the news was fetched for
    #[serde(default)]
    pub topic: String,

    /// News summary shown on the previous page
    pub news: String,

    /// "yes" to generate a script
    #[serde(default)]
    pub generate: String,
}

impl ScriptForm {
    pub fn wants_script(&self) -> bool {
        self.generate.eq_ignore_ascii_case("yes")
    }
}

/// Script download form
#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    /// Script text
    pub script: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub news_model: String,
    pub script_model: String,
}
