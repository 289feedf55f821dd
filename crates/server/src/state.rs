use newsreel_common::Result;
use newsreel_llm::NewsPipeline;

use crate::render::Pages;

/// Shared application state
pub struct AppState {
    /// News and script operations
    pub pipeline: NewsPipeline,

    /// Page templates
    pub pages: Pages,
}

impl AppState {
    /// Create new application state
    pub fn new(pipeline: NewsPipeline) -> Result<Self> {
        Ok(Self {
            pipeline,
            pages: Pages::new()?,
        })
    }
}
