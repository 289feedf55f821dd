//! HTML page rendering
//!
//! One handlebars template renders every state of the form. All values go
//! through `{{ }}` so they are HTML-escaped.

use handlebars::Handlebars;
use newsreel_common::{NewsreelError, Result};
use serde::Serialize;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI News &amp; Script Generator</title>
<style>
body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
.notice { padding: .6rem .8rem; border-radius: .4rem; margin: .6rem 0; }
.notice.success { background: #e6f4ea; }
.notice.warning { background: #fff4e5; }
.notice.error { background: #fdecea; }
.text { white-space: pre-wrap; line-height: 1.5; }
footer { margin-top: 2rem; border-top: 1px solid #ddd; color: #777; font-size: .85rem; padding-top: .6rem; }
</style>
</head>
<body>
<h1>📰 AI News &amp; Video Script Generator</h1>
<p>Type any <strong>topic, keyword, or phrase</strong> and get the latest news about it!</p>
<p>Then optionally create a <strong>video script</strong> out of that news 🚀</p>

<form method="get" action="/news">
  <label for="topic">🔎 Enter your topic:</label>
  <input id="topic" name="topic" type="text" value="{{topic}}">
  <button type="submit">Search</button>
</form>

{{#each notices}}
<div class="notice {{kind}}">{{text}}</div>
{{/each}}

{{#if news}}
<h2>📰 Latest News:</h2>
<div class="text" id="news">{{news}}</div>

<form method="post" action="/script">
  <input type="hidden" name="topic" value="{{topic}}">
  <input type="hidden" name="news" value="{{news}}">
  <p>🎬 Would you like to generate a video transcription?</p>
  <label><input type="radio" name="generate" value="no"{{#unless generate_script}} checked{{/unless}}> No</label>
  <label><input type="radio" name="generate" value="yes"{{#if generate_script}} checked{{/if}}> Yes</label>
  <button type="submit">Continue</button>
</form>
{{/if}}

{{#if script}}
<h2>🎥 Video Script:</h2>
<div class="text" id="script">{{script}}</div>
<form method="post" action="/download">
  <input type="hidden" name="script" value="{{script}}">
  <button type="submit">📥 Download Script as TXT</button>
</form>
{{/if}}

<footer>Made with ❤️ using EURI AI and Rust.</footer>
</body>
</html>
"#;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Message shown above the results
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Everything the page template needs
#[derive(Debug, Default, Serialize)]
pub struct PageView {
    pub topic: String,
    pub news: Option<String>,
    pub script: Option<String>,
    pub generate_script: bool,
    pub notices: Vec<Notice>,
}

impl PageView {
    pub fn for_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    fn push(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            text: text.into(),
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, format!("✅ {}", text.into()));
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Warning, format!("⚠️ {}", text.into()));
    }

    /// Add reported pipeline errors
    pub fn errors(&mut self, messages: Vec<String>) {
        for message in messages {
            self.push(NoticeKind::Error, format!("❌ {}", message));
        }
    }
}

/// Compiled page templates
pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string("page", PAGE_TEMPLATE)
            .map_err(|e| NewsreelError::internal(format!("Invalid page template: {}", e)))?;
        Ok(Self { registry })
    }

    pub fn render(&self, view: &PageView) -> Result<String> {
        self.registry
            .render("page", view)
            .map_err(|e| NewsreelError::internal(format!("Failed to render page: {}", e)))
    }
}
