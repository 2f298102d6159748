use std::sync::Arc;

use crate::config::Config;
use crate::contact::mailer::EmailSender;
use crate::content::ContentDocument;
use crate::llm_client::LlmClient;
use crate::render::LayoutConfig;
use crate::theme::ThemeColors;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub content: Arc<ContentDocument>,
    /// Palettes resolved from `content.theme`, with missing roles filled in.
    pub colors: Arc<ThemeColors>,
    pub layout: LayoutConfig,
    pub llm: LlmClient,
    /// Pluggable e-mail sender. Default: HttpMailer.
    pub mailer: Arc<dyn EmailSender>,
}

impl AppState {
    pub fn new(
        content: ContentDocument,
        layout: LayoutConfig,
        llm: LlmClient,
        mailer: Arc<dyn EmailSender>,
    ) -> Self {
        let colors = ThemeColors::from_content(&content.theme);
        Self {
            content: Arc::new(content),
            colors: Arc::new(colors),
            layout,
            llm,
            mailer,
        }
    }

    pub fn from_config(config: &Config, content: ContentDocument, mailer: Arc<dyn EmailSender>) -> Self {
        let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_base_url.clone());
        Self::new(content, config.layout, llm, mailer)
    }
}
