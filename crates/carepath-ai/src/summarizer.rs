//! Record explanations and clinic recommendations that never fail.
//!
//! Every outcome is a piece of text for the patient: missing configuration,
//! backend errors and empty answers each map to a fixed message.

use carepath_model::{Hospital, MedicalRecord};
use tracing::{debug, warn};

use crate::client::{GeminiClient, TextGenerator};
use crate::config::SummarizerSettings;
use crate::prompt::{explain_prompt, recommend_prompt};

pub const EXPLAIN_NOT_CONFIGURED: &str = "API Key 未配置，无法使用智能分析功能。";
pub const EXPLAIN_UNAVAILABLE: &str = "智能服务暂时不可用，请检查网络连接。";
pub const EXPLAIN_EMPTY: &str = "无法生成解读，请稍后再试。";

pub const RECOMMEND_NOT_CONFIGURED: &str = "API Key 未配置。";
pub const RECOMMEND_UNAVAILABLE: &str = "智能推荐暂时不可用。";
pub const RECOMMEND_EMPTY: &str = "无法生成推荐。";

/// Fixed replies for one kind of request.
struct Fallbacks {
    not_configured: &'static str,
    unavailable: &'static str,
    empty: &'static str,
}

const EXPLAIN: Fallbacks = Fallbacks {
    not_configured: EXPLAIN_NOT_CONFIGURED,
    unavailable: EXPLAIN_UNAVAILABLE,
    empty: EXPLAIN_EMPTY,
};

const RECOMMEND: Fallbacks = Fallbacks {
    not_configured: RECOMMEND_NOT_CONFIGURED,
    unavailable: RECOMMEND_UNAVAILABLE,
    empty: RECOMMEND_EMPTY,
};

/// Front for the text generator.
///
/// Calls are not de-duplicated: asking twice for the same record sends two
/// requests.
pub struct Summarizer {
    backend: Option<Box<dyn TextGenerator + Send + Sync>>,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl Summarizer {
    /// Summarizer backed by the Generative Language API. Without a key, or
    /// if the HTTP client cannot be built, every call returns the
    /// not-configured text.
    pub fn from_settings(settings: &SummarizerSettings) -> Self {
        let Some(key) = settings.api_key() else {
            debug!("no API key configured");
            return Self::unconfigured();
        };
        match GeminiClient::new(settings, key) {
            Ok(client) => Self::with_backend(client),
            Err(err) => {
                warn!(error = %err, "could not build generation client");
                Self::unconfigured()
            }
        }
    }

    pub fn with_backend(backend: impl TextGenerator + Send + Sync + 'static) -> Self {
        Self {
            backend: Some(Box::new(backend)),
        }
    }

    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Plain-language explanation of a record.
    pub fn explain_record(&self, record: &MedicalRecord) -> String {
        self.run(&EXPLAIN, "explain", || explain_prompt(record))
    }

    /// Community clinic recommendation for continuing the record's treatment.
    pub fn recommend_hospital(&self, record: &MedicalRecord, hospitals: &[Hospital]) -> String {
        self.run(&RECOMMEND, "recommend", || recommend_prompt(record, hospitals))
    }

    fn run(
        &self,
        fallbacks: &Fallbacks,
        request: &'static str,
        prompt: impl FnOnce() -> String,
    ) -> String {
        let Some(backend) = self.backend.as_ref() else {
            return fallbacks.not_configured.to_string();
        };
        match backend.generate(&prompt()) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(request, "backend returned no text");
                fallbacks.empty.to_string()
            }
            Err(err) => {
                warn!(request, error = %err, retryable = err.is_retryable(), "generation failed");
                fallbacks.unavailable.to_string()
            }
        }
    }
}
