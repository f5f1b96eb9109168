//! Prompt Submitter - 阅读端提交提示词
//!
//! 围绕一次 [`StoryBackendPort::generate`] 调用驱动 [`ReaderSession`] 的两阶段状态变更

use std::sync::Arc;

use crate::application::commands::story_commands::SubmitOutcome;
use crate::application::ports::StoryBackendPort;
use crate::domain::book::ReaderSession;

pub struct PromptSubmitter {
    backend: Arc<dyn StoryBackendPort>,
}

impl PromptSubmitter {
    pub fn new(backend: Arc<dyn StoryBackendPort>) -> Self {
        Self { backend }
    }

    /// 提交提示词
    ///
    /// 提示词为空或已有请求进行中时不发请求；否则只发一次请求，无重试。
    ///
    /// 会话在整个请求期间被独占借用，调用方在此期间读不到 `is_in_flight()`。
    /// 需要在请求进行中渲染加载状态时，直接使用
    /// [`ReaderSession::begin_submission`] / [`ReaderSession::complete_submission`]，
    /// 在两者之间自行调用 [`StoryBackendPort::generate`]。
    pub async fn submit(&self, session: &mut ReaderSession, raw_prompt: &str) -> SubmitOutcome {
        let Some(request) = session.begin_submission(raw_prompt) else {
            return SubmitOutcome::Skipped;
        };

        tracing::info!(prompt = %request.prompt.preview(50), "Submitting prompt");

        let result = self.backend.generate(&request).await;
        let outcome = if result.is_ok() {
            SubmitOutcome::Loaded
        } else {
            SubmitOutcome::Failed
        };

        session.complete_submission(result);
        outcome
    }
}
