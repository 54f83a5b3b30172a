use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::prompts::PLAIN_TEXT_SYSTEM;
use crate::llm_client::LlmClient;
use crate::outreach::job::JobContext;
use crate::outreach::prompts::build_outreach_prompt;
use crate::outreach::template;
use crate::outreach::writer::{CandidateBrief, OutreachWriter};
use crate::scoring::ranking::RankedCandidate;

/// Personalized messages via the LLM client. Any error or blank answer
/// falls back to the template message.
pub struct LlmOutreachWriter {
    llm: LlmClient,
}

impl LlmOutreachWriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl OutreachWriter for LlmOutreachWriter {
    async fn write(&self, candidate: &RankedCandidate, job: &JobContext) -> String {
        let brief = CandidateBrief::from_ranked(candidate);
        let prompt = build_outreach_prompt(&brief, job);

        match self.llm.call_text(&prompt, PLAIN_TEXT_SYSTEM).await {
            Ok(message) => message,
            Err(e) => {
                warn!(
                    candidate = %brief.first_name,
                    error = %e,
                    "LLM outreach failed, falling back to template"
                );
                template::render(&brief, job)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}
