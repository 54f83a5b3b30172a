// Outreach: turns a ranking into recruiter messages for the top candidates.

pub mod handlers;
pub mod job;
pub mod llm;
pub mod prompts;
pub mod template;
pub mod writer;
