//! AI financial advice
//!
//! Sends a summary of the ledger to a language model provider and returns
//! plain-text advice. Requests run on a background task; see [`spawn_advice`].

mod client;
mod error;
mod prompt;
mod worker;

pub use client::{AdvisorClient, OpenAiAdvisor, API_KEY_ENV};
pub use error::AdviceError;
pub use prompt::{build_prompt, transaction_summary, SYSTEM_PROMPT};
pub use worker::{spawn_advice, AdviceHandle};
