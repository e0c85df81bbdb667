use super::transcript::Transcript;
use crate::types::result::TokenUsage;

/// Greeting the assistant opens every conversation with
pub const DEFAULT_SYSTEM_NOTICE: &str =
    "Hello! I am Train Reservation Assistant. How can I help you?";

/// State of one conversation, handed to every turn
#[derive(Debug, Clone)]
pub struct Session {
    transcript: Transcript,
    turns_processed: usize,
    usage: TokenUsage,
}

impl Session {
    pub fn new(system_notice: impl Into<String>) -> Self {
        Self {
            transcript: Transcript::new(system_notice),
            turns_processed: 0,
            usage: TokenUsage::default(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub(crate) fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Number of user turns that ran to completion
    pub fn turns_processed(&self) -> usize {
        self.turns_processed
    }

    pub(crate) fn finish_turn(&mut self) {
        self.turns_processed += 1;
    }

    /// Tokens reported by the service across the whole session
    pub fn usage(&self) -> TokenUsage {
        self.usage
    }

    pub(crate) fn record_usage(&mut self, usage: Option<TokenUsage>) {
        if let Some(usage) = usage {
            self.usage += usage;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_NOTICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::turn::Turn;

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(
            session.transcript().turns()[0],
            Turn::system(DEFAULT_SYSTEM_NOTICE)
        );
        assert_eq!(session.turns_processed(), 0);
        assert_eq!(session.usage(), TokenUsage::default());
    }

    #[test]
    fn test_record_usage_ignores_missing() {
        let mut session = Session::default();
        session.record_usage(None);
        session.record_usage(Some(TokenUsage {
            prompt_tokens: 4,
            completion_tokens: 2,
            total_tokens: 6,
        }));
        assert_eq!(session.usage().total_tokens, 6);
    }
}
