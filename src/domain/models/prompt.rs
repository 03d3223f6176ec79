use super::{Question, REFUSAL_MESSAGE};

/// Behavioural rules given to the model ahead of every question.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a BANKING DOMAIN EXPERT.

Rules:
- Answer ONLY banking-related questions
- Give long, detailed, student-friendly answers
- Explain with:
  • definition
  • purpose
  • features
  • examples
  • advantages
- Do NOT ask for PIN, OTP, or account numbers
- Do NOT perform transactions";

const QUESTION_HEADER: &str = "User Question:";
const ANSWER_SUFFIX: &str = "Answer in detail:";

/// The full text sent to the inference backend for a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    pub fn for_question(question: &Question) -> Self {
        let text = format!(
            "\n{SYSTEM_INSTRUCTION}\n\n\
             If the question is NOT related to banking, reply exactly:\n\
             \"{REFUSAL_MESSAGE}\"\n\n\
             {QUESTION_HEADER}\n{}\n\n{ANSWER_SUFFIX}\n",
            question.text()
        );
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_layout() {
        let question = Question::parse("What is a loan?").unwrap();
        let prompt = Prompt::for_question(&question);
        let text = prompt.as_str();

        let rules = text.find("BANKING DOMAIN EXPERT").unwrap();
        let refusal = text.find(REFUSAL_MESSAGE).unwrap();
        let asked = text.find("What is a loan?").unwrap();
        let suffix = text.find("Answer in detail:").unwrap();
        assert!(rules < refusal && refusal < asked && asked < suffix);
    }

    #[test]
    fn test_prompt_forbids_credentials_and_transactions() {
        let question = Question::parse("What is a loan?").unwrap();
        let prompt = Prompt::for_question(&question);
        assert!(prompt.as_str().contains("PIN, OTP, or account numbers"));
        assert!(prompt.as_str().contains("Do NOT perform transactions"));
    }
}
