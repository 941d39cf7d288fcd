//! Facilitator prompt templates.
//!
//! Every submission produces exactly two messages: the fixed system
//! instruction and a user message that embeds the scenario and the opinion,
//! followed by the six-part response structure the facilitator must follow.

use crate::domain::scenario::Scenario;

/// Upper bound on generated tokens per feedback.
pub const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Sampling temperature used for every feedback request.
pub const TEMPERATURE: f32 = 0.7;

/// System instruction framing the model as a neutral debate facilitator.
pub const SYSTEM_INSTRUCTION: &str = "당신은 윤리적 딜레마에 대해 논리적이고 공정한 피드백을 제공하는 AI 조교입니다.
제시된 참고 자료를 고려하여 답변해주세요.
사용자가 토론 주제에서 벗어난 경우, 예의 바르게 주제로 돌아오도록 유도해주세요.
사용자의 의견에 근거가 부족한 경우, 추가적인 근거를 요청하세요.";

const RESPONSE_FORMAT: &str = "다음 형식으로 응답해주세요:
1. 의견에 대한 분석 (토론 주제 관련성 및 근거의 적절성 평가 포함)
2. 가능한 대안적 관점
3. 추가 고려사항
4. 참고 자료와 연관된 분석
5. (필요시) 토론 주제로의 유도 또는 추가 근거 요청
6. 피드백을 반영해 토론에서 발언할 내용을 제작, 영어로 번역";

/// The two message bodies sent for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilitatorPrompt {
    pub system: String,
    pub user: String,
}

impl FacilitatorPrompt {
    pub fn new(scenario: &Scenario, opinion: &str) -> Self {
        Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            user: compose_user_message(scenario, opinion),
        }
    }
}

/// Builds the user message for a scenario and opinion.
pub fn compose_user_message(scenario: &Scenario, opinion: &str) -> String {
    format!(
        "시나리오: {}\n옵션: {}\n참고 자료: {}\n의견: {}\n\n{}",
        scenario.description,
        scenario.options_line(),
        scenario.resources_line(),
        opinion,
        RESPONSE_FORMAT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::{scenario, ScenarioId};

    #[test]
    fn user_message_embeds_scenario_and_opinion() {
        let s = scenario(ScenarioId::MuseumDay);
        let message = compose_user_message(s, "한 명을 희생하는 것은 정당화될 수 없습니다.");

        assert!(message.starts_with(&format!("시나리오: {}\n", s.description)));
        assert!(message.contains("옵션: 전환기를 돌려 케빈을 희생시킨다., 전환기를 돌리지 않는다.\n"));
        assert!(message.contains(&format!("참고 자료: {}\n", s.resources_line())));
        assert!(message.contains("의견: 한 명을 희생하는 것은 정당화될 수 없습니다.\n"));
    }

    #[test]
    fn user_message_requests_six_part_structure() {
        let message = compose_user_message(scenario(ScenarioId::RugbyMatch), "opinion");
        for n in 1..=6 {
            assert!(message.contains(&format!("\n{}. ", n)), "missing section {}", n);
        }
        assert!(message.ends_with("영어로 번역"));
    }

    #[test]
    fn system_instruction_asks_for_evidence_and_focus() {
        assert!(SYSTEM_INSTRUCTION.contains("추가적인 근거를 요청"));
        assert!(SYSTEM_INSTRUCTION.contains("주제로 돌아오도록"));
    }

    #[test]
    fn facilitator_prompt_pairs_system_and_user() {
        let s = scenario(ScenarioId::FitForPurpose);
        let prompt = FacilitatorPrompt::new(s, "report it");
        assert_eq!(prompt.system, SYSTEM_INSTRUCTION);
        assert_eq!(prompt.user, compose_user_message(s, "report it"));
    }

    #[test]
    fn sampling_parameters_are_fixed() {
        assert_eq!(MAX_OUTPUT_TOKENS, 1000);
        assert!((TEMPERATURE - 0.7).abs() < f32::EPSILON);
    }
}
