//! Static scenario catalog.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::ScenarioId;

/// One fixed ethical dilemma with its response options and reading list.
///
/// # Invariants
///
/// - `options` and `resources` keep their authored order
/// - Never mutated after the catalog is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub options: Vec<&'static str>,
    pub resources: Vec<&'static str>,
}

impl Scenario {
    /// Options joined the way they are embedded in prompts.
    pub fn options_line(&self) -> String {
        self.options.join(", ")
    }

    /// Resources joined the way they are embedded in prompts.
    pub fn resources_line(&self) -> String {
        self.resources.join(", ")
    }
}

static CATALOG: Lazy<Vec<Scenario>> = Lazy::new(|| {
    vec![
        Scenario {
            id: ScenarioId::MuseumDay,
            display_name: "시나리오 1: 박물관에서의 하루",
            description: "빈티지 철도 박물관에서 수업을 감독 중, 철도 마차가 다수의 학생을 위협하고 있습니다...",
            options: vec!["전환기를 돌려 케빈을 희생시킨다.", "전환기를 돌리지 않는다."],
            resources: vec![
                "밀 - 공리주의",
                "필리파 풋 - 트롤리 딜레마",
                "칸트 - 의무론",
                "톰슨 - 권리와 트롤리 딜레마",
            ],
        },
        Scenario {
            id: ScenarioId::FitForPurpose,
            display_name: "시나리오 2: 목적 적합성",
            description: "다양한 배경의 학생들이 있는 고등학교에서 2년차 교사로 재직 중, 비효과적인 교육용 소프트웨어 사용에 의문을 가집니다...",
            options: vec!["프로그램의 문제점을 보고함", "프로그램을 긍정적으로 홍보함"],
            resources: vec![
                "존 듀이의 진보주의 교육 철학",
                "비고츠키의 사회문화적 이론",
                "마이클 풀란 - 교육 개혁 이론",
                "앨버트 반두라 - 자기 효능감 이론",
            ],
        },
        Scenario {
            id: ScenarioId::RugbyMatch,
            display_name: "시나리오 3: 럭비경기",
            description: "스포츠 명문 공립학교에서 교사 첫 해, 인기 체육 교사의 부적절한 언행에 대한 의혹이 제기됩니다...",
            options: vec!["부적절한 언행을 보고함", "침묵을 지킴"],
            resources: vec![
                "존 롤스 - 정의론",
                "넬 나딩스 - 페미니즘 윤리학",
                "한나 아렌트 - 악의 평범성",
                "아지리스 - 조직 행동 이론",
            ],
        },
        Scenario {
            id: ScenarioId::SecretsAndLives,
            display_name: "시나리오 4: 비밀과 삶",
            description: "중학교 학생 복지 담당자로, 친구인 잭의 개인 문제로 인한 부정적인 영향을 목격합니다...",
            options: vec!["잭의 상태를 학교에 알림", "비밀을 지켜줌"],
            resources: vec![
                "피터 싱어 - 실용주의 윤리학",
                "윌리엄 제임스 - 실용주의",
                "칸트 - 의무론",
                "알버트 허쉬만 - 충성, 탈퇴, 항의 이론",
            ],
        },
    ]
});

/// Returns every scenario in selector order.
pub fn all_scenarios() -> &'static [Scenario] {
    &CATALOG
}

/// Looks up a scenario by id.
pub fn scenario(id: ScenarioId) -> &'static Scenario {
    // Catalog holds exactly one entry per ScenarioId variant, in ScenarioId::all() order.
    let idx = ScenarioId::all()
        .iter()
        .position(|candidate| *candidate == id)
        .unwrap_or_default();
    &CATALOG[idx]
}
