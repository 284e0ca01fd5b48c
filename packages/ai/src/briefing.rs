//! Patrol briefing prompt construction and generation.
//!
//! The prompt is a fixed Korean template: it assigns the guide role,
//! enumerates the nine statutory duty categories as the only citable
//! duties, asks for guidance grounded in the location's description,
//! requires the CPO notification instruction, and caps the output at
//! five guidance items within 500 characters.

use patrol_map_patrol_models::{DutyCategory, contact};

use crate::AiError;
use crate::providers::LlmProvider;

/// Fixed system role for the briefing completion.
pub const SYSTEM_PROMPT: &str = "당신은 기동순찰대원 순찰 시 필요한 사항을 안내해주는 안내자입니다.";

/// Maximum number of guidance items the briefing may contain.
pub const MAX_GUIDANCE_ITEMS: usize = 5;

/// Maximum briefing length in characters.
pub const MAX_BRIEFING_CHARS: usize = 500;

/// Builds the briefing prompt for a selected patrol location.
#[must_use]
pub fn build_prompt(district: &str, location: &str, description: &str) -> String {
    let duties = DutyCategory::all()
        .iter()
        .map(|duty| format!("    {}. {}", duty.ordinal(), duty.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<역할부여>\n\
         당신은 기동순찰대(경찰관) 순찰 활동 시 중점 활동사항을 제작해주는 안내자입니다.\n\
         <기동순찰대 임무>\n\
         기동순찰대의 업무는\n\
         {duties}\n\
         에 해당합니다.\n\
         <설명내용>\n\
         {location}에서 기동순찰대 근무자가 순찰할 때 필요한 사항을 상세히 설명해주세요.\n\
         지역적 특성 {description}에 입력된 내용을 바탕으로 필요사항을 설명해주세요.\n\
         순찰 시 범죄취약지역, 방범시설 부족지역을 발견하면 고양경찰서 CPO({officers})에게 \
         아래의 파란색 링크를 통해 통보를 부탁드린다라는 내용을 꼭 포함해주세요.\n\
         최초 제목을 사용할때는 {district}을 포함시켜주세요.\n\
         \n\
         [유의사항]\n\
         순찰 시 유의사항을 최대 {max_items}개까지만 안내해주고 총 {max_chars}자 내로 \
         문장을 완결지어야 합니다.\n\
         또한 기동순찰대 임무안에 있는 내용만 제시해줘야 합니다.\n",
        officers = contact::CPO_OFFICERS,
        max_items = MAX_GUIDANCE_ITEMS,
        max_chars = MAX_BRIEFING_CHARS,
    )
}

/// Generates a patrol briefing for a selected location.
///
/// Issues exactly one completion request per call; briefings are never
/// cached, so re-entering the same selection requests a fresh one.
///
/// # Errors
///
/// Returns [`AiError`] if the provider request fails. The caller degrades
/// the briefing panel only; every other panel still renders.
pub async fn generate(
    provider: &dyn LlmProvider,
    district: &str,
    location: &str,
    description: &str,
) -> Result<String, AiError> {
    log::info!("Requesting patrol briefing for {district} / {location}");
    let prompt = build_prompt(district, location, description);
    provider.complete(SYSTEM_PROMPT, &prompt).await
}
