//! Generation API endpoints.

use std::time::Instant;

use axum::extract::State;

use super::{ok, require, ApiResult, AppJson};
use crate::models::{
    AnalysisResponse, AnalyzeRequest, ContentGenerationParams, GenerationResponse,
    ShortGenerationRequest,
};
use crate::AppState;

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// POST /api/generate - Generate content from type-specific parameters.
pub async fn generate(
    State(state): State<AppState>,
    AppJson(params): AppJson<ContentGenerationParams>,
) -> ApiResult<GenerationResponse> {
    let start = Instant::now();
    let content = state.generator.generate(&params).await?;
    let execution_time = elapsed_ms(start);

    tracing::info!("Content generation took {} ms", execution_time);
    ok(GenerationResponse {
        content,
        execution_time,
    })
}

/// POST /api/generate-short - Short reply to a free-form prompt.
pub async fn generate_short(
    State(state): State<AppState>,
    AppJson(request): AppJson<ShortGenerationRequest>,
) -> ApiResult<GenerationResponse> {
    require(&request.prompt, "Prompt is required")?;

    let start = Instant::now();
    let content = state.generator.generate_short(&request.prompt).await?;
    let execution_time = elapsed_ms(start);

    tracing::info!("Short content generation took {} ms", execution_time);
    ok(GenerationResponse {
        content,
        execution_time,
    })
}

/// POST /api/analyze - Feedback on a piece of content.
pub async fn analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeRequest>,
) -> ApiResult<AnalysisResponse> {
    require(&request.content, "Content is required")?;

    let start = Instant::now();
    let analysis = state.generator.analyze(&request.content).await?;
    let execution_time = elapsed_ms(start);

    tracing::info!("Content analysis took {} ms", execution_time);
    ok(AnalysisResponse {
        analysis,
        execution_time,
    })
}
