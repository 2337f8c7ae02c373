use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::ExtractedDocument,
        dto::{request::GenerateQuizFromTextRequestDto, response::QuizResponseDto},
    },
};

#[post("/api/quizzes/generate")]
pub async fn generate_quiz_from_pdf(
    state: web::Data<Arc<AppState>>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    if body.is_empty() {
        return Err(AppError::ValidationError(
            "Request body must contain a PDF document".to_string(),
        ));
    }

    let document = state.document_loader.extract(body.to_vec()).await?;
    let quiz = state.quiz_generation_service.generate_quiz(&document).await?;

    Ok(HttpResponse::Ok().json(QuizResponseDto::from(quiz)))
}

#[post("/api/quizzes/generate-from-text")]
pub async fn generate_quiz_from_text(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuizFromTextRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let document = ExtractedDocument::new(request.segments);
    let quiz = state.quiz_generation_service.generate_quiz(&document).await?;

    Ok(HttpResponse::Ok().json(QuizResponseDto::from(quiz)))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
