use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::{
        domain::QuizSession,
        dto::{
            request::{GenerateQuizRequest, GradeQuizRequest},
            response::{GradeResponse, QuizResponse},
        },
    },
    services::{document_service, grader, model_service::GenerationRequest, normalizer},
};

#[derive(Debug, MultipartForm)]
pub struct GenerateQuizForm {
    #[multipart(limit = "10MiB")]
    pub file: TempFile,
    pub number: Text<u16>,
    pub subject: Text<String>,
    pub tone: Option<Text<String>>,
    /// Pass a previous session id to regenerate: the stored quiz is
    /// replaced wholesale and the handle stays valid.
    pub session_id: Option<Text<Uuid>>,
}

#[get("/api/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[post("/api/quizzes")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<GenerateQuizForm>,
) -> Result<HttpResponse, AppError> {
    let file_name = form.file.file_name.clone().unwrap_or_default();
    let bytes = std::fs::read(form.file.file.path())
        .map_err(|err| AppError::InternalError(format!("failed to read upload: {}", err)))?;

    let request = GenerateQuizRequest::new(
        form.number.into_inner(),
        form.subject.into_inner(),
        form.tone.map(|t| t.into_inner()),
    );
    request.validate()?;

    let existing = form.session_id.map(|id| id.into_inner());
    let response = run_generation(&state, &file_name, &bytes, request, existing).await?;
    Ok(HttpResponse::Created().json(response))
}

/// The full generation pipeline: extract text, run the two-stage model
/// chain, normalize, and store the session. Normalization is
/// all-or-nothing: a quiz that parses but yields zero usable questions is
/// reported exactly like one that does not parse.
pub(crate) async fn run_generation(
    state: &AppState,
    file_name: &str,
    bytes: &[u8],
    request: GenerateQuizRequest,
    existing: Option<Uuid>,
) -> AppResult<QuizResponse> {
    let text = document_service::read_document(file_name, bytes)?;

    let outcome = state
        .quiz_generator
        .generate(&GenerationRequest {
            text,
            number: request.number,
            subject: request.subject,
            tone: request.tone,
        })
        .await?;

    let document = normalizer::parse_response(&outcome.quiz).ok_or(AppError::ParseFailure)?;
    let records = normalizer::normalize(&document).ok_or(AppError::ParseFailure)?;
    if records.is_empty() {
        log::error!("quiz document parsed but no usable questions survived filtering");
        return Err(AppError::ParseFailure);
    }

    let review = Some(outcome.review).filter(|r| !r.trim().is_empty());
    let previous = match existing {
        Some(id) => state.sessions.get(&id).await,
        None => None,
    };
    let session = match previous {
        Some(previous) => previous.regenerated(records, review),
        None => QuizSession::new(records, review),
    };

    let response = QuizResponse::from(&session);
    state.sessions.replace(session).await;

    Ok(response)
}

#[post("/api/quizzes/{session_id}/grade")]
pub async fn grade_quiz(
    state: web::Data<AppState>,
    session_id: web::Path<Uuid>,
    request: web::Json<GradeQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let session_id = session_id.into_inner();
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", session_id)))?;

    let result = grader::grade(&session.records, &request.answers);
    Ok(HttpResponse::Ok().json(GradeResponse::from_result(&session.records, result)))
}
