//! Route handlers.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use trivia_core::catalog;
use trivia_core::model::{CategoryId, QuestionId};
use trivia_core::paginate::parse_page;
use trivia_core::quiz;
use trivia_core::traits::QuestionStore;

use crate::dto::{
    category_map, CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest,
    CreateResponse, DeleteResponse, PageQuery, QuestionsResponse, QuizRequest, QuizResponse,
    SearchResponse,
};
use crate::error::ApiError;
use crate::AppState;

type JsonBody = Result<Json<Value>, JsonRejection>;

/// Unwrap a JSON body that must be an object.
fn json_object(body: JsonBody) -> Result<Map<String, Value>, ApiError> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(ApiError::BadRequest("body must be a JSON object".into())),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

fn decode<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(map)).map_err(|e| ApiError::unprocessable(e.to_string()))
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::NotFound(rejection.body_text()))
}

/// `GET /categories`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = catalog::list_categories(state.store()).await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// `GET /questions?page=N`
pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let raw = query.ok().and_then(|Query(q)| q.page);
    let page = parse_page(raw.as_deref());
    let listing = catalog::questions_page(state.store(), page).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: listing.total_questions,
        categories: category_map(&listing.categories),
        current_category: listing.current_categories,
        page: listing.page,
        total_pages: listing.total_pages,
        questions: listing.questions,
    }))
}

/// `DELETE /questions/{id}`
pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<QuestionId>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = path_id(path)?;
    let deleted = catalog::delete_question(state.store(), id).await?;
    let total_questions = state.store().count_questions().await?;

    Ok(Json(DeleteResponse {
        success: true,
        id: deleted,
        total_questions,
    }))
}

/// `POST /questions`: search when the body has a search term, create otherwise.
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Response, ApiError> {
    let map = json_object(body)?;
    let term = map.get("searchTerm").or_else(|| map.get("search_term"));

    if let Some(term) = term {
        let Value::String(term) = term else {
            return Err(ApiError::unprocessable("searchTerm must be a string"));
        };
        let questions = catalog::search_questions(state.store(), term).await?;
        let count = questions.len();
        return Ok(Json(SearchResponse {
            success: true,
            questions,
            total_questions: count,
            count,
        })
        .into_response());
    }

    let request: CreateQuestionRequest = decode(map)?;
    let question = catalog::create_question(state.store(), request.into_new_question()?).await?;
    let total_questions = state.store().count_questions().await?;

    Ok(Json(CreateResponse {
        success: true,
        created: question.id,
        question,
        total_questions,
    })
    .into_response())
}

/// `GET /categories/{id}/questions`
pub async fn category_questions(
    State(state): State<AppState>,
    path: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let id = path_id(path)?;
    let listing = catalog::questions_in_category(state.store(), id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: listing.questions.len(),
        questions: listing.questions,
        current_category: listing.category.kind,
    }))
}

/// `POST /quizzes`
pub async fn play_quiz(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Json<QuizResponse>, ApiError> {
    let request: QuizRequest = decode(json_object(body)?)?;
    let category = request.category()?;
    let outcome = quiz::next_question(state.store(), category, &request.served()).await?;

    Ok(Json(QuizResponse {
        success: true,
        question: outcome.into_question(),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".into())
}
