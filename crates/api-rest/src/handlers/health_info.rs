use api_shared::wire::{
    ChatbotReq, ChatbotRes, HealthInfoReq, HealthInfoRes, ListTopicsRes, TopicRes,
};
use axum::extract::Path;
use axum::response::Json;
use healthassist_core::{responder, topics};

use crate::error::ApiResult;

#[utoipa::path(
    post,
    path = "/chatbot",
    request_body = ChatbotReq,
    responses(
        (status = 200, description = "Chatbot reply", body = ChatbotRes),
        (status = 400, description = "Message is missing", body = api_shared::wire::ErrorRes)
    )
)]
/// Reply to a chatbot message
///
/// Replies come from a fixed keyword table; the first matching entry wins.
#[axum::debug_handler]
pub async fn chatbot(Json(req): Json<ChatbotReq>) -> ApiResult<ChatbotRes> {
    Ok(Json(responder::chat(&req.message)?))
}

#[utoipa::path(
    get,
    path = "/health-info",
    responses(
        (status = 200, description = "All health topics", body = ListTopicsRes)
    )
)]
#[axum::debug_handler]
pub async fn list_topics() -> Json<ListTopicsRes> {
    Json(ListTopicsRes {
        topics: topics::all_topics().to_vec(),
    })
}

#[utoipa::path(
    post,
    path = "/health-info",
    request_body = HealthInfoReq,
    responses(
        (status = 200, description = "Answer and related topic", body = HealthInfoRes),
        (status = 400, description = "Question is missing", body = api_shared::wire::ErrorRes)
    )
)]
/// Answer a health question
///
/// `relatedTopic` is the full topic the answer was drawn from, or `null` for the fallback answer.
#[axum::debug_handler]
pub async fn ask_question(Json(req): Json<HealthInfoReq>) -> ApiResult<HealthInfoRes> {
    Ok(Json(topics::answer_question(&req.question)?))
}

#[utoipa::path(
    get,
    path = "/health-info/{topic_id}",
    params(("topic_id" = String, Path, description = "Topic id, e.g. `tb`")),
    responses(
        (status = 200, description = "One health topic", body = TopicRes),
        (status = 404, description = "Unknown topic", body = api_shared::wire::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_topic(Path(topic_id): Path<String>) -> ApiResult<TopicRes> {
    Ok(Json(TopicRes {
        topic: topics::find_topic(&topic_id)?,
    }))
}
