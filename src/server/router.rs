//! Route table, OpenAPI document and HTTP middleware.

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    response::{Html, Redirect},
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    OpenApi,
};
use utoipa_redoc::Redoc;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        config::Config,
        controller::{
            auth, chat, message, preference, profile, quest, recommendation, settings, task,
            user_match, websocket,
        },
        error::AppError,
        state::AppState,
    },
};

/// Location of the Swagger UI, also the target of `GET /`.
pub const SWAGGER_PATH: &str = "/api/docs/swagger/";

/// Location of the ReDoc page.
pub const REDOC_PATH: &str = "/api/docs/redoc/";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cupid API",
        description = "Profiles, matches, date quests and real-time chat",
    ),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_tokens,
        profile::get_profile,
        profile::update_profile,
        profile::get_user_profile,
        settings::get_settings,
        settings::update_settings,
        task::get_tasks,
        task::create_task,
        task::get_task,
        task::update_task,
        task::delete_task,
        user_match::get_matches,
        user_match::create_match,
        user_match::get_match,
        user_match::update_match,
        user_match::delete_match,
        user_match::rate_match,
        user_match::match_with,
        user_match::generate_quests,
        recommendation::get_singles,
        recommendation::auto_match,
        quest::get_quests,
        quest::create_quest,
        quest::get_quest,
        quest::update_quest,
        quest::delete_quest,
        quest::post_hint,
        chat::get_chats,
        chat::create_chat,
        chat::get_chat,
        chat::update_chat,
        chat::delete_chat,
        message::get_messages,
        message::create_message,
        message::get_message,
        message::delete_message,
        preference::get_preferences,
        preference::create_preference,
        preference::get_user_preferences,
        preference::add_user_preference,
        preference::remove_user_preference,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::DetailDto,
        model::auth::RegisterDto,
        model::auth::LoginDto,
        model::auth::AuthResponseDto,
        model::auth::TokenDto,
        model::user::UserSummaryDto,
        model::profile::ProfileDto,
        model::profile::UpdateProfileDto,
        model::settings::SettingsDto,
        model::settings::UpdateSettingsDto,
        model::task::TaskDto,
        model::task::CreateTaskDto,
        model::task::UpdateTaskDto,
        model::status::ProgressStatusDto,
        model::status::ChatStatusDto,
        model::user_match::MatchDto,
        model::user_match::MatchRefDto,
        model::user_match::CreateMatchDto,
        model::user_match::UpdateMatchDto,
        model::user_match::RateMatchDto,
        model::recommendation::RecommendationDto,
        model::quest::QuestDto,
        model::quest::CreateQuestDto,
        model::quest::UpdateQuestDto,
        model::quest::HintDto,
        model::quest::GeneratedQuestsDto,
        model::chat::ChatDto,
        model::chat::CreateChatDto,
        model::chat::UpdateChatDto,
        model::message::MessageDto,
        model::message::CreateMessageDto,
        model::message::MessagePayloadDto,
        model::preference::PreferenceDto,
        model::preference::CreatePreferenceDto,
        model::preference::UserPreferenceDto,
        model::preference::CreateUserPreferenceDto,
    )),
    tags(
        (name = "auth", description = "Registration, login and API tokens"),
        (name = "profile", description = "User profiles"),
        (name = "settings", description = "Mode settings"),
        (name = "task", description = "Calendar tasks"),
        (name = "match", description = "Matches, ratings and quest generation"),
        (name = "singles", description = "Recommended singles"),
        (name = "quest", description = "Date quests"),
        (name = "chat", description = "Chats of matches"),
        (name = "message", description = "Chat messages"),
        (name = "preference", description = "Interest preferences"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("API token or Auth0 access token"))
                        .build(),
                ),
            )
        }
    }
}

/// Builds the complete application router.
///
/// Registration and login are rate limited per peer IP, so the router has to be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Arguments
/// - `config` - Rate limit and CORS settings
///
/// # Returns
/// - `Ok(Router<AppState>)` - Router awaiting its state
/// - `Err(AppError::InternalError)` - The rate limit settings are invalid
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(config.auth_rate_per_second)
        .burst_size(config.auth_rate_burst)
        .finish()
        .ok_or_else(|| {
            AppError::InternalError(
                "AUTH_RATE_PER_SECOND and AUTH_RATE_BURST must be greater than zero".to_string(),
            )
        })?;

    Ok(Router::new()
        .route("/", get(|| async { Redirect::temporary(SWAGGER_PATH) }))
        .merge(auth_routes().layer(GovernorLayer::new(Arc::new(governor))))
        .merge(api_routes())
        .merge(SwaggerUi::new("/api/docs/swagger").url("/api/schema/", ApiDoc::openapi()))
        .merge(redoc_routes())
        .layer(cors_layer(config.allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http()))
}

/// ReDoc rendering of the OpenAPI document, built once at startup.
fn redoc_routes() -> Router<AppState> {
    let page = Html(Redoc::new(ApiDoc::openapi()).to_html());

    Router::new().route(REDOC_PATH, get(move || async move { page }))
}

/// Unauthenticated account endpoints.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register/", post(auth::register))
        .route("/api/auth/login/", post(auth::login))
}

/// Every other REST endpoint plus the chat socket.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/logout/", post(auth::logout))
        .route("/api/auth/tokens/", get(auth::get_tokens))
        .route(
            "/api/profile/",
            get(profile::get_profile)
                .put(profile::update_profile)
                .patch(profile::update_profile),
        )
        .route("/api/profiles/{user_id}/", get(profile::get_user_profile))
        .route(
            "/api/settings/",
            get(settings::get_settings)
                .put(settings::update_settings)
                .patch(settings::update_settings),
        )
        .route("/api/tasks/", get(task::get_tasks).post(task::create_task))
        .route(
            "/api/tasks/{task_id}/",
            get(task::get_task)
                .put(task::update_task)
                .patch(task::update_task)
                .delete(task::delete_task),
        )
        .route(
            "/api/matches/",
            get(user_match::get_matches).post(user_match::create_match),
        )
        .route(
            "/api/matches/{match_id}/",
            get(user_match::get_match)
                .put(user_match::update_match)
                .patch(user_match::update_match)
                .delete(user_match::delete_match),
        )
        .route("/api/matches/{match_id}/rate/", post(user_match::rate_match))
        .route(
            "/api/matches/{match_id}/generate-quests/",
            post(user_match::generate_quests),
        )
        .route("/api/matches/with/{user_id}/", put(user_match::match_with))
        .route(
            "/api/match/singles/",
            get(recommendation::get_singles).post(recommendation::auto_match),
        )
        .route("/api/quests/", get(quest::get_quests).post(quest::create_quest))
        .route(
            "/api/quests/{quest_id}/",
            get(quest::get_quest)
                .put(quest::update_quest)
                .patch(quest::update_quest)
                .delete(quest::delete_quest),
        )
        .route("/api/quests/{quest_id}/post-hint/", post(quest::post_hint))
        .route("/api/quests/{quest_id}/hint/", post(quest::post_hint))
        .route("/api/chats/", get(chat::get_chats).post(chat::create_chat))
        .route(
            "/api/chats/{chat_id}/",
            get(chat::get_chat)
                .put(chat::update_chat)
                .patch(chat::update_chat)
                .delete(chat::delete_chat),
        )
        .route(
            "/api/chats/{chat_id}/messages/",
            get(message::get_messages).post(message::create_message),
        )
        .route(
            "/api/messages/{message_id}/",
            get(message::get_message).delete(message::delete_message),
        )
        .route(
            "/api/preferences/",
            get(preference::get_preferences).post(preference::create_preference),
        )
        .route(
            "/api/user-preferences/",
            get(preference::get_user_preferences).post(preference::add_user_preference),
        )
        .route(
            "/api/user-preferences/{preference_id}/",
            delete(preference::remove_user_preference),
        )
        .route("/ws/chat/{chat_id}/", get(websocket::chat_socket))
}

/// Allows the configured origins, or any origin when none are configured.
fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let origin = match allowed_origins {
        Some(origins) => AllowOrigin::list(origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!("Ignoring invalid CORS origin {}", origin))
                .ok()
        })),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
