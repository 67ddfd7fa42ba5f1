//! Routes for playing turns.
//!
//! The voice platform resolves the player's utterance to an intent and
//! hands back the session attributes it was given last turn. Both arrive
//! here as one flat JSON object.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use puzzle_prison_core::progress::PlayerId;
use puzzle_prison_narrative::application::renderer::{AudioConfig, render};
use puzzle_prison_narrative::domain::catalogue::narrate;
use puzzle_prison_narrative::domain::narration::{Narration, NarrationKey};
use puzzle_prison_session::application::command_handlers;
use puzzle_prison_session::domain::commands::TakeTurn;
use puzzle_prison_session::domain::intents::{Intent, IntentName};
use puzzle_prison_session::domain::snapshot::SessionAttributes;

use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    /// Stable identifier of the player.
    pub player_id: String,
    /// The resolved intent.
    pub intent_name: IntentName,
    /// Object slot of walk and interact intents.
    pub object_phrase: Option<String>,
    /// Option slot of the option intent.
    pub option_phrase: Option<String>,
    /// Session attributes from the previous turn.
    #[serde(flatten)]
    pub attributes: SessionAttributes,
}

/// What to say, before rendering.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationBody {
    /// Card title.
    pub title: String,
    /// Spoken text with `{audio}` placeholders.
    pub body: String,
    /// Follow-up prompt.
    pub reprompt: String,
    /// Clip file names, in placeholder order.
    pub audio_cues: Vec<&'static str>,
}

/// Rendered speech.
#[derive(Debug, Serialize)]
pub struct SpeechBody {
    /// SSML document.
    pub ssml: String,
    /// Plain card text.
    pub card: String,
}

/// Response body for a turn.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    /// Attributes to send back with the next turn.
    pub attributes: SessionAttributes,
    /// What to say.
    pub narration: NarrationBody,
    /// How to say it.
    pub speech: SpeechBody,
    /// Whether the platform should close the session.
    pub end_session: bool,
}

impl TurnResponse {
    fn new(
        attributes: SessionAttributes,
        narration: &Narration,
        end_session: bool,
        audio: &AudioConfig,
    ) -> Self {
        let speech = render(narration, audio);
        Self {
            attributes,
            narration: NarrationBody {
                title: narration.title.clone(),
                body: narration.body.clone(),
                reprompt: narration.reprompt.clone(),
                audio_cues: narration.audio_cues.iter().map(|cue| cue.file_name()).collect(),
            },
            speech: SpeechBody {
                ssml: speech.ssml,
                card: speech.card,
            },
            end_session,
        }
    }
}

/// POST /
#[instrument(skip(state, payload))]
async fn take_turn(
    State(state): State<AppState>,
    payload: Result<Json<TurnRequest>, JsonRejection>,
) -> (StatusCode, Json<TurnResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejecting malformed turn request");
            let response = TurnResponse::new(
                SessionAttributes::default(),
                &narrate(NarrationKey::Error),
                false,
                &state.audio,
            );
            return (StatusCode::BAD_REQUEST, Json(response));
        }
    };

    let command = TakeTurn {
        correlation_id: Uuid::new_v4(),
        player_id: PlayerId::new(request.player_id),
        attributes: request.attributes,
        intent: Intent::new(
            request.intent_name,
            request.object_phrase,
            request.option_phrase,
        ),
    };

    info!(
        correlation_id = %command.correlation_id,
        player_id = %command.player_id,
        intent = ?command.intent,
        "handling take_turn command"
    );

    let result = command_handlers::handle_take_turn(
        &command,
        state.clock.as_ref(),
        state.progress_repository.as_ref(),
    )
    .await;

    let response = TurnResponse::new(
        result.attributes,
        &result.narration,
        result.end_session,
        &state.audio,
    );
    (StatusCode::OK, Json(response))
}

/// Returns the router for turns.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(take_turn))
}
