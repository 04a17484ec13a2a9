//! Talk transfer model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::speaker::SpeakerModel;

/// Wire representation of a talk.
///
/// The owning camp is implied by the URL and never carried in the body. On
/// write, `Speaker` only needs its `SpeakerId`; the speaker is resolved and
/// validated by the service, not copied from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct TalkModel {
    #[serde(default)]
    pub talk_id: i64,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Title is required"))]
    pub title: String,

    #[serde(rename = "Abstract", default)]
    #[validate(length(min = 20, max = 4000))]
    pub abstract_text: String,

    #[serde(default)]
    #[validate(range(min = 100, max = 300))]
    pub level: i32,

    pub speaker: Option<SpeakerModel>,
}

impl TalkModel {
    /// Id of the referenced speaker, if the payload carries one.
    pub fn speaker_id(&self) -> Option<i64> {
        self.speaker.as_ref().map(|s| s.speaker_id)
    }
}
