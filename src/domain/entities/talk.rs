//! Talk entity and its structural fields.

use super::Speaker;

/// A talk given at a camp.
///
/// A talk always belongs to exactly one camp and references exactly one
/// speaker. Both relationships are resolved before a `Talk` value exists, see
/// [`Talk::attach`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub id: i64,
    pub camp_id: i64,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
    pub speaker: Speaker,
}

/// Structural (non-relationship) fields of a talk.
///
/// Used to build new talks; the owning camp and the speaker are supplied
/// separately once they have been looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalkFields {
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}

impl Talk {
    /// Builds an unsaved talk attached to an existing camp and speaker.
    ///
    /// The id is `0` until the repository assigns one.
    pub fn attach(fields: TalkFields, camp_id: i64, speaker: Speaker) -> Self {
        Self {
            id: 0,
            camp_id,
            title: fields.title,
            abstract_text: fields.abstract_text,
            level: fields.level,
            speaker,
        }
    }
}
