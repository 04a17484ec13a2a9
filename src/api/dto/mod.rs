//! Transfer models for API requests and responses.
//!
//! Models are decoupled from the domain entities: member names follow the
//! published PascalCase wire format, a camp's location is flattened, and
//! relationships are reduced to what a client can send back. Input models are
//! checked with `validator` before any handler logic runs.

pub mod camp;
pub mod health;
pub mod query;
pub mod speaker;
pub mod talk;

pub use camp::{CampListEnvelope, CampModel};
pub use query::{IncludeTalksParams, SearchParams};
pub use speaker::SpeakerModel;
pub use talk::TalkModel;
