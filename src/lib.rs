// src/lib.rs
//
// Data-model layer for a game-server browser: one immutable record per
// discovered server, built from the JSON server-list reply or from the
// binary transport encoding, plus the codec for that encoding.

pub mod codec;
pub mod error;
pub mod flags;
pub mod models;
pub mod schema;
pub mod utils;

pub use codec::{decode, encode, CodecError};
pub use error::RecordError;
pub use flags::Country;
pub use models::player::Player;
pub use models::server::ServerRecord;
pub use models::types::{GameLayer, GameMode, Team};
pub use schema::{RawPlayer, RawServer};
