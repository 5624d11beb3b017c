// src/schema.rs
use serde::Deserialize;

/// One server entry as it arrives in the JSON server-list reply.
///
/// Field names follow the wire format's PascalCase. Everything except the
/// address fields is defaulted when absent; a sparse entry still produces a
/// record (unknown values resolve through the usual fallbacks downstream).
#[derive(Debug, Clone, Deserialize)]
pub struct RawServer {
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    #[serde(rename = "GamePort")]
    pub game_port: u16,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "ServerName", default)]
    pub server_name: String,
    #[serde(rename = "MapName", default)]
    pub map_name: String,
    #[serde(rename = "GameMode", default)]
    pub game_mode: String,
    #[serde(rename = "MapSize", default)]
    pub map_size: i32,
    #[serde(rename = "NumPlayers", default)]
    pub num_players: i32,
    #[serde(rename = "MaxPlayers", default)]
    pub max_players: i32,
    #[serde(rename = "ReservedSlots", default)]
    pub reserved_slots: i32,
    #[serde(rename = "Password", default)]
    pub password: bool,
    #[serde(rename = "OS", default)]
    pub os: String,
    #[serde(rename = "BattleRecorder", default)]
    pub battle_recorder: bool,
    #[serde(rename = "ServerText", default)]
    pub server_text: String,
    #[serde(rename = "ServerLogo", default)]
    pub server_logo: String,
    #[serde(rename = "Team1Name", default)]
    pub team1_name: String,
    #[serde(rename = "Team2Name", default)]
    pub team2_name: String,
    #[serde(rename = "Players", default)]
    pub players: Vec<RawPlayer>,
}

/// One roster entry inside a [`RawServer`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayer {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Team", default)]
    pub team: i32,
    #[serde(rename = "Score", default)]
    pub score: i32,
    #[serde(rename = "Kills", default)]
    pub kills: i32,
    #[serde(rename = "Deaths", default)]
    pub deaths: i32,
    #[serde(rename = "Ping", default)]
    pub ping: i32,
    #[serde(rename = "IsFriend", default)]
    pub is_friend: bool,
}
