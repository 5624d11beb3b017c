// src/models/server.rs
use std::hash::{Hash, Hasher};
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use crate::error::RecordError;
use crate::flags::Country;
use crate::models::player::Player;
use crate::models::types::{GameLayer, GameMode, Team};
use crate::schema::RawServer;
use crate::utils;

/// One discovered game server. Built once per list refresh from a raw payload
/// entry (or reconstructed by the codec) and read-only afterwards; a fresh
/// poll replaces records wholesale instead of mutating them.
///
/// Identity is `(address, server_name)`; equality and hashing look at nothing
/// else.
#[derive(Debug, Clone)]
pub struct ServerRecord {
    address: SocketAddr,
    country: Country,
    server_name: String,
    map_name: String,
    game_mode: GameMode,
    game_layer: GameLayer,
    num_players: i32,
    max_players: i32,
    reserved_slots: i32,
    password: bool,
    os: String,
    battle_recorder: bool,
    server_text: String,
    server_logo: String,
    team1_name: String,
    team2_name: String,
    players: Vec<Player>,
    description: String,
}

impl ServerRecord {
    /// Builds a record from one JSON-decoded server entry.
    ///
    /// Resolving the hostname is the only fallible step and may block on DNS;
    /// keep it off latency-sensitive contexts. On failure the caller should
    /// drop this one entry and continue with the rest of the list.
    pub fn from_payload(raw: &RawServer) -> Result<ServerRecord, RecordError> {
        let address = resolve(&raw.ip_address, raw.game_port)?;
        let id = address.to_string();

        let server_name =
            utils::decode_html_entities(&utils::strip_version_tag(&raw.server_name));
        let map_name = utils::decode_html_entities(&raw.map_name);

        let players: Vec<Player> =
            raw.players.iter().map(|p| Player::from_raw(p, &id)).collect();

        Ok(ServerRecord {
            address,
            country: Country::from_code(&raw.country),
            server_name,
            map_name,
            game_mode: GameMode::from_token(&raw.game_mode),
            game_layer: GameLayer::from_raw(raw.map_size),
            num_players: raw.num_players,
            max_players: raw.max_players,
            reserved_slots: raw.reserved_slots,
            password: raw.password,
            os: raw.os.clone(),
            battle_recorder: raw.battle_recorder,
            server_text: raw.server_text.clone(),
            server_logo: raw.server_logo.clone(),
            team1_name: raw.team1_name.clone(),
            team2_name: raw.team2_name.clone(),
            players,
            description: utils::expand_description(&raw.server_text),
        })
    }

    /// Assembles a record from already-classified parts. Used by the codec;
    /// classification has been applied by the caller.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        address: SocketAddr,
        country: Country,
        server_name: String,
        map_name: String,
        game_mode: GameMode,
        game_layer: GameLayer,
        num_players: i32,
        max_players: i32,
        reserved_slots: i32,
        password: bool,
        os: String,
        battle_recorder: bool,
        server_text: String,
        server_logo: String,
        team1_name: String,
        team2_name: String,
        players: Vec<Player>,
        description: String,
    ) -> ServerRecord {
        ServerRecord {
            address,
            country,
            server_name,
            map_name,
            game_mode,
            game_layer,
            num_players,
            max_players,
            reserved_slots,
            password,
            os,
            battle_recorder,
            server_text,
            server_logo,
            team1_name,
            team2_name,
            players,
            description,
        }
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn map_name(&self) -> &str {
        &self.map_name
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn game_layer(&self) -> GameLayer {
        self.game_layer
    }

    pub fn num_players(&self) -> i32 {
        self.num_players
    }

    pub fn max_players(&self) -> i32 {
        self.max_players
    }

    pub fn reserved_slots(&self) -> i32 {
        self.reserved_slots
    }

    pub fn has_password(&self) -> bool {
        self.password
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn has_battle_recorder(&self) -> bool {
        self.battle_recorder
    }

    pub fn server_text(&self) -> &str {
        &self.server_text
    }

    pub fn server_logo(&self) -> &str {
        &self.server_logo
    }

    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::Blufor => &self.team1_name,
            Team::Opfor => &self.team2_name,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players on one side, in roster order. Empty when no one matches.
    pub fn players_on(&self, team: Team) -> Vec<&Player> {
        self.players.iter().filter(|p| p.team() == team).collect()
    }

    pub fn has_friends(&self) -> bool {
        self.players.iter().any(|p| p.is_friend())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Identity string, the rendered address. Players hold this as their
    /// parent reference.
    pub fn id(&self) -> String {
        self.address.to_string()
    }
}

impl PartialEq for ServerRecord {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address && self.server_name == other.server_name
    }
}

impl Eq for ServerRecord {}

impl Hash for ServerRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
        self.server_name.hash(state);
    }
}

/// Blocking hostname lookup. Prefers an IPv4 endpoint, which is what the
/// game fleet advertises.
fn resolve(host: &str, port: u16) -> Result<SocketAddr, RecordError> {
    let host_err = |source| RecordError::HostResolution { host: host.to_string(), source };

    let addrs = (host, port).to_socket_addrs().map_err(host_err)?;

    let mut fallback = None;
    for addr in addrs {
        if addr.is_ipv4() {
            return Ok(addr);
        }
        fallback.get_or_insert(addr);
    }
    fallback.ok_or_else(|| {
        host_err(io::Error::new(io::ErrorKind::NotFound, "lookup returned no addresses"))
    })
}
