// src/models/player.rs
use crate::models::types::Team;
use crate::schema::RawPlayer;

/// One player on a server's roster. Immutable once built; carries the parent
/// record's identity string so a roster row can always name its server.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    team: Team,
    score: i32,
    kills: i32,
    deaths: i32,
    ping: i32,
    friend: bool,
    server_id: String,
}

impl Player {
    pub fn from_raw(raw: &RawPlayer, server_id: &str) -> Player {
        Player {
            name: raw.name.clone(),
            team: Team::from_raw(raw.team),
            score: raw.score,
            kills: raw.kills,
            deaths: raw.deaths,
            ping: raw.ping,
            friend: raw.is_friend,
            server_id: server_id.to_string(),
        }
    }

    /// Assembles a player from already-classified parts. Used by the codec
    /// when reading a roster back off the wire.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        team: Team,
        score: i32,
        kills: i32,
        deaths: i32,
        ping: i32,
        friend: bool,
        server_id: String,
    ) -> Player {
        Player { name, team, score, kills, deaths, ping, friend, server_id }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn kills(&self) -> i32 {
        self.kills
    }

    pub fn deaths(&self) -> i32 {
        self.deaths
    }

    pub fn ping(&self) -> i32 {
        self.ping
    }

    pub fn is_friend(&self) -> bool {
        self.friend
    }

    /// Identity string of the server this player was observed on.
    pub fn server_id(&self) -> &str {
        &self.server_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_player_maps_onto_record() {
        let raw = RawPlayer {
            name: "echo".to_string(),
            team: 2,
            score: 140,
            kills: 12,
            deaths: 3,
            ping: 45,
            is_friend: true,
        };
        let p = Player::from_raw(&raw, "203.0.113.9:16567");
        assert_eq!(p.name(), "echo");
        assert_eq!(p.team(), Team::Opfor);
        assert_eq!(p.score(), 140);
        assert!(p.is_friend());
        assert_eq!(p.server_id(), "203.0.113.9:16567");
    }

    #[test]
    fn out_of_range_team_tag_defaults_to_blufor() {
        let raw = RawPlayer {
            name: "stray".to_string(),
            team: 9,
            score: 0,
            kills: 0,
            deaths: 0,
            ping: 0,
            is_friend: false,
        };
        assert_eq!(Player::from_raw(&raw, "id").team(), Team::Blufor);
    }
}
