// src/models/types.rs
use log::debug;

/// Game modes advertised by servers. The wire carries the raw `gpm_*` token;
/// anything we don't recognize becomes [`GameMode::Unknown`] rather than an
/// error, so one odd server never breaks a list refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Advance and Secure (`gpm_cq`).
    Aas,
    Insurgency,
    /// Command and Control (`gpm_cnc`).
    Cnc,
    VehicleWarfare,
    Skirmish,
    Coop,
    Gungame,
    Unknown,
}

impl GameMode {
    /// Classifies a raw mode token. Total: never fails, case-insensitive.
    pub fn from_token(token: &str) -> GameMode {
        match token.trim().to_lowercase().as_str() {
            "gpm_cq" => GameMode::Aas,
            "gpm_insurgency" => GameMode::Insurgency,
            "gpm_cnc" => GameMode::Cnc,
            "gpm_vehicles" => GameMode::VehicleWarfare,
            "gpm_skirmish" => GameMode::Skirmish,
            "gpm_coop" => GameMode::Coop,
            "gpm_gungame" => GameMode::Gungame,
            other => {
                if !other.is_empty() {
                    debug!("unrecognized game mode token: {}", other);
                }
                GameMode::Unknown
            }
        }
    }

    /// Canonical wire token. `Unknown` renders as an empty token and
    /// classifies back to `Unknown`, so round-trips are stable.
    pub fn token(&self) -> &'static str {
        match self {
            GameMode::Aas => "gpm_cq",
            GameMode::Insurgency => "gpm_insurgency",
            GameMode::Cnc => "gpm_cnc",
            GameMode::VehicleWarfare => "gpm_vehicles",
            GameMode::Skirmish => "gpm_skirmish",
            GameMode::Coop => "gpm_coop",
            GameMode::Gungame => "gpm_gungame",
            GameMode::Unknown => "",
        }
    }
}

/// Map layer, derived from the raw "map size" indicator in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameLayer {
    Infantry,
    Alternative,
    Standard,
    Large,
    Unknown,
}

impl GameLayer {
    /// Classifies the raw map-size value. Total, defaulting to `Unknown`.
    pub fn from_raw(size: i32) -> GameLayer {
        match size {
            16 => GameLayer::Infantry,
            32 => GameLayer::Alternative,
            64 => GameLayer::Standard,
            128 => GameLayer::Large,
            other => {
                if other != 0 {
                    debug!("unrecognized map size: {}", other);
                }
                GameLayer::Unknown
            }
        }
    }

    /// Raw integer form used on the wire. `Unknown` renders as 0, which
    /// classifies back to `Unknown`.
    pub fn raw(&self) -> i32 {
        match self {
            GameLayer::Infantry => 16,
            GameLayer::Alternative => 32,
            GameLayer::Standard => 64,
            GameLayer::Large => 128,
            GameLayer::Unknown => 0,
        }
    }
}

/// Side affiliation of one player. The payload tags teams 1 and 2;
/// unrecognized values default to `Blufor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Blufor,
    Opfor,
}

impl Team {
    pub fn from_raw(team: i32) -> Team {
        match team {
            2 => Team::Opfor,
            _ => Team::Blufor,
        }
    }

    pub fn raw(&self) -> i32 {
        match self {
            Team::Blufor => 1,
            Team::Opfor => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_mode_tokens_classify() {
        assert_eq!(GameMode::from_token("gpm_cq"), GameMode::Aas);
        assert_eq!(GameMode::from_token("gpm_insurgency"), GameMode::Insurgency);
        assert_eq!(GameMode::from_token("GPM_COOP"), GameMode::Coop);
    }

    #[test]
    fn unknown_mode_token_defaults() {
        assert_eq!(GameMode::from_token("gpm_tag"), GameMode::Unknown);
        assert_eq!(GameMode::from_token(""), GameMode::Unknown);
    }

    #[test]
    fn mode_token_round_trips() {
        for mode in [
            GameMode::Aas,
            GameMode::Insurgency,
            GameMode::Cnc,
            GameMode::VehicleWarfare,
            GameMode::Skirmish,
            GameMode::Coop,
            GameMode::Gungame,
            GameMode::Unknown,
        ] {
            assert_eq!(GameMode::from_token(mode.token()), mode);
        }
    }

    #[test]
    fn layer_classification_and_raw_round_trip() {
        assert_eq!(GameLayer::from_raw(16), GameLayer::Infantry);
        assert_eq!(GameLayer::from_raw(64), GameLayer::Standard);
        assert_eq!(GameLayer::from_raw(99), GameLayer::Unknown);
        for layer in [
            GameLayer::Infantry,
            GameLayer::Alternative,
            GameLayer::Standard,
            GameLayer::Large,
            GameLayer::Unknown,
        ] {
            assert_eq!(GameLayer::from_raw(layer.raw()), layer);
        }
    }

    #[test]
    fn team_defaults_to_blufor() {
        assert_eq!(Team::from_raw(1), Team::Blufor);
        assert_eq!(Team::from_raw(2), Team::Opfor);
        assert_eq!(Team::from_raw(0), Team::Blufor);
        assert_eq!(Team::from_raw(-7), Team::Blufor);
    }
}
