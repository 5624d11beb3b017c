// src/codec.rs
//
// Byte-exact transport encoding for ServerRecord. Field order is fixed and
// significant; integers are little-endian, strings are u32-length-prefixed
// UTF-8, bools are one byte. Country, game mode, game layer and team travel
// in their raw wire forms and are re-classified on decode with the same total
// functions construction uses, so unrecognized values collapse identically on
// both paths.

use byteorder::{ByteOrder, LittleEndian};
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::flags::Country;
use crate::models::player::Player;
use crate::models::server::ServerRecord;
use crate::models::types::{GameLayer, GameMode, Team};

/// Errors raised while reading a record back off the wire. Fatal for the one
/// record; the stream carries no recovery points.
#[derive(Debug)]
pub enum CodecError {
    Truncated,
    InvalidUtf8,
    BadAddress(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "Unexpected end of stream"),
            Self::InvalidUtf8 => write!(f, "String field is not valid UTF-8"),
            Self::BadAddress(host) => write!(f, "Unparseable host address: {}", host),
        }
    }
}

impl std::error::Error for CodecError {}

/// Serializes a record for transport.
pub fn encode(record: &ServerRecord) -> Vec<u8> {
    let mut w = Writer::new();

    w.put_str(&record.address().ip().to_string());
    w.put_u16(record.address().port());
    w.put_str(record.country().code());
    w.put_str(record.server_name());
    w.put_str(record.map_name());
    w.put_str(record.game_mode().token());
    w.put_i32(record.game_layer().raw());
    w.put_i32(record.num_players());
    w.put_i32(record.max_players());
    w.put_i32(record.reserved_slots());
    w.put_bool(record.has_password());
    w.put_str(record.os());
    w.put_bool(record.has_battle_recorder());
    w.put_str(record.server_text());
    w.put_str(record.server_logo());
    w.put_str(record.team_name(Team::Blufor));
    w.put_str(record.team_name(Team::Opfor));

    w.put_u32(record.players().len() as u32);
    for player in record.players() {
        encode_player(&mut w, player);
    }

    w.put_str(record.description());
    w.into_bytes()
}

/// Reconstructs a record from its transport encoding.
pub fn decode(bytes: &[u8]) -> Result<ServerRecord, CodecError> {
    let mut r = Reader::new(bytes);

    let host = r.get_str()?;
    let port = r.get_u16()?;
    let ip: IpAddr = host.parse().map_err(|_| CodecError::BadAddress(host))?;
    let address = SocketAddr::new(ip, port);

    let country = Country::from_code(&r.get_str()?);
    let server_name = r.get_str()?;
    let map_name = r.get_str()?;
    let game_mode = GameMode::from_token(&r.get_str()?);
    let game_layer = GameLayer::from_raw(r.get_i32()?);
    let num_players = r.get_i32()?;
    let max_players = r.get_i32()?;
    let reserved_slots = r.get_i32()?;
    let password = r.get_bool()?;
    let os = r.get_str()?;
    let battle_recorder = r.get_bool()?;
    let server_text = r.get_str()?;
    let server_logo = r.get_str()?;
    let team1_name = r.get_str()?;
    let team2_name = r.get_str()?;

    let count = r.get_u32()?;
    let mut players = Vec::with_capacity(count.min(1024) as usize);
    for _ in 0..count {
        players.push(decode_player(&mut r)?);
    }

    let description = r.get_str()?;

    Ok(ServerRecord::from_parts(
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
    ))
}

fn encode_player(w: &mut Writer, player: &Player) {
    w.put_str(player.name());
    w.put_i32(player.team().raw());
    w.put_i32(player.score());
    w.put_i32(player.kills());
    w.put_i32(player.deaths());
    w.put_i32(player.ping());
    w.put_bool(player.is_friend());
    w.put_str(player.server_id());
}

fn decode_player(r: &mut Reader) -> Result<Player, CodecError> {
    let name = r.get_str()?;
    let team = Team::from_raw(r.get_i32()?);
    let score = r.get_i32()?;
    let kills = r.get_i32()?;
    let deaths = r.get_i32()?;
    let ping = r.get_i32()?;
    let friend = r.get_bool()?;
    let server_id = r.get_str()?;
    Ok(Player::from_parts(name, team, score, kills, deaths, ping, friend, server_id))
}

struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    fn new() -> Writer {
        Writer { buf: Vec::new() }
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn put_u16(&mut self, v: u16) {
        let mut b = [0u8; 2];
        LittleEndian::write_u16(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    fn put_i32(&mut self, v: i32) {
        let mut b = [0u8; 4];
        LittleEndian::write_i32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    fn put_u32(&mut self, v: u32) {
        let mut b = [0u8; 4];
        LittleEndian::write_u32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    fn put_bool(&mut self, v: bool) {
        self.buf.push(v as u8);
    }

    fn put_str(&mut self, s: &str) {
        self.put_u32(s.len() as u32);
        self.buf.extend_from_slice(s.as_bytes());
    }
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Reader<'a> {
        Reader { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.buf.len() - self.pos < n {
            return Err(CodecError::Truncated);
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn get_u16(&mut self) -> Result<u16, CodecError> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    fn get_i32(&mut self) -> Result<i32, CodecError> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    fn get_u32(&mut self) -> Result<u32, CodecError> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    fn get_bool(&mut self) -> Result<bool, CodecError> {
        Ok(self.take(1)?[0] != 0)
    }

    fn get_str(&mut self) -> Result<String, CodecError> {
        let len = self.get_u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawServer;

    fn sample_record() -> ServerRecord {
        let raw: RawServer = serde_json::from_value(serde_json::json!({
            "IPAddress": "203.0.113.9",
            "GamePort": 16567,
            "Country": "br",
            "ServerName": "Round Trip &amp; Co",
            "MapName": "Kashan Desert",
            "GameMode": "gpm_cq",
            "MapSize": 128,
            "NumPlayers": 1,
            "MaxPlayers": 100,
            "ReservedSlots": 2,
            "Password": false,
            "OS": "win-32",
            "BattleRecorder": true,
            "ServerText": "line one|line two",
            "ServerLogo": "https://example.com/l.png",
            "Team1Name": "RU",
            "Team2Name": "CF",
            "Players": [
                {"Name": "echo", "Team": 2, "Score": 55, "Kills": 9, "Deaths": 4,
                 "Ping": 72, "IsFriend": true}
            ]
        }))
        .unwrap();
        ServerRecord::from_payload(&raw).unwrap()
    }

    #[test]
    fn round_trip_preserves_identity_and_accessors() {
        let original = sample_record();
        let decoded = decode(&encode(&original)).unwrap();

        assert_eq!(decoded, original);
        assert_eq!(decoded.address(), original.address());
        assert_eq!(decoded.country(), original.country());
        assert_eq!(decoded.server_name(), original.server_name());
        assert_eq!(decoded.map_name(), original.map_name());
        assert_eq!(decoded.game_mode(), original.game_mode());
        assert_eq!(decoded.game_layer(), original.game_layer());
        assert_eq!(decoded.num_players(), original.num_players());
        assert_eq!(decoded.max_players(), original.max_players());
        assert_eq!(decoded.reserved_slots(), original.reserved_slots());
        assert_eq!(decoded.has_password(), original.has_password());
        assert_eq!(decoded.os(), original.os());
        assert_eq!(decoded.has_battle_recorder(), original.has_battle_recorder());
        assert_eq!(decoded.server_text(), original.server_text());
        assert_eq!(decoded.server_logo(), original.server_logo());
        assert_eq!(decoded.team_name(Team::Blufor), original.team_name(Team::Blufor));
        assert_eq!(decoded.team_name(Team::Opfor), original.team_name(Team::Opfor));
        assert_eq!(decoded.description(), original.description());

        assert_eq!(decoded.players().len(), 1);
        let (p, q) = (&decoded.players()[0], &original.players()[0]);
        assert_eq!(p.name(), q.name());
        assert_eq!(p.team(), q.team());
        assert_eq!(p.score(), q.score());
        assert_eq!(p.ping(), q.ping());
        assert_eq!(p.is_friend(), q.is_friend());
        assert_eq!(p.server_id(), q.server_id());
    }

    #[test]
    fn round_trip_with_empty_roster() {
        let raw: RawServer = serde_json::from_value(serde_json::json!({
            "IPAddress": "203.0.113.9",
            "GamePort": 16567
        }))
        .unwrap();
        let original = ServerRecord::from_payload(&raw).unwrap();
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded, original);
        assert!(decoded.players().is_empty());
    }

    #[test]
    fn unknown_enum_forms_collapse_consistently() {
        let raw: RawServer = serde_json::from_value(serde_json::json!({
            "IPAddress": "203.0.113.9",
            "GamePort": 16567,
            "Country": "zz",
            "GameMode": "gpm_tag",
            "MapSize": 48
        }))
        .unwrap();
        let original = ServerRecord::from_payload(&raw).unwrap();
        assert_eq!(original.game_mode(), GameMode::Unknown);
        assert_eq!(original.game_layer(), GameLayer::Unknown);

        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded.game_mode(), GameMode::Unknown);
        assert_eq!(decoded.game_layer(), GameLayer::Unknown);
        assert_eq!(decoded.country(), original.country());
    }

    #[test]
    fn truncated_stream_errors() {
        let bytes = encode(&sample_record());
        for cut in [0, 1, 5, bytes.len() / 2, bytes.len() - 1] {
            match decode(&bytes[..cut]) {
                Err(CodecError::Truncated) => {}
                other => panic!("expected Truncated at cut {}, got {:?}", cut, other.err()),
            }
        }
    }

    #[test]
    fn unparseable_host_errors() {
        let mut w = Writer::new();
        w.put_str("not an ip");
        w.put_u16(16567);
        match decode(&w.into_bytes()) {
            Err(CodecError::BadAddress(host)) => assert_eq!(host, "not an ip"),
            other => panic!("expected BadAddress, got {:?}", other.err()),
        }
    }

    #[test]
    fn non_utf8_string_field_errors() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xff, 0xfe]);
        match decode(&bytes) {
            Err(CodecError::InvalidUtf8) => {}
            other => panic!("expected InvalidUtf8, got {:?}", other.err()),
        }
    }
}
