// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Match metadata returned by the match-detail service.
//!
//! The service owns this schema, so records are kept verbatim and only
//! read through lenient accessors. Anything the accessors do not
//! understand still survives export and import untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Player position, in scoreboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

impl Role {
    pub const ORDER: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

    pub fn parse(name: &str) -> Option<Role> {
        match name {
            "Top" => Some(Role::Top),
            "Jungle" => Some(Role::Jungle),
            "Mid" => Some(Role::Mid),
            "Bot" => Some(Role::Bot),
            "Support" => Some(Role::Support),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Bot => "Bot",
            Role::Support => "Support",
        }
    }

    fn rank(role: Option<Role>) -> usize {
        role.and_then(|r| Role::ORDER.iter().position(|o| *o == r))
            .unwrap_or(Role::ORDER.len())
    }
}

/// One player line of a team.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub champion: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub kills: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub deaths: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub assists: Option<u32>,
}

impl Player {
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }
}

/// A team as read from a match record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_players")]
    pub players: Vec<Player>,
}

impl Team {
    /// Players ordered Top to Support; unknown roles go last.
    pub fn players_by_role(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().collect();
        players.sort_by_key(|p| Role::rank(p.role()));
        players
    }

    pub fn player_in(&self, role: Role) -> Option<&Player> {
        self.players.iter().find(|p| p.role() == Some(role))
    }
}

/// Which side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    fn team_key(&self) -> &'static str {
        match self {
            Side::Team1 => "team1",
            Side::Team2 => "team2",
        }
    }

    fn score_key(&self) -> &'static str {
        match self {
            Side::Team1 => "team1score",
            Side::Team2 => "team2score",
        }
    }

    fn fallback_name(&self) -> &'static str {
        match self {
            Side::Team1 => "Team 1",
            Side::Team2 => "Team 2",
        }
    }
}

/// Mirrored scoreboard line: both teams' players for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardRow {
    pub role: Role,
    pub team1: Option<Player>,
    pub team2: Option<Player>,
}

/// A single match record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchInfo(pub Map<String, Value>);

impl MatchInfo {
    pub fn team(&self, side: Side) -> Team {
        self.0
            .get(side.team_key())
            .and_then(|v| Team::deserialize(v).ok())
            .unwrap_or_default()
    }

    pub fn team_name(&self, side: Side) -> String {
        self.team(side)
            .team_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| side.fallback_name().to_string())
    }

    pub fn score(&self, side: Side) -> u32 {
        self.0.get(side.score_key()).and_then(count_of).unwrap_or(0)
    }

    pub fn tournament(&self) -> Option<&str> {
        self.str_field("tournament")
    }

    /// Tournament start and end, only when both are known.
    pub fn tournament_dates(&self) -> Option<(&str, &str)> {
        Some((
            self.str_field("tournament_start")?,
            self.str_field("tournament_end")?,
        ))
    }

    pub fn overview_page(&self) -> Option<&str> {
        self.str_field("overviewpage")
    }

    /// One row per role, pairing the two teams' players.
    pub fn scoreboard(&self) -> Vec<ScoreboardRow> {
        let team1 = self.team(Side::Team1);
        let team2 = self.team(Side::Team2);
        Role::ORDER
            .iter()
            .map(|role| ScoreboardRow {
                role: *role,
                team1: team1.player_in(*role).cloned(),
                team2: team2.player_in(*role).cloned(),
            })
            .collect()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }
}

/// Match metadata as stored in a document: one record or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchInfoField {
    Many(Vec<MatchInfo>),
    One(MatchInfo),
}

impl MatchInfoField {
    /// Wrap fetched records; nothing fetched means no metadata.
    pub fn from_matches(matches: Vec<MatchInfo>) -> Option<Self> {
        if matches.is_empty() {
            None
        } else {
            Some(MatchInfoField::Many(matches))
        }
    }

    /// All records as a flat list.
    pub fn matches(&self) -> Vec<&MatchInfo> {
        match self {
            MatchInfoField::Many(list) => list.iter().collect(),
            MatchInfoField::One(info) => vec![info],
        }
    }
}

fn count_of(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_of(&value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_players<'de, D>(deserializer: D) -> Result<Vec<Player>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| Player::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> MatchInfo {
        serde_json::from_value(json!({
            "team1": {
                "team_name": "T1",
                "players": [
                    {"name": "Keria", "role": "Support", "champion": "Rakan", "kills": 0, "deaths": 1, "assists": 14},
                    {"name": "Faker", "role": "Mid", "champion": "Azir", "kills": "4", "deaths": 0, "assists": 6},
                    {"name": "Sub", "role": "Coach"},
                    {"name": "Zeus", "role": "Top", "champion": "Jax", "kills": 2, "deaths": 2, "assists": 3}
                ]
            },
            "team2": {"players": [{"name": "Chovy", "role": "Mid", "champion": "Orianna"}]},
            "team1score": 2,
            "team2score": "1",
            "tournament": "Worlds 2024",
            "tournament_start": "2024-09-25",
            "tournament_end": "2024-11-02",
            "overviewpage": "2024 Season World Championship/Main Event",
            "extra": {"patch": "14.18"}
        }))
        .unwrap()
    }

    #[test]
    fn test_players_sorted_by_role() {
        let team = sample().team(Side::Team1);
        let names: Vec<_> = team
            .players_by_role()
            .iter()
            .map(|p| p.name.clone().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["Zeus", "Faker", "Keria", "Sub"]);
    }

    #[test]
    fn test_lenient_accessors() {
        let info = sample();
        assert_eq!(info.team_name(Side::Team1), "T1");
        assert_eq!(info.team_name(Side::Team2), "Team 2");
        assert_eq!(info.score(Side::Team1), 2);
        assert_eq!(info.score(Side::Team2), 1);
        assert_eq!(info.tournament(), Some("Worlds 2024"));
        assert_eq!(info.tournament_dates(), Some(("2024-09-25", "2024-11-02")));
        assert_eq!(info.team(Side::Team1).player_in(Role::Mid).unwrap().kills, Some(4));
    }

    #[test]
    fn test_scoreboard_pairs_roles() {
        let board = sample().scoreboard();
        assert_eq!(board.len(), 5);
        let mid = &board[2];
        assert_eq!(mid.role, Role::Mid);
        assert_eq!(mid.team1.as_ref().unwrap().champion.as_deref(), Some("Azir"));
        assert_eq!(mid.team2.as_ref().unwrap().champion.as_deref(), Some("Orianna"));
        assert!(board[1].team2.is_none());
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let info = sample();
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["extra"]["patch"], "14.18");
        let back: MatchInfo = serde_json::from_value(value).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_field_accepts_one_or_many() {
        let one: MatchInfoField = serde_json::from_value(json!({"tournament": "LCK"})).unwrap();
        let many: MatchInfoField =
            serde_json::from_value(json!([{"tournament": "LCK"}, {"tournament": "LEC"}])).unwrap();
        assert_eq!(one.matches().len(), 1);
        assert_eq!(many.matches().len(), 2);
        assert!(matches!(one, MatchInfoField::One(_)));
    }

    #[test]
    fn test_from_matches_empty_is_none() {
        assert!(MatchInfoField::from_matches(Vec::new()).is_none());
        let field = MatchInfoField::from_matches(vec![MatchInfo::default()]).unwrap();
        assert_eq!(field.matches().len(), 1);
    }
}
