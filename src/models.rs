///
/// models.rs  Oct 16th, 2026
///
/// Value types returned by the statistics service, the typed search
/// filters and the paginated result wrapper.
///
/// Unknown fields are kept in `extra` so a decoded entity re-serializes
/// to the shape the service sent.
///

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/************ Ident ***************************************/
/* Identifiers are numeric for clubs/players/games and textual for
 * competitions ("ES1"); seasons arrive as either.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ident {
    Number(i64),
    Text(String),
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Number(n) => write!(f, "{n}"),
            Ident::Text(s)   => f.write_str(s),
        }
    }
}

impl From<i64> for Ident {
    fn from(n: i64) -> Self { Ident::Number(n) }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self { Ident::Text(s.to_string()) }
}

/************ Competition *********************************/
/* `SELECT *` rows carry `competition_id`, other deployments send `id`.
 * The identifier stays in `extra` under whichever key arrived so the
 * row re-serializes exactly as received.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Competition {
    pub fn id(&self) -> Option<Ident> {
        ident_field(&self.extra, &["competition_id", "id"])
    }
}

fn ident_field(extra: &Map<String, Value>, keys: &[&str]) -> Option<Ident> {
    keys.iter()
        .find_map(|key| extra.get(*key))
        .and_then(|value| Ident::deserialize(value).ok())
}

/************ Club ****************************************/
/* Row of clubs/{competition_id} */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    #[serde(rename = "club_id")]
    pub id: Ident,
    pub name: String,
    #[serde(rename = "domestic_competition_id", default, skip_serializing_if = "Option::is_none")]
    pub competition_id: Option<Ident>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/************ TeamRow *************************************/
/* Row of both team listings (search + by season). Search rows also
 * carry `country_name` and the competition's `name`, kept in `extra`.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    #[serde(rename = "team_id")]
    pub id: Ident,
    #[serde(rename = "team_name")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeamRow {
    pub fn country(&self) -> Option<&str> {
        self.extra.get("country_name").and_then(Value::as_str)
    }

    pub fn competition_name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/************ Player **************************************/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "player_id")]
    pub id: Ident,
    pub name: String,
    #[serde(rename = "current_club_id", default, skip_serializing_if = "Option::is_none")]
    pub club_id: Option<Ident>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/************ PlayerDetail ********************************/
/* Body of players/{id}: the player row plus career aggregates */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetail {
    pub player: Player,
    pub stats: PlayerStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub cards: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub first_year: Option<i32>,
    #[serde(default)]
    pub last_year: Option<i32>,
    #[serde(default)]
    pub estimated_games_played: u32,
}

/************ PlayerPredictions ***************************/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPredictions {
    pub predicted_goals_2024: f64,
    pub predicted_assists_2024: f64,
    pub predicted_cards_2024: f64,
}

/************ Season **************************************/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "season")]
    pub label: Ident,
}

/************ Game ****************************************/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "game_id")]
    pub id: Ident,
    pub competition_id: Ident,
    pub season: Ident,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
    pub home_club_id: Ident,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_club_name: Option<String>,
    pub away_club_id: Ident,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_club_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_club_goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_club_goals: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    HomeWin,
    AwayWin,
    Draw,
}

impl Game {
    pub fn score(&self) -> Option<(u32, u32)> {
        Some((self.home_club_goals?, self.away_club_goals?))
    }

    pub fn result(&self) -> Option<GameResult> {
        let (home, away) = self.score()?;
        Some(match home.cmp(&away) {
            std::cmp::Ordering::Greater => GameResult::HomeWin,
            std::cmp::Ordering::Less    => GameResult::AwayWin,
            std::cmp::Ordering::Equal   => GameResult::Draw,
        })
    }

    // The service sends RFC 2822 dates ("Sun, 03 Aug 2014 00:00:00 GMT");
    // plain ISO dates are accepted too
    pub fn played_on(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?.trim();
        DateTime::parse_from_rfc2822(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

/************ TeamDetail **********************************/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDetail {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squad_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_team_players: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreigners_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stadium_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/************ Search Filters ******************************/
/* None means "no constraint"; the composer never sends it */

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub position: Option<String>,
    pub current_club_name: Option<String>,
    pub country_of_citizenship: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

impl PlayerFilter {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn club(mut self, club: impl Into<String>) -> Self {
        self.current_club_name = Some(club.into());
        self
    }

    pub fn nationality(mut self, country: impl Into<String>) -> Self {
        self.country_of_citizenship = Some(country.into());
        self
    }

    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamFilter {
    pub name: Option<String>,
    pub country: Option<String>,
    pub competition: Option<String>,
}

impl TeamFilter {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn competition(mut self, competition: impl Into<String>) -> Self {
        self.competition = Some(competition.into());
        self
    }
}

/************ PaginatedResult<T> **************************/
/* One page of a search. Invariant: page > 0, per_page > 0,
 * items.len() <= per_page
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> PaginatedResult<T> {
    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(u64::from(self.per_page.max(1)))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.page_count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
