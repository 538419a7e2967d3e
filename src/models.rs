use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One tracked habit. `completion_history` holds one epoch-millisecond
/// timestamp per "marked done" event; same-day duplicates are collapsed
/// by the stats layer, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub owner_id: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_email: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub reminder_time: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: i64,
    #[serde(default)]
    pub completion_history: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub habits: BTreeMap<u64, Habit>,
}

impl AppData {
    pub fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub reminder_time: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_email: String,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateHabitRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub reminder_time: Option<String>,
    pub image_url: Option<String>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitResponse {
    pub id: u64,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_email: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub reminder_time: String,
    pub image_url: String,
    pub is_public: bool,
    pub created_at: i64,
    pub completion_history: Vec<i64>,
    pub current_streak: u32,
    pub trailing_30_percent: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayPoint {
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitStatsResponse {
    pub habit_id: u64,
    pub current_streak: u32,
    pub trailing_30_percent: u8,
    pub total_days_completed: u32,
    pub last_7_days: Vec<DayPoint>,
}
