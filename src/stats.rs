use crate::models::{DayPoint, Habit, HabitStatsResponse};
use chrono::{Duration, Local, NaiveDate, TimeZone};
use std::collections::BTreeSet;

pub fn build_habit_stats(habit: &Habit) -> HabitStatsResponse {
    build_habit_stats_at(Local::now().date_naive(), habit)
}

pub fn build_habit_stats_at(today: NaiveDate, habit: &Habit) -> HabitStatsResponse {
    let days = completion_days(&habit.completion_history);

    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7i64).rev() {
        let date = today - Duration::days(offset);
        last_7_days.push(DayPoint {
            date: date.to_string(),
            completed: days.contains(&date),
        });
    }

    HabitStatsResponse {
        habit_id: habit.id,
        current_streak: current_streak_at(today, &habit.completion_history),
        trailing_30_percent: trailing_30_percent_at(today, &habit.completion_history),
        total_days_completed: days.len() as u32,
        last_7_days,
    }
}

pub fn current_streak(history: &[i64]) -> u32 {
    current_streak_at(Local::now().date_naive(), history)
}

/// Consecutive days with a completion, counted back from `today`.
/// The chain is anchored at `today`: no completion today means 0 even if
/// yesterday and every day before it are present.
pub fn current_streak_at(today: NaiveDate, history: &[i64]) -> u32 {
    let days = completion_days(history);

    let mut streak = 0;
    let mut expected = today;
    for day in days.iter().rev() {
        if *day == expected {
            streak += 1;
            expected = expected - Duration::days(1);
        } else if *day < expected {
            break;
        }
        // days after `expected` are future-dated entries; skip them
    }

    streak
}

pub fn trailing_30_percent(history: &[i64]) -> u8 {
    trailing_30_percent_at(Local::now().date_naive(), history)
}

/// Share of the last 30 calendar days (today included) with a completion,
/// rounded to a whole percentage.
pub fn trailing_30_percent_at(today: NaiveDate, history: &[i64]) -> u8 {
    let days = completion_days(history);

    let mut count = 0u32;
    for offset in 0..30i64 {
        if days.contains(&(today - Duration::days(offset))) {
            count += 1;
        }
    }

    ((count as f64 / 30.0) * 100.0).round() as u8
}

pub fn completed_on(date: NaiveDate, history: &[i64]) -> bool {
    history.iter().filter_map(|ts| day_key(*ts)).any(|day| day == date)
}

fn completion_days(history: &[i64]) -> BTreeSet<NaiveDate> {
    history.iter().filter_map(|ts| day_key(*ts)).collect()
}

/// Local calendar date of an epoch-millisecond instant. Entries outside
/// chrono's representable range are dropped rather than counted.
pub fn day_key(timestamp_ms: i64) -> Option<NaiveDate> {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|instant| instant.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Habit;

    fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn millis_at(date: NaiveDate, hour: u32, minute: u32) -> i64 {
        Local
            .from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
            .single()
            .unwrap()
            .timestamp_millis()
    }

    fn midnight_millis(date: NaiveDate) -> i64 {
        millis_at(date, 0, 0)
    }

    fn habit_with_history(history: Vec<i64>) -> Habit {
        Habit {
            id: 1,
            owner_id: "user-1".to_string(),
            owner_name: String::new(),
            owner_email: String::new(),
            title: "Morning run".to_string(),
            description: "5k before breakfast".to_string(),
            category: "Fitness".to_string(),
            reminder_time: String::new(),
            image_url: String::new(),
            is_public: false,
            created_at: 0,
            completion_history: history,
        }
    }

    #[test]
    fn empty_history_yields_zero_everywhere() {
        let today = reference_day();
        assert_eq!(current_streak_at(today, &[]), 0);
        assert_eq!(trailing_30_percent_at(today, &[]), 0);
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let today = reference_day();
        let history = vec![
            midnight_millis(today),
            midnight_millis(today - Duration::days(1)),
            midnight_millis(today - Duration::days(2)),
        ];
        assert_eq!(current_streak_at(today, &history), 3);
    }

    #[test]
    fn streak_is_zero_without_a_completion_today() {
        let today = reference_day();
        let history = vec![
            midnight_millis(today - Duration::days(1)),
            midnight_millis(today - Duration::days(2)),
        ];
        assert_eq!(current_streak_at(today, &history), 0);
    }

    #[test]
    fn same_day_timestamps_count_once() {
        let today = reference_day();
        let history = vec![midnight_millis(today), millis_at(today, 15, 0)];
        assert_eq!(current_streak_at(today, &history), 1);
        assert_eq!(trailing_30_percent_at(today, &history), 3);
    }

    #[test]
    fn streak_breaks_at_first_missing_day() {
        let today = reference_day();
        let history = vec![
            midnight_millis(today),
            midnight_millis(today - Duration::days(3)),
        ];
        assert_eq!(current_streak_at(today, &history), 1);
    }

    #[test]
    fn future_entries_do_not_break_the_chain() {
        let today = reference_day();
        let history = vec![
            midnight_millis(today + Duration::days(2)),
            midnight_millis(today),
            midnight_millis(today - Duration::days(1)),
        ];
        assert_eq!(current_streak_at(today, &history), 2);
    }

    #[test]
    fn ten_days_in_window_rounds_to_33_percent() {
        let today = reference_day();
        let history: Vec<i64> = (0..10)
            .map(|offset| midnight_millis(today - Duration::days(offset)))
            .collect();
        assert_eq!(trailing_30_percent_at(today, &history), 33);
    }

    #[test]
    fn percent_ignores_completions_outside_the_window() {
        let today = reference_day();
        let mut history = vec![midnight_millis(today)];
        assert_eq!(trailing_30_percent_at(today, &history), 3);

        history.push(midnight_millis(today - Duration::days(45)));
        assert_eq!(trailing_30_percent_at(today, &history), 3);
    }

    #[test]
    fn percent_never_decreases_when_adding_a_window_day() {
        let today = reference_day();
        let mut history = Vec::new();
        let mut previous = 0;
        for offset in 0..30 {
            history.push(midnight_millis(today - Duration::days(offset)));
            let percent = trailing_30_percent_at(today, &history);
            assert!(percent >= previous);
            previous = percent;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn repeated_calls_agree() {
        let today = reference_day();
        let history = vec![
            midnight_millis(today),
            midnight_millis(today - Duration::days(1)),
        ];
        assert_eq!(
            current_streak_at(today, &history),
            current_streak_at(today, &history)
        );
        assert_eq!(
            trailing_30_percent_at(today, &history),
            trailing_30_percent_at(today, &history)
        );
    }

    #[test]
    fn completed_on_normalizes_to_the_calendar_day() {
        let today = reference_day();
        let history = vec![millis_at(today, 22, 45)];
        assert!(completed_on(today, &history));
        assert!(!completed_on(today - Duration::days(1), &history));
    }

    #[test]
    fn habit_stats_cover_each_of_the_last_7_days() {
        let today = reference_day();
        let habit = habit_with_history(vec![
            midnight_millis(today),
            millis_at(today, 9, 30),
            midnight_millis(today - Duration::days(1)),
        ]);

        let stats = build_habit_stats_at(today, &habit);
        assert_eq!(stats.habit_id, 1);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.total_days_completed, 2);
        assert_eq!(stats.trailing_30_percent, 7);
        assert_eq!(stats.last_7_days.len(), 7);

        let today_point = stats
            .last_7_days
            .iter()
            .find(|point| point.date == today.to_string())
            .expect("missing day");
        assert!(today_point.completed);
        let absent = stats
            .last_7_days
            .iter()
            .find(|point| point.date == (today - Duration::days(3)).to_string())
            .expect("missing day");
        assert!(!absent.completed);
    }
}
