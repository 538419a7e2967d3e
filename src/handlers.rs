use crate::auth::{Identity, identity_from_headers, require_identity};
use crate::errors::AppError;
use crate::models::{
    CreateHabitRequest, Habit, HabitResponse, HabitStatsResponse, UpdateHabitRequest,
};
use crate::state::AppState;
use crate::stats::{build_habit_stats_at, completed_on, current_streak_at, trailing_30_percent_at};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Html,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let public_count = data.habits.values().filter(|habit| habit.is_public).count();
    Html(render_index(&today().to_string(), public_count))
}

pub async fn create_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let identity = require_identity(&headers)?;

    let title = payload.title.trim();
    let description = payload.description.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    if description.is_empty() {
        return Err(AppError::bad_request("description must not be empty"));
    }

    let mut data = state.data.lock().await;
    let id = data.allocate_id();
    let habit = Habit {
        id,
        owner_id: identity.user_id,
        owner_name: payload.owner_name.trim().to_string(),
        owner_email: payload.owner_email.trim().to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: payload.category.trim().to_string(),
        reminder_time: payload.reminder_time.trim().to_string(),
        image_url: payload.image_url.trim().to_string(),
        is_public: payload.is_public,
        created_at: Local::now().timestamp_millis(),
        completion_history: Vec::new(),
    };
    data.habits.insert(id, habit.clone());

    persist_data(&state.data_path, &data).await?;

    Ok(Json(to_response(today(), &habit)))
}

pub async fn list_mine(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<HabitResponse>>, AppError> {
    let identity = require_identity(&headers)?;
    let today = today();

    let data = state.data.lock().await;
    let habits = data
        .habits
        .values()
        .filter(|habit| habit.owner_id == identity.user_id)
        .map(|habit| to_response(today, habit))
        .collect();

    Ok(Json(habits))
}

pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<Vec<HabitResponse>>, AppError> {
    let today = today();

    let data = state.data.lock().await;
    let habits = data
        .habits
        .values()
        .filter(|habit| habit.is_public)
        .map(|habit| to_response(today, habit))
        .collect();

    Ok(Json(habits))
}

pub async fn get_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<HabitResponse>, AppError> {
    let identity = identity_from_headers(&headers);

    let data = state.data.lock().await;
    let habit = data
        .habits
        .get(&id)
        .filter(|habit| visible_to(habit, identity.as_ref()))
        .ok_or_else(|| AppError::not_found("habit not found"))?;

    Ok(Json(to_response(today(), habit)))
}

pub async fn update_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateHabitRequest>,
) -> Result<Json<HabitResponse>, AppError> {
    let identity = require_identity(&headers)?;

    let mut data = state.data.lock().await;
    let updated = {
        let habit = data
            .habits
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("habit not found"))?;
        require_owner(habit, &identity)?;

        if let Some(title) = payload.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(AppError::bad_request("title must not be empty"));
            }
            habit.title = title;
        }
        if let Some(description) = payload.description {
            let description = description.trim().to_string();
            if description.is_empty() {
                return Err(AppError::bad_request("description must not be empty"));
            }
            habit.description = description;
        }
        if let Some(category) = payload.category {
            habit.category = category.trim().to_string();
        }
        if let Some(reminder_time) = payload.reminder_time {
            habit.reminder_time = reminder_time.trim().to_string();
        }
        if let Some(image_url) = payload.image_url {
            habit.image_url = image_url.trim().to_string();
        }
        if let Some(is_public) = payload.is_public {
            habit.is_public = is_public;
        }

        habit.clone()
    };

    persist_data(&state.data_path, &data).await?;

    Ok(Json(to_response(today(), &updated)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let identity = require_identity(&headers)?;

    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .get(&id)
        .ok_or_else(|| AppError::not_found("habit not found"))?;
    require_owner(habit, &identity)?;
    data.habits.remove(&id);

    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn complete_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<HabitResponse>, AppError> {
    let identity = require_identity(&headers)?;
    let now = Local::now();
    let today = now.date_naive();

    let mut data = state.data.lock().await;
    let updated = {
        let habit = data
            .habits
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("habit not found"))?;
        require_owner(habit, &identity)?;

        if completed_on(today, &habit.completion_history) {
            return Err(AppError::conflict("already marked complete today"));
        }

        habit.completion_history.push(now.timestamp_millis());
        habit.clone()
    };

    persist_data(&state.data_path, &data).await?;

    Ok(Json(to_response(today, &updated)))
}

pub async fn habit_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<HabitStatsResponse>, AppError> {
    let identity = identity_from_headers(&headers);

    let data = state.data.lock().await;
    let habit = data
        .habits
        .get(&id)
        .filter(|habit| visible_to(habit, identity.as_ref()))
        .ok_or_else(|| AppError::not_found("habit not found"))?;

    Ok(Json(build_habit_stats_at(today(), habit)))
}

// Private habits 404 for everyone but the owner so their existence leaks
// nothing.
fn visible_to(habit: &Habit, identity: Option<&Identity>) -> bool {
    habit.is_public || identity.is_some_and(|identity| identity.user_id == habit.owner_id)
}

fn require_owner(habit: &Habit, identity: &Identity) -> Result<(), AppError> {
    if habit.owner_id != identity.user_id {
        return Err(AppError::forbidden("not the owner of this habit"));
    }
    Ok(())
}

fn to_response(today: NaiveDate, habit: &Habit) -> HabitResponse {
    HabitResponse {
        id: habit.id,
        owner_id: habit.owner_id.clone(),
        owner_name: habit.owner_name.clone(),
        owner_email: habit.owner_email.clone(),
        title: habit.title.clone(),
        description: habit.description.clone(),
        category: habit.category.clone(),
        reminder_time: habit.reminder_time.clone(),
        image_url: habit.image_url.clone(),
        is_public: habit.is_public,
        created_at: habit.created_at,
        completion_history: habit.completion_history.clone(),
        current_streak: current_streak_at(today, &habit.completion_history),
        trailing_30_percent: trailing_30_percent_at(today, &habit.completion_history),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
