//! Record shapes of the event planner tables.
//!
//! Each table has a row struct, as read back from the database, and a
//! `New*` struct to insert. `New*::new` takes the required fields and fills
//! the rest with the defaults the bot has always stored. A new record with
//! `id: None` gets the next free rowid from SQLite.

use diesel::prelude::*;

use crate::db::{DbEventId, DbPerformerId, DbUserId};

/// Placeholder for performer and location details left blank by the user.
pub const NOT_SPECIFIED: &str = "не указано";
/// Default for `deadline_task` and `amount_expense`.
pub const NOTE: &str = "note";
/// Default for `status_task`.
pub const STATUS_ACTIVE: &str = "active";

#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::users, primary_key(tg_id))]
pub struct User {
    pub tg_id: DbUserId,
    pub user_name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub tg_id: DbUserId,
    pub user_name: &'a str,
}

impl<'a> From<&'a teloxide::types::User> for NewUser<'a> {
    fn from(user: &'a teloxide::types::User) -> Self {
        Self {
            tg_id: user.id.into(),
            user_name: user.username.as_deref().unwrap_or(&user.first_name),
        }
    }
}

#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::event)]
pub struct Event {
    pub id: DbEventId,
    pub tg_id: DbUserId,
    pub title_event: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::event)]
pub struct NewEvent<'a> {
    pub id: Option<DbEventId>,
    pub tg_id: DbUserId,
    pub title_event: &'a str,
}

impl<'a> NewEvent<'a> {
    #[must_use]
    pub const fn new(tg_id: DbUserId, title_event: &'a str) -> Self {
        Self { id: None, tg_id, title_event }
    }
}

#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::tasks)]
pub struct Task {
    pub id: i64,
    pub tg_id: DbUserId,
    pub title_task: String,
    pub id_event: DbEventId,
    pub deadline_task: String,
    pub status_task: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::tasks)]
pub struct NewTask<'a> {
    pub id: Option<i64>,
    pub tg_id: DbUserId,
    pub title_task: &'a str,
    pub id_event: DbEventId,
    pub deadline_task: &'a str,
    pub status_task: &'a str,
}

impl<'a> NewTask<'a> {
    #[must_use]
    pub const fn new(
        tg_id: DbUserId,
        title_task: &'a str,
        id_event: DbEventId,
    ) -> Self {
        Self {
            id: None,
            tg_id,
            title_task,
            id_event,
            deadline_task: NOTE,
            status_task: STATUS_ACTIVE,
        }
    }
}

#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::expenses)]
pub struct Expense {
    pub id: i64,
    pub tg_id: DbUserId,
    pub title_expense: String,
    pub amount_expense: String,
    pub id_event: DbEventId,
    pub date_expense: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpense<'a> {
    pub id: Option<i64>,
    pub tg_id: DbUserId,
    /// Expense category.
    pub title_expense: &'a str,
    pub amount_expense: &'a str,
    pub id_event: DbEventId,
    pub date_expense: &'a str,
}

impl<'a> NewExpense<'a> {
    #[must_use]
    pub const fn new(
        tg_id: DbUserId,
        title_expense: &'a str,
        id_event: DbEventId,
        date_expense: &'a str,
    ) -> Self {
        Self {
            id: None,
            tg_id,
            title_expense,
            amount_expense: NOTE,
            id_event,
            date_expense,
        }
    }
}

/// The event a user currently works with. Nothing makes `tg_id` unique
/// here, a user may have several rows.
#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::current_event)]
pub struct CurrentEvent {
    pub id: i64,
    pub id_event: DbEventId,
    pub tg_id: DbUserId,
    pub title_event: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::current_event)]
pub struct NewCurrentEvent<'a> {
    pub id: Option<i64>,
    pub id_event: DbEventId,
    pub tg_id: DbUserId,
    pub title_event: &'a str,
}

impl<'a> NewCurrentEvent<'a> {
    #[must_use]
    pub const fn new(
        tg_id: DbUserId,
        id_event: DbEventId,
        title_event: &'a str,
    ) -> Self {
        Self { id: None, id_event, tg_id, title_event }
    }
}

#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::performers)]
pub struct Performer {
    pub id: DbPerformerId,
    pub tg_id: DbUserId,
    pub name_performer: String,
    pub category_performer: String,
    pub photo_performer: String,
    pub reiting_performer: String,
    pub cost_performer: String,
    pub phone_performer: String,
    pub profile_performer: String,
    pub description_performer: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::performers)]
pub struct NewPerformer<'a> {
    pub id: Option<DbPerformerId>,
    pub tg_id: DbUserId,
    pub name_performer: &'a str,
    pub category_performer: &'a str,
    /// Telegram file id of the photo.
    pub photo_performer: &'a str,
    pub reiting_performer: &'a str,
    pub cost_performer: &'a str,
    pub phone_performer: &'a str,
    pub profile_performer: &'a str,
    pub description_performer: &'a str,
}

impl<'a> NewPerformer<'a> {
    #[must_use]
    pub const fn new(
        tg_id: DbUserId,
        name_performer: &'a str,
        category_performer: &'a str,
        photo_performer: &'a str,
    ) -> Self {
        Self {
            id: None,
            tg_id,
            name_performer,
            category_performer,
            photo_performer,
            reiting_performer: NOT_SPECIFIED,
            cost_performer: NOT_SPECIFIED,
            phone_performer: NOT_SPECIFIED,
            profile_performer: NOT_SPECIFIED,
            description_performer: NOT_SPECIFIED,
        }
    }
}

#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::locations)]
pub struct Location {
    pub id: i64,
    pub tg_id: DbUserId,
    pub name_location: String,
    pub category_location: i64,
    pub description_location: String,
    pub photo_location: String,
    pub adress_location: String,
    pub area_location: String,
    pub capacity_location: String,
    pub reiting_location: String,
    pub cost_location: String,
    pub phone_location: String,
    pub profile_location: String,
    pub additional_photo_location: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::locations)]
pub struct NewLocation<'a> {
    pub id: Option<i64>,
    pub tg_id: DbUserId,
    pub name_location: &'a str,
    pub category_location: i64,
    pub description_location: &'a str,
    pub photo_location: &'a str,
    pub adress_location: &'a str,
    pub area_location: &'a str,
    pub capacity_location: &'a str,
    pub reiting_location: &'a str,
    pub cost_location: &'a str,
    pub phone_location: &'a str,
    pub profile_location: &'a str,
    /// Extra photo file ids, empty when there are none.
    pub additional_photo_location: &'a str,
}

impl<'a> NewLocation<'a> {
    #[must_use]
    pub const fn new(
        tg_id: DbUserId,
        name_location: &'a str,
        category_location: i64,
        photo_location: &'a str,
    ) -> Self {
        Self {
            id: None,
            tg_id,
            name_location,
            category_location,
            description_location: NOT_SPECIFIED,
            photo_location,
            adress_location: NOT_SPECIFIED,
            area_location: NOT_SPECIFIED,
            capacity_location: NOT_SPECIFIED,
            reiting_location: NOT_SPECIFIED,
            cost_location: NOT_SPECIFIED,
            phone_location: NOT_SPECIFIED,
            profile_location: NOT_SPECIFIED,
            additional_photo_location: "",
        }
    }
}

/// A review of a performer.
#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::feedback)]
pub struct Feedback {
    pub id: i64,
    pub tg_id: DbUserId,
    pub id_performer: DbPerformerId,
    pub feedback_text: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::feedback)]
pub struct NewFeedback<'a> {
    pub id: Option<i64>,
    pub tg_id: DbUserId,
    pub id_performer: DbPerformerId,
    pub feedback_text: &'a str,
}

impl<'a> NewFeedback<'a> {
    #[must_use]
    pub const fn new(
        tg_id: DbUserId,
        id_performer: DbPerformerId,
        feedback_text: &'a str,
    ) -> Self {
        Self { id: None, tg_id, id_performer, feedback_text }
    }
}

/// A review of an event.
#[derive(
    Clone, Debug, PartialEq, Eq, Queryable, Selectable, Identifiable, AsChangeset,
)]
#[diesel(table_name = crate::schema::event_feedback)]
pub struct EventFeedback {
    pub id: i64,
    pub tg_id: DbUserId,
    pub id_event: DbEventId,
    pub estimation: i32,
    pub feedback: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::event_feedback)]
pub struct NewEventFeedback<'a> {
    pub id: Option<i64>,
    pub tg_id: DbUserId,
    pub id_event: DbEventId,
    pub estimation: i32,
    pub feedback: &'a str,
}

impl<'a> NewEventFeedback<'a> {
    #[must_use]
    pub const fn new(
        tg_id: DbUserId,
        id_event: DbEventId,
        feedback: &'a str,
    ) -> Self {
        Self { id: None, tg_id, id_event, estimation: 0, feedback }
    }
}
