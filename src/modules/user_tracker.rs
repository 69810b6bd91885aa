use std::sync::Arc;

use diesel::{QueryResult, RunQueryDsl, SqliteConnection};
use teloxide::types::{Update, UpdateKind, User};

use crate::common::BotEnv;
use crate::{models, schema};

/// Register the sender of an update on their first interaction with the bot.
pub async fn inspect_update(env: Arc<BotEnv>, upd: Update) {
    let Some(user) = sender(&upd).cloned() else { return };
    let result = env.db.run(move |conn| register(conn, &user)).await;
    if let Err(e) = result {
        log::error!("Failed to register user: {e:?}");
    }
}

/// Insert a `users` row for `user` unless one exists. Returns whether a row
/// was inserted. An existing row is never updated.
pub fn register(conn: &mut SqliteConnection, user: &User) -> QueryResult<bool> {
    let inserted = diesel::insert_or_ignore_into(schema::users::table)
        .values(models::NewUser::from(user))
        .execute(conn)?;
    if inserted > 0 {
        log::info!("New user {} ({})", user.id, user.first_name);
    }
    Ok(inserted > 0)
}

fn sender(upd: &Update) -> Option<&User> {
    match &upd.kind {
        UpdateKind::Message(msg) | UpdateKind::EditedMessage(msg) => {
            msg.from.as_ref()
        }
        UpdateKind::CallbackQuery(q) => Some(&q.from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use diesel::QueryDsl;

    use super::*;
    use crate::db::{Database, DbUserId};

    fn user(json: serde_json::Value) -> User {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn registers_once() -> anyhow::Result<()> {
        let db = Database::open_in_memory()?;
        db.init()?;
        let ann = user(serde_json::json!({
            "id": 111,
            "is_bot": false,
            "first_name": "Ann",
            "username": "ann_plans",
        }));

        assert!(register(&mut db.conn(), &ann)?);
        assert!(!register(&mut db.conn(), &ann)?);

        let stored = schema::users::table
            .find(DbUserId(111))
            .first::<models::User>(&mut *db.conn())?;
        assert_eq!(stored.user_name, "ann_plans");
        Ok(())
    }

    #[test]
    fn existing_name_is_kept() -> anyhow::Result<()> {
        let db = Database::open_in_memory()?;
        db.init()?;
        let bob = user(serde_json::json!({
            "id": 222,
            "is_bot": false,
            "first_name": "Bob",
        }));
        assert!(register(&mut db.conn(), &bob)?);

        let renamed = User { first_name: "Robert".to_string(), ..bob };
        assert!(!register(&mut db.conn(), &renamed)?);

        let stored = schema::users::table
            .find(DbUserId(222))
            .first::<models::User>(&mut *db.conn())?;
        assert_eq!(stored.user_name, "Bob");
        Ok(())
    }
}
