// Kept in sync with sql/create_tables.sql by hand.

diesel::table! {
    current_event (id) {
        id -> BigInt,
        id_event -> BigInt,
        tg_id -> BigInt,
        title_event -> Text,
    }
}

diesel::table! {
    event (id) {
        id -> BigInt,
        tg_id -> BigInt,
        title_event -> Text,
    }
}

diesel::table! {
    event_feedback (id) {
        id -> BigInt,
        tg_id -> BigInt,
        id_event -> BigInt,
        estimation -> Integer,
        feedback -> Text,
    }
}

diesel::table! {
    expenses (id) {
        id -> BigInt,
        tg_id -> BigInt,
        title_expense -> Text,
        amount_expense -> Text,
        id_event -> BigInt,
        date_expense -> Text,
    }
}

diesel::table! {
    feedback (id) {
        id -> BigInt,
        tg_id -> BigInt,
        id_performer -> BigInt,
        #[sql_name = "feedback"]
        feedback_text -> Text,
    }
}

diesel::table! {
    locations (id) {
        id -> BigInt,
        tg_id -> BigInt,
        name_location -> Text,
        category_location -> BigInt,
        description_location -> Text,
        photo_location -> Text,
        adress_location -> Text,
        area_location -> Text,
        capacity_location -> Text,
        reiting_location -> Text,
        cost_location -> Text,
        phone_location -> Text,
        profile_location -> Text,
        additional_photo_location -> Text,
    }
}

diesel::table! {
    performers (id) {
        id -> BigInt,
        tg_id -> BigInt,
        name_performer -> Text,
        category_performer -> Text,
        photo_performer -> Text,
        reiting_performer -> Text,
        cost_performer -> Text,
        phone_performer -> Text,
        profile_performer -> Text,
        description_performer -> Text,
    }
}

diesel::table! {
    tasks (id) {
        id -> BigInt,
        tg_id -> BigInt,
        title_task -> Text,
        id_event -> BigInt,
        deadline_task -> Text,
        status_task -> Text,
    }
}

diesel::table! {
    users (tg_id) {
        tg_id -> BigInt,
        user_name -> Text,
    }
}

// No joinable!() here: id_event and id_performer are soft references.
diesel::allow_tables_to_appear_in_same_query!(
    current_event,
    event,
    event_feedback,
    expenses,
    feedback,
    locations,
    performers,
    tasks,
    users,
);
