use habit_core::{HabitService, HabitValidationError, NewHabit, Sentiment};

#[test]
fn new_habit_validate_rejects_blank_and_whitespace_names() {
    for name in ["", "   ", "\t\n"] {
        let err = NewHabit::new(name, Sentiment::Positive)
            .validate()
            .unwrap_err();
        assert_eq!(err, HabitValidationError::BlankName, "name={name:?}");
    }
}

#[test]
fn new_habit_validate_requires_sentiment() {
    let input = NewHabit {
        name: "Run".to_string(),
        sentiment: None,
        due_timestamp: None,
    };
    assert_eq!(
        input.validate().unwrap_err(),
        HabitValidationError::MissingSentiment
    );
}

#[test]
fn sentiment_labels_match_card_text() {
    assert_eq!(Sentiment::Positive.label(), "Good habit");
    assert_eq!(Sentiment::Negative.label(), "Bad habit");
    assert_eq!(Sentiment::Neutral.label(), "Habit");
}

#[test]
fn sentiment_parse_is_case_insensitive() {
    assert_eq!(Sentiment::parse(" POSITIVE "), Some(Sentiment::Positive));
    assert_eq!(Sentiment::parse("negative"), Some(Sentiment::Negative));
    assert_eq!(Sentiment::parse("Neutral"), Some(Sentiment::Neutral));
    assert_eq!(Sentiment::parse("good"), None);
}

#[test]
fn habit_serialization_uses_expected_wire_fields() {
    let mut service = HabitService::in_memory();
    let habit = service
        .add_habit(NewHabit::new("Smoke", Sentiment::Negative).due_at(1_792_352_340_000))
        .unwrap();

    let json = serde_json::to_value(&habit).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Smoke");
    assert_eq!(json["notes"], "");
    assert_eq!(json["due_timestamp"], 1_792_352_340_000_i64);
    assert_eq!(json["sentiment"], "negative");
}
