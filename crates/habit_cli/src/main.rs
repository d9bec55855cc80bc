//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `habit_core` linkage and run one store session end to end.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Set `HABIT_LOG_DIR` (absolute) to also write rolling logs; the level comes
//! from `HABIT_LOG_LEVEL` or the build default.

use habit_core::{default_log_level, init_logging, Habit, HabitService, NewHabit, Sentiment};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("HABIT_LOG_DIR") {
        let level = std::env::var("HABIT_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().as_str().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("habit_core ping={}", habit_core::ping());
    println!("habit_core version={}", habit_core::core_version());

    match run_session() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("session failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_session() -> Result<(), habit_core::HabitServiceError> {
    let mut service = HabitService::in_memory();
    let run = service.add_habit(NewHabit::new("Run", Sentiment::Positive))?;
    service.add_habit(NewHabit::new("Smoke", Sentiment::Negative))?;
    service.complete(run.id)?;

    println!("active={}", render(&service.list_active()));
    println!("completed={}", render(&service.list_completed(None)));
    println!("good={}", render(&service.good_habits()));
    println!("bad={}", render(&service.bad_habits()));
    Ok(())
}

fn render(habits: &[Habit]) -> String {
    let names = habits
        .iter()
        .map(|habit| format!("{}:{}", habit.id, habit.name))
        .collect::<Vec<_>>();
    format!("[{}]", names.join(", "))
}
