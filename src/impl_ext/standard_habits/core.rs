use std::sync::LazyLock;

use crate::entities::{HabitCategory, HabitDefinition, ValueVector};

fn builtin(
    id: &str,
    name: &str,
    icon: &str,
    category: HabitCategory,
    rewards: ValueVector,
    description: &str,
) -> HabitDefinition {
    HabitDefinition {
        id: id.into(),
        name: name.to_string(),
        icon: icon.to_string(),
        category,
        rewards,
        description: Some(description.to_string()),
        detail: None,
        is_custom: false,
        created_at: None,
    }
}

/// Built-in catalog entries, in declared display order. Immutable; users
/// hide individual entries through the preference store rather than
/// deleting them.
pub static STANDARD_HABITS: LazyLock<Vec<HabitDefinition>> = LazyLock::new(|| {
    vec![
        builtin(
            "exercise",
            "Exercise",
            "🏃‍♂️",
            HabitCategory::Health,
            ValueVector::new(0.02, 60.0, 0.0, 0.5),
            "30 minutes of exercise",
        ),
        builtin(
            "floss",
            "Floss",
            "🦷",
            HabitCategory::Health,
            ValueVector::new(0.01, 12.0, 0.0, 0.0),
            "Interdental care",
        ),
        builtin(
            "study",
            "Study",
            "📚",
            HabitCategory::Learning,
            ValueVector::new(0.0, 0.0, 84.0, 1.0),
            "One hour of study",
        ),
        builtin(
            "noAlcohol",
            "No alcohol",
            "🚫🍺",
            HabitCategory::Health,
            ValueVector::new(0.015, 40.0, 0.0, 0.0),
            "No alcohol today",
        ),
        builtin(
            "limitPhone",
            "Limit phone",
            "📱",
            HabitCategory::Focus,
            ValueVector::new(0.0, 0.0, 25.0, 0.5),
            "Limited screen time",
        ),
        builtin(
            "sleep8h",
            "8h sleep",
            "😴",
            HabitCategory::Health,
            ValueVector::new(0.03, 80.0, 0.0, 2.0),
            "Eight hours of quality sleep",
        ),
        builtin(
            "meditation",
            "Meditation",
            "🧘‍♂️",
            HabitCategory::Mental,
            ValueVector::new(0.01, 30.0, 0.0, 1.0),
            "10-20 minutes of meditation",
        ),
        builtin(
            "reading",
            "Reading",
            "📖",
            HabitCategory::Learning,
            ValueVector::new(0.0, 0.0, 50.0, 1.0),
            "30 or more minutes of reading",
        ),
        builtin(
            "walk",
            "Walk",
            "🚶‍♂️",
            HabitCategory::Health,
            ValueVector::new(0.01, 30.0, 0.0, 0.3),
            "A 30-minute walk",
        ),
        builtin(
            "hydration",
            "Hydration",
            "💧",
            HabitCategory::Health,
            ValueVector::new(0.005, 10.0, 0.0, 0.0),
            "Proper hydration (2L or more)",
        ),
    ]
});

pub fn all() -> Vec<HabitDefinition> {
    STANDARD_HABITS.clone()
}
