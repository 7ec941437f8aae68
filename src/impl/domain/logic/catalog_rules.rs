use std::collections::HashSet;

use fractic_server_error::ServerError;
use tracing::warn;

use crate::{
    entities::{DefinitionId, HabitDefinition, ValueVector},
    errors::{DuplicateHabitName, InvalidHabitName, InvalidRewardField},
};

pub(crate) const MAX_NAME_CHARS: usize = 20;

/// Life impact is authored in minutes in user-facing forms and stored in
/// days.
pub(crate) const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Validates and normalizes a custom habit name against the user's existing
/// custom definitions. `exclude` skips the record being updated so a rename
/// to the same name is not flagged as a duplicate.
pub(crate) fn validate_name(
    name: &str,
    existing: &[HabitDefinition],
    exclude: Option<&DefinitionId>,
) -> Result<String, ServerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InvalidHabitName::new("name must be non-empty"));
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(InvalidHabitName::new("name must be at most 20 characters"));
    }
    let lowered = trimmed.to_lowercase();
    let duplicate = existing.iter().any(|definition| {
        Some(&definition.id) != exclude && definition.name.to_lowercase() == lowered
    });
    if duplicate {
        return Err(DuplicateHabitName::new(trimmed));
    }
    Ok(trimmed.to_string())
}

/// A reward field left out of the form defaults to zero; a provided value
/// must be finite and non-negative.
pub(crate) fn validate_reward(field: &str, value: Option<f64>) -> Result<f64, ServerError> {
    match value {
        None => Ok(0.0),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(InvalidRewardField::new(field, v)),
    }
}

pub(crate) fn rewards_from_form(
    life_minutes: Option<f64>,
    medical_savings: Option<f64>,
    skill_assets: Option<f64>,
    focus_hours: Option<f64>,
) -> Result<ValueVector, ServerError> {
    Ok(ValueVector {
        life_days: validate_reward("lifeMinutes", life_minutes)? / MINUTES_PER_DAY,
        medical_savings: validate_reward("medicalSavings", medical_savings)?,
        skill_assets: validate_reward("skillAssets", skill_assets)?,
        focus_hours: validate_reward("focusHours", focus_hours)?,
    })
}

/// Built-ins in declared order minus the user's disabled set, then the
/// user's custom definitions in insertion order.
pub(crate) fn visible_catalog(
    builtins: &[HabitDefinition],
    customs: &[HabitDefinition],
    disabled: &HashSet<DefinitionId>,
) -> Vec<HabitDefinition> {
    builtins
        .iter()
        .filter(|definition| !disabled.contains(&definition.id))
        .chain(customs.iter())
        .cloned()
        .collect()
}

pub(crate) fn resolve<'a>(
    builtins: &'a [HabitDefinition],
    customs: &'a [HabitDefinition],
    id: &DefinitionId,
) -> Option<&'a HabitDefinition> {
    builtins
        .iter()
        .find(|definition| &definition.id == id)
        .or_else(|| customs.iter().find(|definition| &definition.id == id))
}

/// Value vector snapshotted onto a new event. An unresolvable definition
/// degrades to a zero vector with the raw id preserved on the event, so
/// history is recorded rather than silently dropped.
pub(crate) fn snapshot_value(
    definition: Option<&HabitDefinition>,
    definition_id: &DefinitionId,
    duration: f64,
) -> ValueVector {
    match definition {
        Some(definition) => definition.rewards.scaled(duration),
        None => {
            warn!(
                definition = %definition_id,
                "unresolved habit definition; recording zero-value event"
            );
            ValueVector::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::HabitCategory;

    fn custom(id: &str, name: &str) -> HabitDefinition {
        HabitDefinition {
            id: id.into(),
            name: name.to_string(),
            icon: String::new(),
            category: HabitCategory::Custom,
            rewards: ValueVector::default(),
            description: None,
            detail: None,
            is_custom: true,
            created_at: None,
        }
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Meditate ", &[], None).unwrap(), "Meditate");
    }

    #[test]
    fn empty_name_rejected() {
        assert!(validate_name("   ", &[], None).is_err());
    }

    #[test]
    fn name_longer_than_twenty_display_chars_rejected() {
        // Multi-byte characters count as one display character each.
        let ok = "あ".repeat(20);
        let too_long = "あ".repeat(21);
        assert!(validate_name(&ok, &[], None).is_ok());
        assert!(validate_name(&too_long, &[], None).is_err());
    }

    #[test]
    fn duplicate_name_is_case_insensitive() {
        let existing = vec![custom("custom_1", "Meditate")];
        assert!(validate_name("meditate", &existing, None).is_err());
    }

    #[test]
    fn uniqueness_check_excludes_record_under_update() {
        let existing = vec![custom("custom_1", "Meditate")];
        let id: DefinitionId = "custom_1".into();
        assert!(validate_name("MEDITATE", &existing, Some(&id)).is_ok());
    }

    #[test]
    fn life_minutes_convert_to_days() {
        let rewards = rewards_from_form(Some(144.0), None, None, None).unwrap();
        assert!((rewards.life_days - 0.1).abs() < 1e-12);
    }

    #[test]
    fn negative_and_non_finite_rewards_rejected() {
        assert!(rewards_from_form(None, Some(-1.0), None, None).is_err());
        assert!(rewards_from_form(None, None, Some(f64::NAN), None).is_err());
        assert!(rewards_from_form(None, None, None, Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn unresolved_definition_snapshots_zero() {
        let id: DefinitionId = "vanished".into();
        assert_eq!(snapshot_value(None, &id, 2.0), ValueVector::default());
    }
}
