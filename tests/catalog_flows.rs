use lifestock_ledger::{
    entities::{CustomHabitDraft, CustomHabitPatch, DefinitionId, HabitCategory},
    ext::standard_habits,
    util::LifeStockLedger,
};

fn draft(name: &str) -> CustomHabitDraft {
    CustomHabitDraft {
        icon: Some("⭐".to_string()),
        medical_savings: Some(25.0),
        ..CustomHabitDraft::named(name)
    }
}

#[tokio::test]
async fn created_custom_habit_appears_after_the_builtins() {
    let ledger = LifeStockLedger::in_memory();
    let created = ledger.create_custom_habit("u1", draft("Stretching")).await.unwrap();
    assert!(created.id.as_str().starts_with("custom_"));
    assert!(created.is_custom);
    assert_eq!(created.category, HabitCategory::Custom);
    assert!(created.created_at.is_some());

    let visible = ledger.visible_habits("u1").await.unwrap();
    let builtin_count = standard_habits::STANDARD_HABITS.len();
    assert_eq!(visible.len(), builtin_count + 1);
    assert_eq!(visible[0].id.as_str(), "exercise");
    assert_eq!(visible[builtin_count].id, created.id);
}

#[tokio::test]
async fn duplicate_names_are_rejected_case_insensitively() {
    let ledger = LifeStockLedger::in_memory();
    ledger.create_custom_habit("u1", draft("Meditate")).await.unwrap();
    assert!(ledger
        .create_custom_habit("u1", draft("meditate"))
        .await
        .is_err());
    assert!(ledger
        .create_custom_habit("u1", draft("  MEDITATE "))
        .await
        .is_err());

    // Uniqueness is scoped to one user's catalog.
    assert!(ledger
        .create_custom_habit("u2", draft("meditate"))
        .await
        .is_ok());
}

#[tokio::test]
async fn name_validation_trims_and_bounds_length() {
    let ledger = LifeStockLedger::in_memory();
    assert!(ledger.create_custom_habit("u1", draft("   ")).await.is_err());
    assert!(ledger
        .create_custom_habit("u1", draft(&"x".repeat(21)))
        .await
        .is_err());

    let created = ledger
        .create_custom_habit("u1", draft("  Stretching "))
        .await
        .unwrap();
    assert_eq!(created.name, "Stretching");
}

#[tokio::test]
async fn reward_fields_are_validated_and_minutes_convert_to_days() {
    let ledger = LifeStockLedger::in_memory();
    assert!(ledger
        .create_custom_habit(
            "u1",
            CustomHabitDraft {
                medical_savings: Some(-5.0),
                ..CustomHabitDraft::named("Bad")
            },
        )
        .await
        .is_err());

    let created = ledger
        .create_custom_habit(
            "u1",
            CustomHabitDraft {
                life_minutes: Some(144.0),
                skill_assets: Some(10.0),
                ..CustomHabitDraft::named("Nap")
            },
        )
        .await
        .unwrap();
    assert!((created.rewards.life_days - 0.1).abs() < 1e-12);
    assert_eq!(created.rewards.skill_assets, 10.0);
    // Omitted fields default to zero.
    assert_eq!(created.rewards.medical_savings, 0.0);
}

#[tokio::test]
async fn update_patches_only_the_provided_fields() {
    let ledger = LifeStockLedger::in_memory();
    let created = ledger.create_custom_habit("u1", draft("Stretching")).await.unwrap();

    let updated = ledger
        .update_custom_habit(
            "u1",
            &created.id,
            CustomHabitPatch {
                medical_savings: Some(40.0),
                life_minutes: Some(144.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Stretching");
    assert_eq!(updated.icon, "⭐");
    assert_eq!(updated.rewards.medical_savings, 40.0);
    assert!((updated.rewards.life_days - 0.1).abs() < 1e-12);

    let resolved = ledger
        .resolve_definition("u1", &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.rewards.medical_savings, 40.0);
}

#[tokio::test]
async fn rename_checks_uniqueness_but_allows_keeping_the_same_name() {
    let ledger = LifeStockLedger::in_memory();
    ledger.create_custom_habit("u1", draft("Meditate")).await.unwrap();
    let other = ledger.create_custom_habit("u1", draft("Stretching")).await.unwrap();

    let rename_to_taken = ledger
        .update_custom_habit(
            "u1",
            &other.id,
            CustomHabitPatch {
                name: Some("MEDITATE".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(rename_to_taken.is_err());

    let keep_own_name = ledger
        .update_custom_habit(
            "u1",
            &other.id,
            CustomHabitPatch {
                name: Some("stretching".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(keep_own_name.name, "stretching");
}

#[tokio::test]
async fn builtin_definitions_cannot_be_updated_or_deleted() {
    let ledger = LifeStockLedger::in_memory();
    let exercise: DefinitionId = "exercise".into();
    assert!(ledger
        .update_custom_habit(
            "u1",
            &exercise,
            CustomHabitPatch {
                medical_savings: Some(1000.0),
                ..Default::default()
            },
        )
        .await
        .is_err());
    assert!(ledger.delete_custom_habit("u1", &exercise).await.is_err());
}

#[tokio::test]
async fn delete_removes_the_definition_and_a_second_delete_fails() {
    let ledger = LifeStockLedger::in_memory();
    let created = ledger.create_custom_habit("u1", draft("Stretching")).await.unwrap();
    ledger.delete_custom_habit("u1", &created.id).await.unwrap();

    assert!(ledger
        .resolve_definition("u1", &created.id)
        .await
        .unwrap()
        .is_none());
    let visible = ledger.visible_habits("u1").await.unwrap();
    assert_eq!(visible.len(), standard_habits::STANDARD_HABITS.len());
    assert!(ledger.delete_custom_habit("u1", &created.id).await.is_err());
}

#[tokio::test]
async fn custom_definitions_are_scoped_to_their_owner() {
    let ledger = LifeStockLedger::in_memory();
    let created = ledger.create_custom_habit("u1", draft("Stretching")).await.unwrap();

    assert!(ledger
        .resolve_definition("u2", &created.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        ledger.visible_habits("u2").await.unwrap().len(),
        standard_habits::STANDARD_HABITS.len()
    );
}

#[tokio::test]
async fn disabling_a_builtin_hides_it_until_reenabled() {
    let ledger = LifeStockLedger::in_memory();
    let exercise: DefinitionId = "exercise".into();

    ledger.disable_habit("u1", &exercise).await.unwrap();
    assert!(ledger.is_habit_disabled("u1", &exercise).await.unwrap());
    let visible = ledger.visible_habits("u1").await.unwrap();
    assert_eq!(visible.len(), standard_habits::STANDARD_HABITS.len() - 1);
    assert!(visible.iter().all(|definition| definition.id != exercise));

    // Toggles are idempotent.
    ledger.disable_habit("u1", &exercise).await.unwrap();
    assert_eq!(
        ledger.visible_habits("u1").await.unwrap().len(),
        standard_habits::STANDARD_HABITS.len() - 1
    );

    ledger.enable_habit("u1", &exercise).await.unwrap();
    ledger.enable_habit("u1", &exercise).await.unwrap();
    assert!(!ledger.is_habit_disabled("u1", &exercise).await.unwrap());
    assert_eq!(
        ledger.visible_habits("u1").await.unwrap().len(),
        standard_habits::STANDARD_HABITS.len()
    );

    // Preferences are per user.
    ledger.disable_habit("u1", &exercise).await.unwrap();
    assert!(!ledger.is_habit_disabled("u2", &exercise).await.unwrap());
}

#[tokio::test]
async fn resolve_finds_builtins_for_any_user() {
    let ledger = LifeStockLedger::in_memory();
    let resolved = ledger
        .resolve_definition("anyone", &"sleep8h".into())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.name, "8h sleep");
    assert!(!resolved.is_custom);
}

#[tokio::test]
async fn blank_user_id_is_rejected_across_catalog_operations() {
    let ledger = LifeStockLedger::in_memory();
    assert!(ledger.visible_habits("").await.is_err());
    assert!(ledger
        .create_custom_habit(" ", draft("Stretching"))
        .await
        .is_err());
}
