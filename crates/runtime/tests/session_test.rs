use std::sync::Arc;

use game_core::{
    CastError, Character, Equipment, EquipmentSlot, EquipmentType, ErrorSeverity, ExpCurve,
    GameConfig, Magic, MagicId, PrincipleType, ResourceMeter, StateError,
};
use runtime::{
    Command, CommandOutcome, Event, GameSession, MagicEvent, ProgressionEvent, RuntimeConfig,
    RuntimeError, SessionEvent, SessionSnapshot, Topic, VitalsEvent,
};
use tokio::sync::broadcast::error::TryRecvError;

fn fireball() -> Magic {
    Magic::builder("fireball", "Fireball")
        .principle(PrincipleType::ThermalControl)
        .base_damage(20.0)
        .base_mp_cost(10)
        .build()
}

fn new_session() -> GameSession {
    let mut session = GameSession::new(&RuntimeConfig::default());
    session.learn_magic(fireball());
    session
}

fn session_with_mp(mp: u32) -> GameSession {
    let mut character = Character::new_game();
    character.mp.current = mp;
    character.learn_magic(fireball());
    GameSession::with_character(character, &RuntimeConfig::default())
}

fn drain(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            Err(TryRecvError::Lagged(_)) => continue,
        }
    }
    events
}

#[test]
fn experience_can_pay_for_several_levels() {
    let mut session = new_session();
    let mut progression = session.subscribe(Topic::Progression);

    let report = session.add_experience(250);

    let hero = session.character();
    assert_eq!(report.from_level, 1);
    assert_eq!(report.to_level, 3);
    assert_eq!(hero.level, 3);
    assert_eq!(hero.exp, 30);
    assert_eq!(hero.hp.maximum, 120);
    assert_eq!(hero.mp.maximum, 110);
    // level-ups do not refill
    assert_eq!(hero.hp.current, 100);
    assert_eq!(hero.mp.current, 100);

    let events = drain(&mut progression);
    assert_eq!(
        events,
        vec![
            Event::Progression(ProgressionEvent::ExperienceGained {
                amount: 250,
                exp: 30,
                required_exp: 144,
            }),
            Event::Progression(ProgressionEvent::LevelUp { level: 2 }),
            Event::Progression(ProgressionEvent::LevelUp { level: 3 }),
        ]
    );
}

#[test]
fn custom_curve_drives_leveling() {
    let config =
        RuntimeConfig::default().with_game_config(GameConfig::with_exp_curve(ExpCurve::constant(10)));
    let mut session = GameSession::new(&config);

    session.add_experience(35);

    assert_eq!(session.character().level, 4);
    assert_eq!(session.character().exp, 5);
    assert_eq!(session.required_exp(), 10);
}

#[test]
fn cast_spends_mp_and_grows_proficiency() {
    let mut session = new_session();
    let mut magic = session.subscribe(Topic::Magic);

    let outcome = session.use_magic(&MagicId::from("fireball")).unwrap();

    assert_eq!(outcome.mp_spent, 10);
    assert_eq!(outcome.damage, 20.0);
    // 10 × (1 + 0.1 × level 1)
    assert_eq!(outcome.proficiency.gained, 11);
    assert_eq!(session.character().mp.current, 90);

    let spell = session.character().find_magic(&MagicId::from("fireball")).unwrap();
    assert_eq!(spell.proficiency.exp, 11);

    assert!(matches!(
        drain(&mut magic).as_slice(),
        [Event::Magic(MagicEvent::Cast(_))]
    ));
}

#[test]
fn failed_cast_changes_nothing() {
    let mut session = session_with_mp(5);
    let before = session.character().clone();

    let err = session
        .use_magic(&MagicId::from("fireball"))
        .unwrap_err();

    assert!(matches!(
        err,
        RuntimeError::Cast(CastError::InsufficientMp { .. })
    ));
    assert_eq!(session.character(), &before);

    let err = session.use_magic(&MagicId::from("frostbite")).unwrap_err();
    assert!(matches!(err, RuntimeError::Cast(CastError::UnknownMagic(_))));
    assert_eq!(session.character(), &before);
}

#[test]
fn proficiency_levels_up_after_enough_casts() {
    let mut session = new_session();
    let mut magic = session.subscribe(Topic::Magic);
    let id = MagicId::from("fireball");

    for _ in 0..10 {
        session.use_magic(&id).unwrap();
    }

    let proficiency = &session.character().find_magic(&id).unwrap().proficiency;
    assert_eq!(proficiency.level, 1);
    assert_eq!(proficiency.exp, 10);
    assert_eq!(proficiency.next_exp, 120);
    assert_eq!(session.character().mp.current, 0);

    let level_ups = drain(&mut magic)
        .into_iter()
        .filter(|e| matches!(e, Event::Magic(MagicEvent::ProficiencyLevelUp { .. })))
        .count();
    assert_eq!(level_ups, 1);
}

#[test]
fn equipment_mitigates_damage() {
    let mut session = new_session();
    let robe = Arc::new(
        Equipment::builder("warded_robe", "Warded Robe", EquipmentType::Robe)
            .damage_reduction(0.3)
            .build(),
    );
    session.equip(robe);

    let outcome = session.take_damage(100);

    assert_eq!(outcome.effective, 70);
    assert_eq!(session.character().hp.current, 30);

    let status = session.status();
    assert!(status.in_danger());
    assert!(status.is_low_hp(0.3));
    assert!(!status.is_low_hp(0.2));
}

#[test]
fn damage_never_takes_hp_below_zero() {
    let mut session = new_session();
    let outcome = session.take_damage(1_000);
    assert!(outcome.is_fatal());
    assert_eq!(session.character().hp.current, 0);
    assert!(!session.character().is_alive());
}

#[test]
fn principle_bonus_raises_cast_damage() {
    let mut session = new_session();
    session.equip(Arc::new(
        Equipment::builder("ember_staff", "Ember Staff", EquipmentType::Staff)
            .principle_bonus(PrincipleType::ThermalControl, 0.5)
            .range_bonus(0.1)
            .build(),
    ));

    let outcome = session.use_magic(&MagicId::from("fireball")).unwrap();

    assert_eq!(outcome.damage, 30.0);
    assert_eq!(outcome.range, 11.0);
}

#[test]
fn paused_tick_does_not_regenerate() {
    let mut session = session_with_mp(50);
    session.set_paused(true);

    assert_eq!(session.tick(10.0), 0);
    assert_eq!(session.character().mp.current, 50);

    session.set_paused(false);
    assert_eq!(session.tick(2.0), 2);
    assert_eq!(session.character().mp.current, 52);
}

#[test]
fn frame_sized_ticks_truncate_to_nothing() {
    let mut session = session_with_mp(50);
    for _ in 0..60 {
        session.tick(1.0 / 60.0);
    }
    assert_eq!(session.character().mp.current, 50);
}

#[test]
fn negative_dt_regenerates_nothing() {
    let mut session = session_with_mp(50);
    assert_eq!(session.tick(-5.0), 0);
    assert_eq!(session.character().mp.current, 50);
}

#[test]
fn paused_dispatch_is_rejected() {
    let mut session = new_session();
    session.dispatch(Command::TogglePause).unwrap();
    let before = session.character().clone();

    let result = session.dispatch(Command::AddExperience(500));
    assert!(matches!(result, Err(RuntimeError::Paused)));
    let result = session.dispatch(Command::CastMagic(MagicId::from("fireball")));
    assert!(matches!(result, Err(RuntimeError::Paused)));
    assert_eq!(session.character(), &before);

    let outcome = session.dispatch(Command::SetPaused(false)).unwrap();
    assert_eq!(outcome, CommandOutcome::Paused(false));
    assert!(session.dispatch(Command::Heal(10)).is_ok());
}

#[test]
fn dispatch_routes_gold_and_equipment() {
    let mut session = new_session();

    assert_eq!(
        session.dispatch(Command::AddGold(25)).unwrap(),
        CommandOutcome::Gold(125)
    );
    assert!(matches!(
        session.dispatch(Command::SpendGold(500)),
        Err(RuntimeError::Gold(_))
    ));
    assert_eq!(session.character().gold, 125);
    assert_eq!(
        session.dispatch(Command::SpendGold(125)).unwrap(),
        CommandOutcome::Gold(0)
    );

    let ring = Arc::new(Equipment::builder("ring", "Ring", EquipmentType::Ring).build());
    let outcome = session.dispatch(Command::Equip(ring.clone())).unwrap();
    assert_eq!(outcome, CommandOutcome::Equipment { displaced: None });

    let outcome = session
        .dispatch(Command::Unequip(EquipmentSlot::Ring))
        .unwrap();
    assert_eq!(outcome, CommandOutcome::Equipment { displaced: Some(ring) });
}

#[test]
fn grant_level_dispatch_levels_once() {
    let mut session = new_session();
    let outcome = session.dispatch(Command::GrantLevel).unwrap();

    let CommandOutcome::Experience(report) = outcome else {
        panic!("expected experience outcome, got {outcome:?}");
    };
    assert_eq!(report.levels_gained(), 1);
    assert_eq!(session.character().level, 2);
}

#[test]
fn reset_restores_new_game_character() {
    let mut session = new_session();
    let mut events = session.subscribe(Topic::Session);
    session.add_experience(1_000);
    session.take_damage(40);

    session.dispatch(Command::Reset).unwrap();

    assert_eq!(session.character(), &Character::new_game());
    assert_eq!(drain(&mut events), vec![Event::Session(SessionEvent::Reset)]);
}

#[test]
fn snapshot_round_trip_keeps_proficiency() {
    let mut session = new_session();
    let id = MagicId::from("fireball");
    for _ in 0..10 {
        session.use_magic(&id).unwrap();
    }
    session.add_gold(40);
    session.set_paused(true);

    let bytes = session.snapshot().to_bytes().unwrap();
    let snapshot = SessionSnapshot::from_bytes(&bytes).unwrap();
    let restored = GameSession::restore(snapshot, &RuntimeConfig::default()).unwrap();

    assert!(restored.is_paused());
    assert_eq!(restored.character(), session.character());
    let proficiency = &restored.character().find_magic(&id).unwrap().proficiency;
    assert_eq!(proficiency.level, 1);
    assert_eq!(proficiency.exp, 10);
}

#[test]
fn snapshot_survives_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.bin");

    let mut session = new_session();
    session.add_experience(150);
    std::fs::write(&path, session.snapshot().to_bytes().unwrap()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let restored = GameSession::restore(
        SessionSnapshot::from_bytes(&bytes).unwrap(),
        &RuntimeConfig::default(),
    )
    .unwrap();
    assert_eq!(restored.character().level, 2);
    assert_eq!(restored.character().exp, 50);
}

#[test]
fn corrupted_snapshot_is_not_restored() {
    let mut character = Character::new_game();
    character.level = 0;
    character.hp = ResourceMeter {
        current: 150,
        maximum: 100,
    };
    let snapshot = SessionSnapshot {
        character,
        paused: false,
    };

    let err = GameSession::restore(snapshot.clone(), &RuntimeConfig::default()).unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidState(StateError::ZeroLevel)));
    assert_eq!(err.severity(), ErrorSeverity::Validation);

    let bytes = bincode::serialize(&snapshot).unwrap();
    assert!(matches!(
        SessionSnapshot::from_bytes(&bytes),
        Err(RuntimeError::InvalidState(_))
    ));
}

#[test]
fn status_is_idempotent() {
    let mut session = new_session();
    session.take_damage(25);

    let first = session.status();
    let second = session.status();

    assert_eq!(first, second);
    assert_eq!(first.name, "Player");
    assert_eq!(first.hp, 75);
    assert_eq!(first.required_exp, 100);
    assert_eq!(first.gold, 100);
    assert!(!first.in_danger());
}

#[test]
fn regen_publishes_vitals() {
    let mut session = session_with_mp(10);
    let mut vitals = session.subscribe(Topic::Vitals);

    session.tick(4.0);

    assert_eq!(
        drain(&mut vitals),
        vec![Event::Vitals(VitalsEvent::MpRegenerated { amount: 4, mp: 14 })]
    );
}
