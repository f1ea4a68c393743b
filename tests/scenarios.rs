// Integration tests (native) for the `valentine-card` crate.
// These walk the card through full interaction scenarios using only the pure
// state / placement / markup layers, so they run under `cargo test` on the host.

use std::cell::RefCell;

use valentine_card::card::celebration::Celebration;
use valentine_card::card::evasion::{ButtonPlacement, ContainerSize};
use valentine_card::card::markup::card_body;
use valentine_card::card::phrases::{PHRASES, phrase_for};
use valentine_card::card::state::{CardState, Phase};
use valentine_card::config::CardConfig;
use valentine_card::effects::{BurstConfig, ParticleEffects};
use valentine_card::rng::{BrowserRng, SequenceRng};

fn card_size() -> Option<ContainerSize> {
    ContainerSize::measured(448.0, 400.0)
}

#[test]
fn fresh_load_shows_question_with_no() {
    let st = CardState::new();
    assert_eq!(st.phase(), Phase::Question);
    assert_eq!(st.evasion_count(), 0);
    assert_eq!(phrase_for(PHRASES, st.evasion_count()), "No");
}

#[test]
fn one_evasion_moves_button_and_changes_phrase() {
    let cfg = CardConfig::default();
    let mut st = CardState::new();
    let mut rng = SequenceRng::new(vec![0.3, 0.6]);
    let placement = st.evade(card_size(), cfg.evasion_box(), &mut rng).expect("measured");
    assert_eq!(st.evasion_count(), 1);
    assert_eq!(phrase_for(&cfg.phrases, st.evasion_count()), "Are you sure?");
    let ButtonPlacement::Absolute { left, top } = placement else {
        panic!("button should be absolutely placed after evading");
    };
    assert!(left >= 20.0 && left + 100.0 <= 448.0 - 20.0);
    assert!(top >= 20.0 && top + 50.0 <= 400.0 - 20.0);
}

#[test]
fn twenty_evasions_land_on_last_phrase() {
    let cfg = CardConfig::default();
    let mut st = CardState::new();
    let mut rng = BrowserRng;
    for _ in 0..20 {
        st.evade(card_size(), cfg.evasion_box(), &mut rng);
    }
    assert_eq!(st.evasion_count(), 20);
    assert_eq!(phrase_for(&cfg.phrases, st.evasion_count()), "You're breaking my heart ;(");
}

#[test]
fn random_placements_never_leave_the_card() {
    let cfg = CardConfig::default();
    let geom = cfg.evasion_box();
    let mut st = CardState::new();
    let mut rng = BrowserRng;
    for (w, h) in [(448.0, 400.0), (300.0, 200.0), (1200.0, 900.0)] {
        let size = ContainerSize::measured(w, h);
        for _ in 0..500 {
            if let Some(ButtonPlacement::Absolute { left, top }) = st.evade(size, geom, &mut rng) {
                assert!(left >= geom.margin && left + geom.button_width <= w - geom.margin);
                assert!(top >= geom.margin && top + geom.button_height <= h - geom.margin);
            } else {
                panic!("expected a placement for a measured card");
            }
        }
    }
}

#[derive(Default)]
struct CountingEffects(RefCell<Vec<BurstConfig>>);

impl ParticleEffects for CountingEffects {
    fn burst(&self, config: &BurstConfig) {
        self.0.borrow_mut().push(config.clone());
    }
}

#[test]
fn accepting_starts_celebration_and_hides_no() {
    let cfg = CardConfig::default();
    let mut st = CardState::new();
    assert!(st.accept());
    assert_eq!(st.phase(), Phase::Accepted);
    assert!(!card_body(&st, &cfg.phrases).contains("data-action='evade'"));

    let fx = CountingEffects::default();
    let c = Celebration::starting_at(0.0, cfg.celebration_ms);
    let mut now = 0.0;
    let mut frames = 0;
    while c.tick(&fx, now) {
        frames += 1;
        now += 16.0;
    }
    assert!(frames > 100);
    assert_eq!(fx.0.borrow().len(), (frames + 1) * 2);

    // already accepted: no second celebration
    assert!(!st.accept());
}

#[test]
fn replay_returns_to_pristine_question() {
    let cfg = CardConfig::default();
    let mut st = CardState::new();
    let mut rng = SequenceRng::new(vec![0.8, 0.2]);
    for _ in 0..4 {
        st.evade(card_size(), cfg.evasion_box(), &mut rng);
    }
    st.accept();
    st.replay();
    assert_eq!(st.phase(), Phase::Question);
    assert_eq!(st.evasion_count(), 0);
    assert_eq!(st.placement(), ButtonPlacement::Static);
    let html = card_body(&st, &cfg.phrases);
    assert!(html.contains(">No</button>"));
    assert!(html.contains("position:static;"));
}

#[test]
fn unmeasured_card_ignores_pointer() {
    let cfg = CardConfig::default();
    let mut st = CardState::new();
    let mut rng = SequenceRng::new(vec![0.5]);
    assert!(st.evade(ContainerSize::measured(0.0, 0.0), cfg.evasion_box(), &mut rng).is_none());
    assert_eq!(st.evasion_count(), 0);
    assert_eq!(st.placement(), ButtonPlacement::Static);
}

#[test]
fn custom_phrases_from_config() {
    let cfg = CardConfig::from_json(r#"{"phrases": ["Nah", "Sure?", "Pretty please"]}"#).unwrap();
    let mut st = CardState::new();
    let mut rng = SequenceRng::new(vec![0.5]);
    for _ in 0..10 {
        st.evade(card_size(), cfg.evasion_box(), &mut rng);
    }
    assert!(card_body(&st, &cfg.phrases).contains(">Pretty please</button>"));
}
