use pop_my_balloons::compute::init_state;
use pop_my_balloons::config::{ArrowConfig, BalloonConfig, Rules, SpawnConfig};
use pop_my_balloons::entities::*;
use pop_my_balloons::geometry::Rect;
use pop_my_balloons::spawn::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// ── spawn_delay_ms ────────────────────────────────────────────────────────────

#[test]
fn first_arming_uses_initial_scale() {
    let cfg = SpawnConfig::default();
    assert_eq!(first_balloon_at(&cfg), 900);
    assert_eq!(spawn_delay_ms(&cfg, 999, cfg.initial_scale), 900); // floor
    assert_eq!(spawn_delay_ms(&cfg, 1_000, cfg.initial_scale), 899);
}

#[test]
fn delay_shrinks_with_elapsed_time() {
    let cfg = SpawnConfig::default();
    assert_eq!(spawn_delay_ms(&cfg, 5_000, cfg.ramp_scale), 850);
    assert_eq!(spawn_delay_ms(&cfg, 60_000, cfg.ramp_scale), 300);

    let mut last = u64::MAX;
    for t in (0..120_000).step_by(250) {
        let d = spawn_delay_ms(&cfg, t, cfg.ramp_scale);
        assert!(d <= last);
        last = d;
    }
}

#[test]
fn delay_floors_at_minimum() {
    let cfg = SpawnConfig::default();
    assert_eq!(cfg.min_delay_ms, 1);
    assert_eq!(spawn_delay_ms(&cfg, 80_000, cfg.ramp_scale), 100);
    assert_eq!(spawn_delay_ms(&cfg, 85_000, cfg.ramp_scale), 50);
    assert_eq!(spawn_delay_ms(&cfg, 89_000, cfg.ramp_scale), 10);
    assert_eq!(spawn_delay_ms(&cfg, 90_000, cfg.ramp_scale), 1); // would be 0
    assert_eq!(spawn_delay_ms(&cfg, 500_000, cfg.ramp_scale), 1); // would be negative
}

#[test]
fn custom_minimum_only_applies_below_it() {
    let cfg = SpawnConfig { min_delay_ms: 100, ..SpawnConfig::default() };
    assert_eq!(spawn_delay_ms(&cfg, 70_000, cfg.ramp_scale), 200);
    assert_eq!(spawn_delay_ms(&cfg, 85_000, cfg.ramp_scale), 100);
}

// ── balloons ──────────────────────────────────────────────────────────────────

#[test]
fn new_balloon_enters_from_the_right() {
    let cfg = BalloonConfig::default();
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let b = new_balloon(&cfg, &mut rng);
        assert!((800..=1000).contains(&b.rect.x));
        assert_eq!(b.rect.y, 10);
        assert_eq!((b.rect.width, b.rect.height), (50, 64));
        assert_eq!(b.heading, Heading::Left);
        assert_eq!(b.speed, 4);
        assert!(!b.active);
    }
}

#[test]
fn balloon_due_when_clock_reaches_deadline() {
    let mut s = init_state(Rules::default());
    s.elapsed_ms = 899;
    assert!(!balloon_due(&s));
    s.elapsed_ms = 900;
    assert!(balloon_due(&s));
}

#[test]
fn spawn_balloon_rearms_from_current_clock() {
    let mut s = init_state(Rules::default());
    s.elapsed_ms = 30_000;
    let s2 = spawn_balloon(&s, &mut seeded_rng());
    assert_eq!(s2.balloons.len(), 1);
    assert_eq!(s2.next_balloon_ms, 30_000 + 600);
    assert!(s.balloons.is_empty());
}

// ── arrows ────────────────────────────────────────────────────────────────────

#[test]
fn fire_places_arrow_at_player_top_centre() {
    let s = init_state(Rules::default());
    let s2 = fire_arrow(&s);
    assert_eq!(s2.arrows.len(), 1);
    assert_eq!(s2.arrows[0].rect.mid_top(), s.player.rect.mid_top());
    assert_eq!(s2.arrows[0].speed, 5);
}

#[test]
fn fourth_arrow_is_refused() {
    let mut s = init_state(Rules::default());
    for _ in 0..3 {
        s = fire_arrow(&s);
    }
    assert_eq!(s.arrows.len(), 3);
    let s2 = fire_arrow(&s);
    assert_eq!(s2.arrows.len(), 3);
}

#[test]
fn cap_is_configurable() {
    let rules = Rules {
        arrow: ArrowConfig { max_on_screen: 1, ..ArrowConfig::default() },
        ..Rules::default()
    };
    let mut s = init_state(rules);
    s.arrows.push(Arrow { rect: Rect::new(0, 0, 8, 40), speed: 5 });
    assert_eq!(fire_arrow(&s).arrows.len(), 1);
}
