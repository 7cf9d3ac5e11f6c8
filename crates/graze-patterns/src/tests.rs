#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::core::constants::*;
    use crate::core::enums::BossPhase;
    use crate::core::types::{Arena, Vec2};
    use crate::generators::{plan_attack, AttackContext};
    use crate::movement::{pick_roam_target, roam_velocity};
    use crate::orders::{Anchor, AttackOrder, Heading, Shot, ShotBehavior};
    use crate::phase::{attack_interval_ms, evaluate, phase_for_fraction, PhaseContext};
    use crate::repertoire::{next_index, pattern_at, pattern_count, PatternId};

    fn ctx(phase: BossPhase, pattern_index: usize) -> AttackContext {
        AttackContext {
            phase,
            pattern_index,
            boss_position: Vec2::new(400.0, 150.0),
            player_position: Vec2::new(400.0, 480.0),
            arena: Arena::default(),
        }
    }

    fn spawns(orders: &[AttackOrder]) -> Vec<&crate::orders::SpawnOrder> {
        orders
            .iter()
            .filter_map(|o| match o {
                AttackOrder::Spawn(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    fn phase_ctx(health: f32, last: BossPhase) -> PhaseContext {
        PhaseContext {
            last_phase: last,
            health,
            max_health: 100.0,
            shield_remaining_ms: 0.0,
            shield_duration_ms: PHASE_SHIELD_MS,
        }
    }

    // --- Phase FSM ---

    #[test]
    fn test_phase_thresholds_are_strict() {
        assert_eq!(phase_for_fraction(0.71), BossPhase::One);
        assert_eq!(phase_for_fraction(0.70), BossPhase::Two);
        assert_eq!(phase_for_fraction(0.31), BossPhase::Two);
        assert_eq!(phase_for_fraction(0.30), BossPhase::Three);
        assert_eq!(phase_for_fraction(0.0), BossPhase::Three);
    }

    #[test]
    fn test_phase_transition_raises_shield() {
        let update = evaluate(&phase_ctx(70.0, BossPhase::One));
        assert_eq!(update.new_phase, BossPhase::Two);
        assert!(update.phase_changed);
        assert_eq!(update.shield_remaining_ms, PHASE_SHIELD_MS);
    }

    #[test]
    fn test_phase_steady_keeps_shield_timer() {
        let mut c = phase_ctx(50.0, BossPhase::Two);
        c.shield_remaining_ms = 1234.0;
        let update = evaluate(&c);
        assert!(!update.phase_changed);
        assert_eq!(update.shield_remaining_ms, 1234.0);
    }

    #[test]
    fn test_phase_two_to_three_resets_running_shield() {
        let mut c = phase_ctx(29.0, BossPhase::Two);
        c.shield_remaining_ms = 500.0;
        let update = evaluate(&c);
        assert_eq!(update.new_phase, BossPhase::Three);
        assert_eq!(update.shield_remaining_ms, PHASE_SHIELD_MS);
    }

    #[test]
    fn test_phase_upward_change_after_max_health_growth() {
        // Raising max health at the same absolute health can drop the fraction
        // back above a threshold; that still counts as a transition.
        let mut c = phase_ctx(100.0, BossPhase::Three);
        c.max_health = 150.0;
        let update = evaluate(&c);
        assert_eq!(update.new_phase, BossPhase::Two);
        assert!(update.phase_changed);
    }

    #[test]
    fn test_negative_health_reads_as_zero() {
        let update = evaluate(&phase_ctx(-10.0, BossPhase::Three));
        assert_eq!(update.new_phase, BossPhase::Three);
        assert!(!update.phase_changed);
    }

    #[test]
    fn test_attack_interval_shrinks_per_phase() {
        assert_eq!(attack_interval_ms(BossPhase::One), 2500.0);
        assert_eq!(attack_interval_ms(BossPhase::Two), 1800.0);
        assert_eq!(attack_interval_ms(BossPhase::Three), 1200.0);
    }

    // --- Repertoire ---

    #[test]
    fn test_repertoire_sizes() {
        assert_eq!(pattern_count(BossPhase::One), 2);
        assert_eq!(pattern_count(BossPhase::Two), 3);
        assert_eq!(pattern_count(BossPhase::Three), 5);
    }

    #[test]
    fn test_rotation_cycles_through_phase_three() {
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(pattern_at(BossPhase::Three, index));
            index = next_index(BossPhase::Three, index);
        }
        assert_eq!(
            seen,
            vec![
                PatternId::CrossBarrage,
                PatternId::DecoyVolley,
                PatternId::WarningBurst,
                PatternId::SpiralStorm,
                PatternId::SlowZones,
                PatternId::CrossBarrage,
            ]
        );
    }

    #[test]
    fn test_pattern_at_wraps_out_of_range_index() {
        assert_eq!(pattern_at(BossPhase::One, 3), PatternId::Ring);
    }

    // --- Generators ---

    #[test]
    fn test_aimed_fan_points_at_player() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = plan_attack(&ctx(BossPhase::One, 0), &mut rng);
        assert_eq!(plan.pattern, PatternId::AimedFan);
        assert_eq!(plan.orders.len(), 1);
        match &plan.orders[0] {
            AttackOrder::Spawn(s) => match s.shot {
                Shot::Fan {
                    base_angle,
                    count,
                    speed,
                    ..
                } => {
                    // Player straight below the boss.
                    assert!((base_angle - PI / 2.0).abs() < 1e-5);
                    assert_eq!(count, 5);
                    assert_eq!(speed, 150.0);
                }
                other => panic!("expected fan, got {other:?}"),
            },
            other => panic!("expected spawn, got {other:?}"),
        }
    }

    #[test]
    fn test_ring_waves_stagger_and_accelerate() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = plan_attack(&ctx(BossPhase::Two, 0), &mut rng);
        let s = spawns(&plan.orders);
        assert_eq!(s.len(), 3);
        let delays: Vec<f32> = s.iter().map(|o| o.delay_ms).collect();
        assert_eq!(delays, vec![0.0, 200.0, 400.0]);
        let speeds: Vec<f32> = s
            .iter()
            .map(|o| match o.shot {
                Shot::Ring { speed, .. } => speed,
                _ => 0.0,
            })
            .collect();
        assert_eq!(speeds, vec![150.0, 170.0, 190.0]);
    }

    #[test]
    fn test_delayed_burst_staggers_fuses() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let plan = plan_attack(&ctx(BossPhase::Two, 1), &mut rng);
        let fuses: Vec<f32> = spawns(&plan.orders)
            .iter()
            .map(|o| match o.shot {
                Shot::Single {
                    behavior: ShotBehavior::DelayedExplode { delay_ms },
                    heading: Heading::Fixed(angle),
                    ..
                } => {
                    assert!((angle - PI / 2.0).abs() <= 0.25 + 1e-5);
                    delay_ms
                }
                _ => panic!("expected delayed-explode shot"),
            })
            .collect();
        assert_eq!(fuses, vec![1500.0, 1700.0, 1900.0, 2100.0, 2300.0]);
    }

    #[test]
    fn test_homing_fan_rear_volley_is_delayed() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = plan_attack(&ctx(BossPhase::Two, 2), &mut rng);
        let s = spawns(&plan.orders);
        assert_eq!(s.len(), 2);
        assert!(matches!(
            s[0].shot,
            Shot::Single {
                behavior: ShotBehavior::Homing { .. },
                ..
            }
        ));
        assert_eq!(s[1].delay_ms, 300.0);
        match s[1].shot {
            Shot::Fan {
                base_angle, count, ..
            } => {
                assert!((base_angle - (PI / 2.0 + PI)).abs() < 1e-5);
                assert_eq!(count, 4);
            }
            _ => panic!("expected rear fan"),
        }
    }

    #[test]
    fn test_cross_barrage_starts_on_edges() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let arena = Arena::default();
        let plan = plan_attack(&ctx(BossPhase::Three, 0), &mut rng);
        let s = spawns(&plan.orders);
        assert_eq!(s.len(), 20);
        for order in s {
            match order.anchor {
                Anchor::At(p) => assert!(
                    p.x == 0.0 || p.x == arena.width || p.y == 0.0 || p.y == arena.height
                ),
                Anchor::Boss => panic!("cross barrage must not originate at the boss"),
            }
        }
    }

    #[test]
    fn test_decoy_volley_fakes_come_first() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = plan_attack(&ctx(BossPhase::Three, 1), &mut rng);
        let s = spawns(&plan.orders);
        let fakes = s
            .iter()
            .filter(|o| {
                matches!(
                    o.shot,
                    Shot::Single {
                        behavior: ShotBehavior::Fake,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(fakes, 8);
        assert!(s.iter().filter(|o| o.delay_ms == 500.0).count() == 6);
    }

    #[test]
    fn test_warning_burst_targets_captured_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let c = ctx(BossPhase::Three, 2);
        let plan = plan_attack(&c, &mut rng);
        assert!(matches!(
            plan.orders[0],
            AttackOrder::Warning { center, duration_ms, .. }
                if center == c.player_position && duration_ms == WARNING_DURATION_MS
        ));
        let s = spawns(&plan.orders);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].anchor, Anchor::At(c.player_position));
        assert_eq!(s[0].delay_ms, WARNING_DURATION_MS);
    }

    #[test]
    fn test_spiral_storm_uses_spiral_headings() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plan = plan_attack(&ctx(BossPhase::Three, 3), &mut rng);
        let s = spawns(&plan.orders);
        assert_eq!(s.len(), 16);
        assert_eq!(s[15].delay_ms, 750.0);
        assert!(s
            .iter()
            .all(|o| matches!(o.shot, Shot::Single { heading: Heading::Spiral(_), .. })));
    }

    #[test]
    fn test_slow_zones_stay_inside_inset() {
        let arena = Arena::default();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut c = ctx(BossPhase::Three, 4);
            // Player hugging a corner forces clamping.
            c.player_position = Vec2::new(5.0, 595.0);
            let plan = plan_attack(&c, &mut rng);
            assert!((1..=2).contains(&plan.orders.len()));
            for order in &plan.orders {
                match *order {
                    AttackOrder::SlowZone { center, radius } => {
                        assert!(center.x >= SLOW_ZONE_EDGE_INSET);
                        assert!(center.x <= arena.width - SLOW_ZONE_EDGE_INSET);
                        assert!(center.y >= SLOW_ZONE_EDGE_INSET);
                        assert!(center.y <= arena.height - SLOW_ZONE_EDGE_INSET);
                        assert!((70.0..=100.0).contains(&radius));
                    }
                    _ => panic!("slow zone pattern emits only zones"),
                }
            }
        }
    }

    #[test]
    fn test_slow_zones_in_undersized_arena_sit_at_centre() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut c = ctx(BossPhase::Three, 4);
        c.arena = Arena::new(40.0, 120.0);
        c.boss_position = Vec2::new(20.0, 30.0);
        c.player_position = Vec2::new(20.0, 100.0);
        let plan = plan_attack(&c, &mut rng);
        for order in &plan.orders {
            match *order {
                AttackOrder::SlowZone { center, .. } => {
                    assert_eq!(center, Vec2::new(20.0, 60.0));
                }
                _ => panic!("slow zone pattern emits only zones"),
            }
        }
    }

    #[test]
    fn test_generators_deterministic_for_seed() {
        for index in 0..5 {
            let mut a = ChaCha8Rng::seed_from_u64(77);
            let mut b = ChaCha8Rng::seed_from_u64(77);
            let c = ctx(BossPhase::Three, index);
            assert_eq!(plan_attack(&c, &mut a), plan_attack(&c, &mut b));
        }
    }

    // --- Movement ---

    #[test]
    fn test_roam_target_in_box() {
        let arena = Arena::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let t = pick_roam_target(arena, &mut rng);
            assert!((300.0..=500.0).contains(&t.x));
            assert!((150.0..=250.0).contains(&t.y));
        }
    }

    #[test]
    fn test_roam_velocity_proportional() {
        let v = roam_velocity(Vec2::new(400.0, 150.0), Vec2::new(500.0, 150.0), 30.0);
        assert!((v.x - 30.0).abs() < 1e-4);
        assert_eq!(v.y, 0.0);
        assert_eq!(roam_velocity(Vec2::ONE, Vec2::ONE, 30.0), Vec2::ZERO);
    }
}
