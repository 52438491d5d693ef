//! Unit tests for epi-agent.

#[cfg(test)]
mod schedule {
    use epi_core::SimRng;

    use crate::{MAX_SCHEDULED_ATTEMPTS, TransmissionSchedule};

    #[test]
    fn huge_counts_are_capped() {
        let mut rng = SimRng::new(4);
        let s = TransmissionSchedule::draw(u32::MAX, 7, &mut rng);
        assert_eq!(s.len(), MAX_SCHEDULED_ATTEMPTS as usize);
    }

    #[test]
    fn offsets_within_infectious_window() {
        let mut rng = SimRng::new(1);
        for _ in 0..200 {
            let s = TransmissionSchedule::draw(5, 7, &mut rng);
            assert_eq!(s.len(), 5);
            assert!(s.offsets().iter().all(|&d| (1..=6).contains(&d)), "{s:?}");
        }
    }

    #[test]
    fn offsets_sorted() {
        let mut rng = SimRng::new(2);
        let s = TransmissionSchedule::draw(20, 10, &mut rng);
        assert!(s.offsets().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn short_illness_has_no_window() {
        let mut rng = SimRng::new(3);
        assert!(TransmissionSchedule::draw(4, 1, &mut rng).is_empty());
        assert!(TransmissionSchedule::draw(4, 0, &mut rng).is_empty());
    }

    #[test]
    fn two_day_illness_transmits_on_day_one() {
        let mut rng = SimRng::new(4);
        let s = TransmissionSchedule::draw(3, 2, &mut rng);
        assert_eq!(s.offsets(), &[1, 1, 1]);
        assert_eq!(s.due_on(1), 3);
        assert_eq!(s.due_on(0), 0);
    }

    #[test]
    fn due_on_counts_duplicates() {
        let mut rng = SimRng::new(5);
        let s = TransmissionSchedule::draw(50, 4, &mut rng);
        let total: usize = (0..=4).map(|d| s.due_on(d)).sum();
        assert_eq!(total, 50);
        assert_eq!(s.due_on(0), 0);
        assert_eq!(s.due_on(4), 0);
    }
}

#[cfg(test)]
mod state_machine {
    use epi_core::SimRng;

    use crate::{Agent, Health, MAX_SCHEDULED_ATTEMPTS, Outcome};

    #[test]
    fn enormous_r0_exposure_stays_bounded() {
        let mut rng = SimRng::new(6);
        let mut a = Agent::default();
        assert!(a.expose(7, 1e15, &mut rng));
        match a.health() {
            Health::Infected(inf) => assert_eq!(inf.schedule.len(), MAX_SCHEDULED_ATTEMPTS as usize),
            other => panic!("expected infected, got {other:?}"),
        }
    }

    #[test]
    fn starts_susceptible_and_alive() {
        let a = Agent::new();
        assert!(a.is_susceptible());
        assert!(a.is_alive());
        assert!(!a.is_infected());
        assert!(!a.is_immune());
        assert_eq!(a.days_infected(), None);
        assert_eq!(a.transmit(), 0);
    }

    #[test]
    fn expose_infects_once() {
        let mut rng = SimRng::new(1);
        let mut a = Agent::new();
        assert!(a.expose(7, 2.0, &mut rng));
        assert!(a.is_infected());
        assert_eq!(a.days_infected(), Some(0));
        let before = a.clone();
        assert!(!a.expose(7, 2.0, &mut rng), "re-exposure while infected is a no-op");
        assert_eq!(a, before);
    }

    #[test]
    fn integer_r0_gives_exact_schedule_size() {
        let mut rng = SimRng::new(2);
        for _ in 0..50 {
            let mut a = Agent::new();
            a.expose(7, 3.0, &mut rng);
            let Health::Infected(inf) = a.health() else { panic!("not infected") };
            assert_eq!(inf.schedule.len(), 3);
        }
    }

    #[test]
    fn fractional_r0_schedule_size_averages_r0() {
        let mut rng = SimRng::new(3);
        let n = 10_000;
        let mut total = 0usize;
        for _ in 0..n {
            let mut a = Agent::new();
            a.expose(7, 1.5, &mut rng);
            if let Health::Infected(inf) = a.health() {
                assert!(inf.schedule.len() == 1 || inf.schedule.len() == 2);
                total += inf.schedule.len();
            }
        }
        let mean = total as f64 / n as f64;
        assert!((mean - 1.5).abs() < 0.03, "mean {mean}");
    }

    #[test]
    fn transmit_follows_clock() {
        let mut rng = SimRng::new(4);
        let mut a = Agent::new();
        a.expose(5, 4.0, &mut rng);
        let mut attempts = 0;
        for _ in 0..5 {
            attempts += a.transmit();
            // Reading twice gives the same answer.
            assert_eq!(a.transmit(), a.transmit());
            a.step(5, 0.0, &mut rng);
        }
        assert_eq!(attempts, 4, "every scheduled attempt falls before resolution");
    }

    #[test]
    fn resolves_after_illness_length_steps() {
        let mut rng = SimRng::new(5);
        let mut a = Agent::new();
        a.expose(3, 1.0, &mut rng);
        assert_eq!(a.step(3, 0.0, &mut rng), None);
        assert_eq!(a.days_infected(), Some(1));
        assert_eq!(a.step(3, 0.0, &mut rng), None);
        assert_eq!(a.step(3, 0.0, &mut rng), Some(Outcome::Recovered));
        assert!(a.is_immune());
        assert!(!a.is_infected());
        assert!(a.is_alive());
    }

    #[test]
    fn ifr_one_always_dies() {
        let mut rng = SimRng::new(6);
        let mut a = Agent::new();
        a.expose(1, 1.0, &mut rng);
        assert_eq!(a.step(1, 1.0, &mut rng), Some(Outcome::Died));
        assert!(!a.is_alive());
        assert!(!a.is_infected());
        assert!(!a.is_immune());
    }

    #[test]
    fn terminal_states_are_frozen() {
        let mut rng = SimRng::new(7);
        let mut dead = Agent::new();
        dead.expose(1, 1.0, &mut rng);
        dead.step(1, 1.0, &mut rng);
        assert!(!dead.expose(1, 1.0, &mut rng));
        assert!(!dead.expose_unscheduled());
        assert_eq!(dead.step(1, 1.0, &mut rng), None);
        assert_eq!(dead.health(), &Health::Dead);

        let mut immune = Agent::new();
        immune.expose(1, 1.0, &mut rng);
        immune.step(1, 0.0, &mut rng);
        assert!(!immune.expose(1, 1.0, &mut rng));
        assert_eq!(immune.health(), &Health::Recovered);
    }

    #[test]
    fn step_on_susceptible_is_noop() {
        let mut rng = SimRng::new(8);
        let mut a = Agent::new();
        assert_eq!(a.step(7, 0.5, &mut rng), None);
        assert!(a.is_susceptible());
    }

    #[test]
    fn unscheduled_exposure_never_transmits() {
        let mut rng = SimRng::new(9);
        let mut a = Agent::new();
        assert!(a.expose_unscheduled());
        for _ in 0..6 {
            assert_eq!(a.transmit(), 0);
            a.step(7, 0.0, &mut rng);
        }
    }
}

#[cfg(test)]
mod agent_set {
    use epi_core::AgentId;

    use crate::AgentSet;

    #[test]
    fn insert_remove_contains() {
        let mut s = AgentSet::with_capacity(10);
        assert!(s.insert(AgentId(3)));
        assert!(!s.insert(AgentId(3)));
        assert!(s.insert(AgentId(7)));
        assert_eq!(s.len(), 2);
        assert!(s.contains(AgentId(3)));
        assert!(s.remove(AgentId(3)));
        assert!(!s.remove(AgentId(3)));
        assert!(!s.contains(AgentId(3)));
        assert!(s.contains(AgentId(7)));
        assert_eq!(s.as_slice(), &[AgentId(7)]);
    }

    #[test]
    fn out_of_range_is_not_contained() {
        let s = AgentSet::with_capacity(2);
        assert!(!s.contains(AgentId(99)));
    }

    #[test]
    fn full_set_then_drain() {
        let mut s = AgentSet::full(5);
        assert_eq!(s.len(), 5);
        for i in [4, 0, 2] {
            assert!(s.remove(AgentId(i)));
        }
        assert_eq!(s.to_sorted_vec(), vec![AgentId(1), AgentId(3)]);
        // Slots stay consistent after swap-removes.
        assert!(s.remove(AgentId(3)));
        assert!(s.remove(AgentId(1)));
        assert!(s.is_empty());
    }
}

#[cfg(test)]
mod population {
    use epi_core::{AgentId, SimRng};

    use crate::{Census, Outcome, Population};

    #[test]
    fn new_population_census() {
        let p = Population::new(4);
        assert_eq!(
            p.census(),
            Census { population: 4, living: 4, infected: 0, immune: 0, dead: 0 }
        );
    }

    #[test]
    fn partitions_follow_transitions() {
        let mut rng = SimRng::new(1);
        let mut p = Population::new(3);
        assert!(p.expose(AgentId(0), 1, 1.0, &mut rng));
        assert!(p.expose_unscheduled(AgentId(1)));
        assert!(!p.expose(AgentId(1), 1, 1.0, &mut rng));
        assert_eq!(p.census().infected, 2);

        assert_eq!(p.step(AgentId(0), 1, 0.0, &mut rng), Some(Outcome::Recovered));
        assert_eq!(p.step(AgentId(1), 1, 1.0, &mut rng), Some(Outcome::Died));
        assert_eq!(p.step(AgentId(2), 1, 1.0, &mut rng), None);

        let c = p.census();
        assert_eq!(c, Census { population: 3, living: 2, infected: 0, immune: 1, dead: 1 });
        assert!(!p.living().contains(AgentId(1)));
        assert!(!p.is_alive(AgentId(1)));
        assert!(p.infected().is_empty());
    }

    #[test]
    fn census_matches_full_scan() {
        let mut rng = SimRng::new(2);
        let mut p = Population::new(50);
        for i in (0..50).step_by(3) {
            p.expose(AgentId(i), 2, 1.0, &mut rng);
        }
        for _ in 0..2 {
            for id in p.infected().to_sorted_vec() {
                p.step(id, 2, 0.4, &mut rng);
            }
        }
        let agents = p.agents();
        let c = p.census();
        assert_eq!(c.living, agents.iter().filter(|a| a.is_alive()).count());
        assert_eq!(c.dead, agents.iter().filter(|a| !a.is_alive()).count());
        assert_eq!(c.immune, agents.iter().filter(|a| a.is_immune()).count());
        assert_eq!(c.infected, agents.iter().filter(|a| a.is_infected()).count());
    }

    #[test]
    fn fractions_handle_extinction() {
        let c = Census { population: 5, living: 0, infected: 0, immune: 0, dead: 5 };
        assert!(c.is_extinct());
        assert_eq!(c.infected_fraction(), 0.0);
        assert_eq!(c.immune_fraction(), 0.0);
        assert_eq!(c.death_fraction(), 1.0);
    }

    #[test]
    fn death_fraction_uses_original_size() {
        let c = Census { population: 10, living: 8, infected: 2, immune: 4, dead: 2 };
        assert_eq!(c.infected_fraction(), 0.25);
        assert_eq!(c.immune_fraction(), 0.5);
        assert_eq!(c.death_fraction(), 0.2);
    }
}
