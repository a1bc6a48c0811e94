//! Unit tests for hm-task.
//!
//! Machines are driven tick by tick at 60 Hz against a hand-built
//! `GameState`; navigation is either the real grid navigator on an empty map
//! or a scripted stub.

#[cfg(test)]
mod helpers {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use hm_core::{AgentId, SimConfig, TaskType, Vec3};
    use hm_nav::{Cell, GridConfig, GridNavigator, NavError, NavResult, Navigator};
    use hm_world::{GameState, GoldMine, Peasant, Town};

    use crate::{AgentBody, TaskContext, TaskMachine, TaskTuning};

    pub fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub fn dt() -> Duration {
        SimConfig::default().step_duration()
    }

    pub fn ticks(secs: u64) -> u64 {
        secs * u64::from(SimConfig::default().step_hz)
    }

    pub fn agent() -> AgentId {
        AgentId::from("p1")
    }

    /// Town at the origin, mine 10 units east, tree 10 units north.
    pub fn world(task: TaskType, tree: Option<Vec3>) -> GameState {
        let mut state = GameState::new(
            vec![Town { id: "town_1".into(), name: "Riverside".into(), position: Vec3::ZERO }],
            vec![GoldMine { id: "mine_1".into(), position: Vec3::ground(10.0, 0.0) }],
            vec![Vec3::ground(0.0, -10.0)],
        );
        state.add_peasant(Peasant::new("p1", "Aldric", "town_1")).unwrap();
        state.assign_task(&agent(), task, tree).unwrap();
        state
    }

    pub fn open_grid() -> GridNavigator {
        GridNavigator::from_config(&GridConfig::default()).unwrap()
    }

    /// Advance the clock one step, then update the machine.
    pub fn tick(
        machine: &mut TaskMachine,
        state:   &mut GameState,
        nav:     &dyn Navigator,
        body:    &mut AgentBody,
        tuning:  &TaskTuning,
    ) {
        let dt = dt();
        state.advance_clock(dt);
        let mut ctx = TaskContext::new(state, nav, tuning);
        machine.update(dt, body, &mut ctx, &agent());
    }

    /// Never finds a path.
    pub struct Unreachable;

    impl Navigator for Unreachable {
        fn plan(&self, _: Vec3, _: Vec3) -> NavResult<Vec<Vec3>> {
            Err(NavError::NoPath { from: Cell::default(), to: Cell::default() })
        }
    }

    /// Returns an empty waypoint list.
    pub struct EmptyPath;

    impl Navigator for EmptyPath {
        fn plan(&self, _: Vec3, _: Vec3) -> NavResult<Vec<Vec3>> {
            Ok(Vec::new())
        }
    }

    /// Returns `first` on the first call and `later` (or nothing) after.
    pub struct Scripted {
        pub calls: AtomicUsize,
        pub first: Vec<Vec3>,
        pub later: Option<Vec<Vec3>>,
    }

    impl Scripted {
        pub fn new(first: Vec<Vec3>, later: Option<Vec<Vec3>>) -> Self {
            Self { calls: AtomicUsize::new(0), first, later }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::Relaxed)
        }
    }

    impl Navigator for Scripted {
        fn plan(&self, from: Vec3, to: Vec3) -> NavResult<Vec<Vec3>> {
            let n = self.calls.fetch_add(1, Ordering::Relaxed);
            let path = if n == 0 { Some(self.first.clone()) } else { self.later.clone() };
            path.ok_or(NavError::NoPath { from: Cell::new(from.x as i32, from.z as i32), to: Cell::new(to.x as i32, to.z as i32) })
        }
    }
}

#[cfg(test)]
mod travel {
    use hm_core::Vec3;

    use super::helpers::*;
    use crate::{AgentBody, Progress, TaskTuning, Travel};

    #[test]
    fn recalculation_adopts_new_path_at_five_seconds() {
        init_log();
        let first: Vec<Vec3> = (1..=60).map(|i| Vec3::ground(i as f32, 0.0)).collect();
        let later = vec![Vec3::ground(0.0, 20.0), Vec3::ground(0.0, 40.0)];
        let nav = Scripted::new(first.clone(), Some(later.clone()));
        let tuning = TaskTuning::default();
        let dest = Vec3::ground(100.0, 0.0);

        let mut travel = Travel::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        let mut cursor_before = 0;
        let mut adopted_at = None;

        for n in 1..=400u64 {
            travel.step(dt(), &mut body, dest, tuning.site_arrival, &nav, &tuning);
            if travel.path() == Some(later.as_slice()) {
                adopted_at = Some(n);
                assert_eq!(travel.cursor(), 0, "cursor resets with the new path");
                break;
            }
            assert_eq!(travel.path(), Some(first.as_slice()));
            cursor_before = travel.cursor();
        }

        let n = adopted_at.expect("new path adopted");
        assert!((300..=302).contains(&n), "adopted at tick {n}");
        assert!(cursor_before > 0, "agent had been following the first path");
        assert_eq!(nav.calls(), 2);
    }

    #[test]
    fn failed_recalculation_keeps_old_path() {
        let first: Vec<Vec3> = (1..=60).map(|i| Vec3::ground(i as f32, 0.0)).collect();
        let nav = Scripted::new(first.clone(), None);
        let tuning = TaskTuning::default();
        let mut travel = Travel::new();
        let mut body = AgentBody::at(Vec3::ZERO);

        for _ in 0..ticks(6) {
            travel.step(dt(), &mut body, Vec3::ground(100.0, 0.0), 1.0, &nav, &tuning);
        }
        assert_eq!(nav.calls(), 2);
        assert_eq!(travel.path(), Some(first.as_slice()));
        assert!(travel.cursor() > 10, "cursor was not reset");
    }

    #[test]
    fn straight_line_without_path() {
        let tuning = TaskTuning::default();
        let mut travel = Travel::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        let dest = Vec3::ground(3.0, 0.0);

        let mut arrived = None;
        for n in 1..=200u64 {
            if travel.step(dt(), &mut body, dest, 1.0, &Unreachable, &tuning) == Progress::Arrived {
                arrived = Some(n);
                break;
            }
        }
        // 2.5 units at 2.5 u/s ≈ 60 ticks, plus the arrival tick.
        let n = arrived.expect("arrived");
        assert!((55..=70).contains(&n), "arrived at tick {n}");
        assert!(body.position.distance(dest) < 0.5);
        assert!((body.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-4, "facing +x");
    }

    #[test]
    fn raised_destination_is_reached_on_the_ground() {
        let tuning = TaskTuning::default();
        let mut travel = Travel::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        let dest = Vec3::new(3.0, 1.5, 0.0);

        let mut arrived = false;
        for _ in 0..200 {
            arrived = travel.step(dt(), &mut body, dest, 1.0, &Unreachable, &tuning) == Progress::Arrived;
            assert_eq!(body.position.y, 0.0);
            if arrived {
                break;
            }
        }
        assert!(arrived);
        assert!(body.position.ground_distance(dest) < 1.0);
    }

    #[test]
    fn arrival_clears_runtime() {
        let tuning = TaskTuning::default();
        let nav = open_grid();
        let mut travel = Travel::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        let dest = Vec3::ground(4.0, 4.0);

        let mut progress = Progress::EnRoute;
        for _ in 0..ticks(10) {
            progress = travel.step(dt(), &mut body, dest, 1.0, &nav, &tuning);
            if progress == Progress::Arrived {
                break;
            }
            assert!(travel.path().is_some());
        }
        assert_eq!(progress, Progress::Arrived);
        assert_eq!(travel, Travel::new());
    }

    #[test]
    fn empty_path_is_not_cached() {
        let tuning = TaskTuning::default();
        let mut travel = Travel::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        travel.step(dt(), &mut body, Vec3::ground(10.0, 0.0), 1.0, &EmptyPath, &tuning);
        assert!(travel.path().is_none());
        assert!(body.position.x > 0.0, "fell back to direct movement");
    }

    #[test]
    fn no_waypoint_skipping() {
        // Waypoints 1 unit apart: the cursor must visit each in turn.
        let path: Vec<Vec3> = (0..=5).map(|i| Vec3::ground(i as f32, 0.0)).collect();
        let nav = Scripted::new(path, None);
        let tuning = TaskTuning::default();
        let mut travel = Travel::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        let mut seen = vec![0];
        for _ in 0..ticks(4) {
            if travel.step(dt(), &mut body, Vec3::ground(5.0, 0.0), 1.0, &nav, &tuning) == Progress::Arrived {
                break;
            }
            if *seen.last().unwrap() != travel.cursor() {
                seen.push(travel.cursor());
            }
        }
        assert_eq!(seen, [0, 1, 2, 3, 4, 5]);
    }
}

#[cfg(test)]
mod mining {
    use std::time::Duration;

    use hm_core::{MineId, TaskType, Vec3};
    use hm_world::{Economy, MiningPhase, MiningState, TaskState};

    use super::helpers::*;
    use crate::{AgentBody, TaskMachine, TaskTuning};

    fn phase(state: &hm_world::GameState) -> MiningPhase {
        match &state.peasant(&agent()).unwrap().task {
            TaskState::MineGold(m) => m.phase,
            other => panic!("not mining: {other:?}"),
        }
    }

    #[test]
    fn exactly_one_gold_per_cycle() {
        init_log();
        let nav = open_grid();
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::MineGold, None);
        let mut machine = TaskMachine::for_task(TaskType::MineGold).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);

        let mut completions = 0;
        let mut last_gold = 0;
        for n in 1..=ticks(40) {
            let before = phase(&state);
            tick(&mut machine, &mut state, &nav, &mut body, &tuning);
            let after = phase(&state);

            let gold = state.economy().gold;
            assert!(gold - last_gold <= 1, "more than one gold in a tick");
            if before == MiningPhase::WalkingToTown && after == MiningPhase::WaitingAtTown {
                completions += 1;
            }
            assert_eq!(gold, completions, "gold only on return-arrival");
            last_gold = gold;

            if n == ticks(20) {
                assert_eq!(gold, 1, "one full cycle by 20 s");
            }
        }
        assert_eq!(state.economy(), Economy { gold: 2, wood: 0 });
    }

    #[test]
    fn phases_in_order() {
        let nav = open_grid();
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::MineGold, None);
        let mut machine = TaskMachine::for_task(TaskType::MineGold).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);

        // Second trip reaches the mine again at roughly 21.5 s.
        let mut seen = vec![phase(&state)];
        for _ in 0..ticks(20) {
            tick(&mut machine, &mut state, &nav, &mut body, &tuning);
            if *seen.last().unwrap() != phase(&state) {
                seen.push(phase(&state));
            }
        }
        assert_eq!(
            seen,
            [
                MiningPhase::WalkingToMine,
                MiningPhase::Mining,
                MiningPhase::WalkingToTown,
                MiningPhase::WaitingAtTown,
                MiningPhase::WalkingToMine,
            ]
        );
    }

    #[test]
    fn straight_line_fallback_still_pays() {
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::MineGold, None);
        let mut machine = TaskMachine::for_task(TaskType::MineGold).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);
        for _ in 0..ticks(20) {
            tick(&mut machine, &mut state, &Unreachable, &mut body, &tuning);
        }
        assert_eq!(state.economy().gold, 1);
    }

    #[test]
    fn raised_mine_still_pays() {
        let tuning = TaskTuning::default();
        let nav = open_grid();
        let mut state = hm_world::GameState::new(
            vec![hm_world::Town { id: "town_1".into(), name: "Riverside".into(), position: Vec3::ZERO }],
            vec![hm_world::GoldMine { id: "mine_1".into(), position: Vec3::new(10.0, 1.5, 0.0) }],
            Vec::new(),
        );
        state.add_peasant(hm_world::Peasant::new("p1", "Aldric", "town_1")).unwrap();
        state.assign_task(&agent(), TaskType::MineGold, None).unwrap();
        let mut machine = TaskMachine::for_task(TaskType::MineGold).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);

        for _ in 0..ticks(20) {
            tick(&mut machine, &mut state, &nav, &mut body, &tuning);
            assert_eq!(body.position.y, 0.0);
        }
        assert_eq!(state.economy().gold, 1);
    }

    #[test]
    fn work_phase_lasts_five_seconds() {
        let nav = Unreachable;
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::MineGold, None);
        if let TaskState::MineGold(m) = &mut state.peasant_mut(&agent()).unwrap().task {
            m.enter(MiningPhase::Mining, Duration::ZERO);
        }
        let mut machine = TaskMachine::for_task(TaskType::MineGold).unwrap();
        let mut body = AgentBody::at(Vec3::ground(10.0, 0.0));

        let mut left_at = None;
        for n in 1..=ticks(10) {
            tick(&mut machine, &mut state, &nav, &mut body, &tuning);
            if phase(&state) != MiningPhase::Mining {
                left_at = Some(n);
                break;
            }
            assert_eq!(body.position, Vec3::ground(10.0, 0.0), "stationary while mining");
        }
        let n = left_at.expect("mining finished");
        assert!((300..=302).contains(&n), "left mining at tick {n}");
        assert_eq!(phase(&state), MiningPhase::WalkingToTown);
    }

    #[test]
    fn missing_mine_is_a_noop() {
        let nav = Scripted::new(vec![Vec3::ZERO], None);
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::MineGold, None);
        state.peasant_mut(&agent()).unwrap().task =
            TaskState::MineGold(MiningState::new(Some(MineId::from("mine_404")), Duration::ZERO));
        let mut machine = TaskMachine::for_task(TaskType::MineGold).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);

        for _ in 0..ticks(2) {
            tick(&mut machine, &mut state, &nav, &mut body, &tuning);
        }
        assert_eq!(body.position, Vec3::ZERO);
        assert_eq!(phase(&state), MiningPhase::WalkingToMine);
        assert_eq!(nav.calls(), 0);
        assert!(machine.travel().path().is_none());
    }

    #[test]
    fn not_mining_is_a_noop() {
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::Idle, None);
        let mut machine = TaskMachine::for_task(TaskType::MineGold).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);
        tick(&mut machine, &mut state, &open_grid(), &mut body, &tuning);
        assert_eq!(body.position, Vec3::ZERO);
    }
}

#[cfg(test)]
mod chopping {
    use hm_core::{TaskType, Vec3};
    use hm_world::{ChoppingPhase, TaskState};

    use super::helpers::*;
    use crate::{AgentBody, TaskMachine, TaskTuning};

    #[test]
    fn one_wood_per_cycle() {
        let nav = open_grid();
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::ChopWood, Some(Vec3::ground(0.0, -10.0)));
        let mut machine = TaskMachine::for_task(TaskType::ChopWood).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);

        for _ in 0..ticks(20) {
            tick(&mut machine, &mut state, &nav, &mut body, &tuning);
        }
        assert_eq!(state.economy().wood, 1);
        assert_eq!(state.economy().gold, 0);
    }

    #[test]
    fn no_tree_is_a_noop() {
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::ChopWood, None);
        let mut machine = TaskMachine::for_task(TaskType::ChopWood).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);
        for _ in 0..ticks(1) {
            tick(&mut machine, &mut state, &open_grid(), &mut body, &tuning);
        }
        assert_eq!(body.position, Vec3::ZERO);
        let TaskState::ChopWood(c) = &state.peasant(&agent()).unwrap().task else {
            panic!("not chopping");
        };
        assert_eq!(c.phase, ChoppingPhase::WalkingToTree);
    }

    #[test]
    fn walking_phase_reports_travelling() {
        let nav = open_grid();
        let tuning = TaskTuning::default();
        let mut state = world(TaskType::ChopWood, Some(Vec3::ground(0.0, -10.0)));
        let mut machine = TaskMachine::for_task(TaskType::ChopWood).unwrap();
        let mut body = AgentBody::at(Vec3::ZERO);
        tick(&mut machine, &mut state, &nav, &mut body, &tuning);
        assert!(state.peasant(&agent()).unwrap().task.is_travelling());
        assert!(machine.travel().path().is_some());
    }
}

#[cfg(test)]
mod manual {
    use hm_core::Vec3;

    use super::helpers::*;
    use crate::{AgentBody, ManualMove, TaskTuning};

    #[test]
    fn direct_move_arrives_and_clears() {
        let tuning = TaskTuning::default();
        let mut mv = ManualMove::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        mv.command(body.position, Vec3::new(5.0, 3.0, 0.0), &Unreachable);
        assert_eq!(mv.target(), Some(Vec3::ground(5.0, 0.0)), "target is flattened");
        assert!(mv.travel().path().is_none());

        // 4.5 units at 5 u/s is 54 ticks.
        for _ in 0..ticks(2) {
            mv.update(dt(), &mut body, &Unreachable, &tuning);
        }
        assert!(!mv.is_active());
        assert!(body.position.distance(Vec3::ground(5.0, 0.0)) < 0.5);
    }

    #[test]
    fn path_planned_at_command_time() {
        let nav = open_grid();
        let mut mv = ManualMove::new();
        mv.command(Vec3::ZERO, Vec3::ground(-6.0, 8.0), &nav);
        assert!(mv.is_active());
        assert!(mv.travel().path().is_some_and(|p| !p.is_empty()));
    }

    #[test]
    fn follows_grid_path_to_target() {
        let nav = open_grid();
        let tuning = TaskTuning::default();
        let mut mv = ManualMove::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        let target = Vec3::ground(-6.0, 8.0);
        mv.command(body.position, target, &nav);
        for _ in 0..ticks(5) {
            mv.update(dt(), &mut body, &nav, &tuning);
        }
        assert!(!mv.is_active());
        assert!(body.position.distance(target) < 1.0);
    }

    #[test]
    fn failed_recalculation_drops_path() {
        let first: Vec<Vec3> = (1..=80).map(|i| Vec3::ground(i as f32, 0.0)).collect();
        let nav = Scripted::new(first, None);
        let tuning = TaskTuning::default();
        let mut mv = ManualMove::new();
        let mut body = AgentBody::at(Vec3::ZERO);
        mv.command(body.position, Vec3::ground(100.0, 0.0), &nav);
        assert!(mv.travel().path().is_some());

        for _ in 0..=ticks(5) {
            mv.update(dt(), &mut body, &nav, &tuning);
        }
        assert_eq!(nav.calls(), 2);
        assert!(mv.is_active());
        assert!(mv.travel().path().is_none());
    }

    #[test]
    fn idle_without_target() {
        let tuning = TaskTuning::default();
        let mut mv = ManualMove::new();
        let mut body = AgentBody::at(Vec3::ground(1.0, 1.0));
        mv.update(dt(), &mut body, &Unreachable, &tuning);
        assert_eq!(body.position, Vec3::ground(1.0, 1.0));
    }

    #[test]
    fn cancel_clears_target() {
        let mut mv = ManualMove::new();
        mv.command(Vec3::ZERO, Vec3::ground(3.0, 0.0), &open_grid());
        mv.cancel();
        assert!(!mv.is_active());
        assert!(mv.travel().path().is_none());
    }
}

#[cfg(test)]
mod machine {
    use hm_core::TaskType;

    use crate::{TaskMachine, TaskTuning};

    #[test]
    fn one_machine_per_active_task() {
        assert!(TaskMachine::for_task(TaskType::Idle).is_none());
        assert_eq!(TaskMachine::for_task(TaskType::MineGold).unwrap().kind(), TaskType::MineGold);
        assert_eq!(TaskMachine::for_task(TaskType::ChopWood).unwrap().kind(), TaskType::ChopWood);
    }

    #[test]
    fn default_tuning_is_valid() {
        assert!(TaskTuning::default().validate().is_ok());
        let bad = TaskTuning { walk_speed: 0.0, ..TaskTuning::default() };
        assert!(bad.validate().is_err());
    }
}
