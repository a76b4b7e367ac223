//! Cell access, bounds and traversal properties.

use lifegrid::{pos, Environment, Error, Pos, Reduced, Status, Step, Traverse, World};

fn samples() -> Vec<Environment> {
    vec![
        Environment::empty(5, 5),
        Environment::new(5, 5, [pos!(0, 2), pos!(1, 3), pos!(2, 1), pos!(2, 2), pos!(2, 3)]),
        Environment::new(2, 7, [pos!(6, 1), pos!(0, 0)]),
        Environment::new(4, 1, [pos!(0, 3)]),
    ]
}

fn every_cell(env: &Environment) -> Vec<Pos> {
    (0..env.height() as i32)
        .flat_map(|y| (0..env.width() as i32).map(move |x| pos!(x, y)))
        .collect()
}

#[test_log::test]
fn test_alive_then_dead_restores_dead() {
    for env in samples() {
        for cell in every_cell(&env) {
            let revived_then_killed = env
                .put_status(cell, Status::Alive)
                .put_status(cell, Status::Dead);
            assert_eq!(revived_then_killed, env.put_status(cell, Status::Dead));
            assert_eq!(revived_then_killed.get_status(cell), Status::Dead);
        }
    }
}

#[test_log::test]
fn test_out_of_bounds_writes_are_ignored() {
    for env in samples() {
        let (w, h) = (env.width() as i32, env.height() as i32);
        for cell in [pos!(-1, 0), pos!(0, -1), pos!(w, 0), pos!(0, h), pos!(w, h)] {
            assert_eq!(env.put_status(cell, Status::Alive), env);
            assert_eq!(env.put_status(cell, Status::Dead), env);
            assert!(!env.member(cell));
            assert_eq!(env.get_status(cell), Status::Dead);
        }
    }
}

#[test]
fn test_count_is_area() {
    for env in samples() {
        assert_eq!(env.count(), (env.width() * env.height()) as usize);
        assert_eq!(env.cells().count(), env.count());
    }
}

#[test]
fn test_slice_agrees_with_full_reduce() {
    for env in samples() {
        let full = env
            .reduce(vec![], |mut seen, item| {
                seen.push(item);
                Step::Continue(seen)
            })
            .into_acc();
        for start in 0..=env.count() {
            for length in 0..=(env.count() - start) {
                let sliced: Vec<_> = env.slice(start, length).unwrap().collect();
                assert_eq!(sliced, full[start..start + length]);
            }
        }
        assert!(matches!(
            env.slice(0, env.count() + 1),
            Err(Error::SliceOutOfBounds { .. })
        ));
    }
}

#[test]
fn test_traversal_reports_statuses() {
    for env in samples() {
        let alive: Vec<_> = env
            .cells()
            .filter(|(_, status)| status.is_alive())
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(alive, env.actives());
    }
}

#[test]
fn test_halt_stops_early() {
    let env = Environment::new(2, 7, [pos!(6, 1)]);
    let visited = env.reduce(0, |visited, _| {
        if visited == 3 {
            Step::Halt(visited)
        } else {
            Step::Continue(visited + 1)
        }
    });
    assert!(matches!(visited, Reduced::Halted(3)));
}

#[test]
fn test_suspended_walk_covers_the_rest() {
    let env = Environment::new(2, 7, [pos!(6, 1), pos!(0, 0)]);
    let outcome = env.reduce(0usize, |alive, (_, status)| match status {
        Status::Alive => Step::Suspend(alive + 1),
        Status::Dead => Step::Continue(alive),
    });
    let Reduced::Suspended(1, continuation) = outcome else {
        panic!("the first cell is alive");
    };
    assert_eq!(continuation.index(), 1);

    let remaining = continuation.resume(0usize, |seen, _| Step::Continue(seen + 1));
    assert!(matches!(remaining, Reduced::Done(13)));
    let again = continuation.resume(100usize, |seen, _| Step::Continue(seen + 1));
    assert!(matches!(again, Reduced::Done(113)));
}

#[test]
fn test_malformed_input_is_rejected() {
    assert_eq!(Status::try_from(3i64), Err(Error::InvalidStatus(3)));
    assert!(Pos::try_from((0i64, i64::from(i32::MAX) + 1)).is_err());
}
