//! Property-based tests for the reducer-to-action mapping.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use actionmap::{
    reducers, use_reducers, Action, Actions, BuildError, Initial, ReducersBuilder, Scope,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug)]
enum Op {
    Add(i64),
    Mul(i64),
    Reset,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i64>().prop_map(Op::Add),
        any::<i64>().prop_map(Op::Mul),
        Just(Op::Reset),
    ]
}

prop_compose! {
    fn arbitrary_names()(set in prop::collection::hash_set("[a-z]{1,6}", 0..8)) -> Vec<String> {
        set.into_iter().collect()
    }
}

fn render_arithmetic(scope: &mut Scope, seed: i64) -> (i64, Actions<i64>) {
    scope.render(move |host| {
        use_reducers(
            host,
            reducers! {
                add => |s: &i64, args: &[i64]| {
                    s.wrapping_add(args.first().copied().unwrap_or(1))
                },
                mul => |s: &i64, args: &[i64]| {
                    s.wrapping_mul(args.first().copied().unwrap_or(1))
                },
                reset => |_: &i64, _: &[i64]| 0,
            },
            seed,
        )
    })
}

fn dispatch(actions: &Actions<i64>, op: &Op) {
    match op {
        Op::Add(n) => actions["add"].call(&[*n]),
        Op::Mul(n) => actions["mul"].call(&[*n]),
        Op::Reset => actions["reset"].call(&[]),
    }
}

fn fold(seed: i64, ops: &[Op]) -> i64 {
    ops.iter().fold(seed, |acc, op| match op {
        Op::Add(n) => acc.wrapping_add(*n),
        Op::Mul(n) => acc.wrapping_mul(*n),
        Op::Reset => 0,
    })
}

proptest! {
    #[test]
    fn literal_initial_state_is_returned_unchanged(seed in any::<i64>()) {
        let mut scope = Scope::new();
        let (state, _) = render_arithmetic(&mut scope, seed);
        prop_assert_eq!(state, seed);
    }

    #[test]
    fn action_names_mirror_reducer_names(names in arbitrary_names()) {
        let mut builder = ReducersBuilder::new();
        for name in &names {
            builder = builder.reducer(name.clone(), |s: &i64, _: &[i64]| *s);
        }
        let mapping = builder.build().unwrap();

        let mut scope = Scope::new();
        let (_, actions) = scope.render(move |host| use_reducers(host, mapping, 0i64));

        let action_names: Vec<&str> = actions.names().collect();
        prop_assert_eq!(action_names, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn dispatch_sequence_matches_pure_fold(
        seed in any::<i64>(),
        ops in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let mut scope = Scope::new();

        let (_, actions) = render_arithmetic(&mut scope, seed);
        for op in &ops {
            dispatch(&actions, op);
        }

        let (state, _) = render_arithmetic(&mut scope, seed);
        prop_assert_eq!(state, fold(seed, &ops));
    }

    #[test]
    fn render_points_do_not_change_the_fold(
        seed in any::<i64>(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        split in 0..20usize
    ) {
        let split = split.min(ops.len());
        let mut scope = Scope::new();

        let (_, actions) = render_arithmetic(&mut scope, seed);
        for op in &ops[..split] {
            dispatch(&actions, op);
        }
        render_arithmetic(&mut scope, seed);
        for op in &ops[split..] {
            dispatch(&actions, op);
        }

        let (state, _) = render_arithmetic(&mut scope, seed);
        prop_assert_eq!(state, fold(seed, &ops));
    }

    #[test]
    fn action_identity_survives_renders(renders in 1..10usize) {
        let mut scope = Scope::new();
        let (_, first) = render_arithmetic(&mut scope, 0);

        for _ in 0..renders {
            let (_, current) = render_arithmetic(&mut scope, 0);
            prop_assert!(Actions::ptr_eq(&first, &current));
            prop_assert!(Action::ptr_eq(&first["add"], &current["add"]));
            prop_assert!(Action::ptr_eq(&first["reset"], &current["reset"]));
        }
    }

    #[test]
    fn old_handles_apply_the_latest_step(
        first_step in -1000i64..1000,
        second_step in -1000i64..1000
    ) {
        let mut scope = Scope::new();

        let render_with_step = |scope: &mut Scope, step: i64| {
            scope.render(move |host| {
                use_reducers(
                    host,
                    reducers! {
                        step => move |s: &i64, _: &[i64]| s.wrapping_add(step),
                    },
                    0i64,
                )
            })
        };

        let (_, original) = render_with_step(&mut scope, first_step);
        original["step"].call(&[]);
        render_with_step(&mut scope, second_step);
        original["step"].call(&[]);

        let (state, _) = render_with_step(&mut scope, second_step);
        prop_assert_eq!(state, first_step.wrapping_add(second_step));
    }

    #[test]
    fn lazy_initializer_runs_once_regardless_of_renders(
        seed in any::<i64>(),
        renders in 1..10usize
    ) {
        let mut scope = Scope::new();
        let runs = Rc::new(Cell::new(0u32));

        for _ in 0..renders {
            let counted = Rc::clone(&runs);
            let (state, _) = scope.render(move |host| {
                use_reducers(
                    host,
                    reducers! { noop => |s: &i64, _: &[i64]| *s },
                    Initial::lazy(move || {
                        counted.set(counted.get() + 1);
                        seed
                    }),
                )
            });
            prop_assert_eq!(state, seed);
        }

        prop_assert_eq!(runs.get(), 1);
    }

    #[test]
    fn duplicate_reducer_names_are_rejected(name in "[a-z]{1,8}") {
        let result = ReducersBuilder::new()
            .reducer(name.clone(), |s: &i64, _: &[i64]| *s)
            .reducer(name.clone(), |s: &i64, _: &[i64]| *s)
            .build();

        prop_assert_eq!(result.unwrap_err(), BuildError::DuplicateReducer { name });
    }
}
