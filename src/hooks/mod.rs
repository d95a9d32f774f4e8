//! Hook-style entry points, written against the [`Host`] capability seam.

use std::rc::Rc;

use crate::core::{map_reducers, Actions, Host, Initial, Reducers};

/// Turn a reducer mapping into state plus dispatchable actions.
///
/// Returns the committed state snapshot for this evaluation and one
/// [`Action`](crate::core::Action) per reducer, under the same names.
/// Call this on every evaluation with the freshly-built mapping; the
/// host gives back the same underlying slots each time.
///
/// Three guarantees shape the return value:
///
/// - **Stable identity.** The actions are derived once, on the first
///   evaluation, and the same handles come back on every later one.
///   Cached work keyed on an action's identity never reruns because of a
///   re-evaluation.
/// - **Latest reducers win.** Each action looks its reducer up at call
///   time through a [`Latest`](crate::core::Latest) holder that this
///   function rewrites on every evaluation. A handle captured long ago
///   still dispatches to the newest mapping.
/// - **Updates fold.** Dispatching twice between evaluations applies the
///   second reducer to the first one's result, not to the stale snapshot.
///
/// The initial state may be a literal or [`Initial::lazy`]; a lazy
/// initializer runs at most once, on the first evaluation.
///
/// # Example
///
/// ```rust
/// use actionmap::{reducers, use_reducers, Scope};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter {
///     count: i64,
/// }
///
/// let mut scope = Scope::new();
/// let counter = |host: &mut actionmap::Ctx<'_>| {
///     use_reducers(
///         host,
///         reducers! {
///             increment => |s: &Counter, args: &[i64]| Counter {
///                 count: s.count + args.first().copied().unwrap_or(1),
///             },
///             reset => |_: &Counter, _: &[i64]| Counter { count: 0 },
///         },
///         Counter { count: 0 },
///     )
/// };
///
/// let (state, actions) = scope.render(counter);
/// assert_eq!(state.count, 0);
///
/// actions["increment"].call(&[]);
/// actions["increment"].call(&[9]);
///
/// let (state, _) = scope.render(counter);
/// assert_eq!(state.count, 10);
/// ```
///
/// # Panics
///
/// Calling an action whose name is absent from the mapping supplied on
/// the most recent evaluation panics. Hosts additionally panic when
/// capability calls change order between evaluations; see
/// [`Scope::render`](crate::runtime::Scope::render).
pub fn use_reducers<H, S, A>(
    host: &mut H,
    reducers: Reducers<S, A>,
    initial: impl Into<Initial<S>>,
) -> (S, Actions<A>)
where
    H: Host,
    S: Clone + 'static,
    A: 'static,
{
    let initial = initial.into();
    let (state, cell) = host.state_cell(|| initial.produce());

    let latest = host.latest({
        let seed = reducers.clone();
        move || seed
    });
    latest.replace(reducers);

    let actions = host.memo((), {
        let cell = Rc::clone(&cell);
        let latest = latest.clone();
        move || map_reducers(cell, latest)
    });

    (state, (*actions).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;
    use crate::reducers;
    use crate::runtime::Scope;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[derive(Clone, PartialEq, Debug)]
    struct Counter {
        count: i64,
    }

    fn counter_component(host: &mut crate::runtime::Ctx<'_>) -> (Counter, Actions<i64>) {
        use_reducers(
            host,
            reducers! {
                increment => |s: &Counter, args: &[i64]| Counter {
                    count: s.count + args.first().copied().unwrap_or(1),
                },
                decrement => |s: &Counter, args: &[i64]| Counter {
                    count: s.count - args.first().copied().unwrap_or(1),
                },
                reset => |_: &Counter, _: &[i64]| Counter { count: 0 },
            },
            Counter { count: 0 },
        )
    }

    #[test]
    fn action_names_mirror_reducer_names() {
        let mut scope = Scope::new();
        let (_, actions) = scope.render(counter_component);

        assert_eq!(
            actions.names().collect::<Vec<_>>(),
            vec!["increment", "decrement", "reset"]
        );
    }

    #[test]
    fn literal_initial_state_is_returned_unchanged() {
        let mut scope = Scope::new();
        let (state, _) = scope.render(counter_component);
        assert_eq!(state, Counter { count: 0 });
    }

    #[test]
    fn lazy_initializer_runs_at_most_once() {
        let mut scope = Scope::new();
        let runs = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let counted = Rc::clone(&runs);
            let (value, _) = scope.render(move |host| {
                use_reducers(
                    host,
                    reducers! { bump => |s: &i64, _: &[i64]| s + 1 },
                    Initial::lazy(move || {
                        counted.set(counted.get() + 1);
                        42i64
                    }),
                )
            });
            assert_eq!(value, 42);
        }

        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn dispatch_applies_the_named_reducer() {
        let mut scope = Scope::new();

        let (_, actions) = scope.render(counter_component);
        actions["increment"].call(&[]);
        let (state, _) = scope.render(counter_component);
        assert_eq!(state.count, 1);

        actions["decrement"].call(&[]);
        let (state, _) = scope.render(counter_component);
        assert_eq!(state.count, 0);
    }

    #[test]
    fn reset_overrides_accumulated_state() {
        let mut scope = Scope::new();

        let (_, actions) = scope.render(counter_component);
        actions["increment"].call(&[100]);
        let (state, _) = scope.render(counter_component);
        assert_eq!(state.count, 100);

        actions["reset"].call(&[]);
        let (state, _) = scope.render(counter_component);
        assert_eq!(state.count, 0);
    }

    #[test]
    fn dispatch_forwards_arguments_to_the_reducer() {
        let mut scope = Scope::new();

        let (_, actions) = scope.render(counter_component);
        actions["increment"].call(&[5]);
        let (state, _) = scope.render(counter_component);
        assert_eq!(state.count, 5);

        actions["increment"].call(&[10]);
        let (state, _) = scope.render(counter_component);
        assert_eq!(state.count, 15);
    }

    #[test]
    fn dispatch_forwards_the_whole_argument_slice() {
        let mut scope = Scope::new();
        let component = |host: &mut crate::runtime::Ctx<'_>| {
            use_reducers(
                host,
                reducers! {
                    add_all => |s: &i64, args: &[i64]| s + args.iter().sum::<i64>(),
                },
                0i64,
            )
        };

        let (_, actions) = scope.render(component);
        actions["add_all"].call(&[1, 2, 3]);
        let (total, _) = scope.render(component);
        assert_eq!(total, 6);
    }

    #[test]
    fn consecutive_dispatches_fold_together() {
        let mut scope = Scope::new();

        let (_, actions) = scope.render(counter_component);
        actions["increment"].call(&[]);
        actions["increment"].call(&[]);

        let (state, _) = scope.render(counter_component);
        assert_eq!(state.count, 2);
    }

    #[test]
    fn action_handles_keep_their_identity_across_renders() {
        let mut scope = Scope::new();

        let (_, first) = scope.render(counter_component);
        first["increment"].call(&[]);
        let (_, second) = scope.render(counter_component);

        assert!(Actions::ptr_eq(&first, &second));
        assert!(Action::ptr_eq(&first["increment"], &second["increment"]));
        assert!(Action::ptr_eq(&first["reset"], &second["reset"]));
    }

    #[test]
    fn old_handles_dispatch_to_the_newest_reducers() {
        let mut scope = Scope::new();

        let render_with_step = |scope: &mut Scope, step: i64| {
            scope.render(move |host| {
                use_reducers(
                    host,
                    reducers! {
                        add => move |s: &i64, _: &[i64]| s + step,
                    },
                    0i64,
                )
            })
        };

        let (_, original) = render_with_step(&mut scope, 1);
        original["add"].call(&[]);
        let (count, _) = render_with_step(&mut scope, 1);
        assert_eq!(count, 1);

        // re-render with a different step, then dispatch through the
        // handle captured before the change
        render_with_step(&mut scope, 10);
        original["add"].call(&[]);
        let (count, _) = render_with_step(&mut scope, 10);
        assert_eq!(count, 11);
    }

    #[test]
    fn reducer_panic_reaches_the_dispatch_site() {
        let mut scope = Scope::new();
        let component = |host: &mut crate::runtime::Ctx<'_>| {
            use_reducers(
                host,
                reducers! {
                    explode => |_: &i64, _: &[i64]| panic!("reducer exploded"),
                    bump => |s: &i64, _: &[i64]| s + 1,
                },
                0i64,
            )
        };

        let (_, actions) = scope.render(component);
        let result = catch_unwind(AssertUnwindSafe(|| actions["explode"].call(&[])));
        assert!(result.is_err());

        // committed state is untouched by the failed dispatch
        let (count, _) = scope.render(component);
        assert_eq!(count, 0);
    }

    #[test]
    fn empty_mapping_yields_state_and_no_actions() {
        let mut scope = Scope::new();
        let component = |host: &mut crate::runtime::Ctx<'_>| {
            let empty: Reducers<i64, i64> = reducers! {};
            use_reducers(host, empty, 9i64)
        };

        let (state, actions) = scope.render(component);
        assert_eq!(state, 9);
        assert!(actions.is_empty());
    }

    #[test]
    fn independent_hook_calls_keep_separate_state() {
        let mut scope = Scope::new();
        let component = |host: &mut crate::runtime::Ctx<'_>| {
            let (count, counter) = use_reducers(
                host,
                reducers! { bump => |s: &i64, _: &[i64]| s + 1 },
                0i64,
            );
            let (label, labeler) = use_reducers(
                host,
                reducers! {
                    set => |_: &String, args: &[String]| {
                        args.first().cloned().unwrap_or_default()
                    },
                },
                String::new(),
            );
            ((count, label), (counter, labeler))
        };

        let ((count, label), (counter, labeler)) = scope.render(component);
        assert_eq!(count, 0);
        assert_eq!(label, "");

        counter["bump"].call(&[]);
        labeler["set"].call(&["ready".to_string()]);

        let ((count, label), _) = scope.render(component);
        assert_eq!(count, 1);
        assert_eq!(label, "ready");
    }
}
