//! Derivation of dispatchable actions from a reducer mapping.

use indexmap::IndexMap;
use std::rc::Rc;

use crate::core::action::{Action, Actions};
use crate::core::host::{Latest, StateCell};
use crate::core::reducer::Reducers;

/// Derive one [`Action`] per reducer, bound to a state cell.
///
/// The key set is snapshotted from the mapping held in `latest` at
/// derivation time. Each action captures its **name**, not its reducer:
/// at call time it looks the reducer up through `latest` again, so an
/// action derived long ago still dispatches to whatever reducer the
/// holder was most recently given. Calling an action whose name has been
/// dropped from the holder's current mapping panics.
///
/// Most callers reach this through [`use_reducers`](crate::hooks::use_reducers),
/// which wires the cell and the holder up inside a [`Host`](crate::core::Host).
/// Deriving directly is useful when embedding into a runtime of your own:
///
/// ```rust
/// use actionmap::core::{map_reducers, Latest, StateCell};
/// use actionmap::reducers;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct Plain(RefCell<i64>);
///
/// impl StateCell<i64> for Plain {
///     fn get(&self) -> i64 {
///         *self.0.borrow()
///     }
///
///     fn update(&self, updater: &dyn Fn(&i64) -> i64) {
///         let next = updater(&self.0.borrow());
///         *self.0.borrow_mut() = next;
///     }
/// }
///
/// let cell = Rc::new(Plain(RefCell::new(0)));
/// let latest = Latest::new(reducers! {
///     add => |s: &i64, args: &[i64]| s + args.first().copied().unwrap_or(1),
/// });
///
/// let actions = map_reducers(Rc::clone(&cell) as Rc<dyn StateCell<i64>>, latest);
/// actions["add"].call(&[]);
/// actions["add"].call(&[4]);
/// assert_eq!(cell.get(), 5);
/// ```
pub fn map_reducers<S, A>(cell: Rc<dyn StateCell<S>>, latest: Latest<Reducers<S, A>>) -> Actions<A>
where
    S: 'static,
    A: 'static,
{
    let names: Vec<Rc<str>> = latest.with(|reducers| reducers.names().map(Rc::from).collect());

    let mut map = IndexMap::with_capacity(names.len());
    for name in names {
        let dispatch: Rc<dyn Fn(&[A])> = {
            let name = Rc::clone(&name);
            let cell = Rc::clone(&cell);
            let latest = latest.clone();
            Rc::new(move |args: &[A]| {
                latest.with(|reducers| {
                    let Some(reducer) = reducers.get(&name) else {
                        panic!("action '{name}' has no reducer in the latest mapping");
                    };
                    cell.update(&|state| reducer(state, args));
                });
            })
        };
        map.insert(name.to_string(), Action::new(name, dispatch));
    }

    tracing::debug!(actions = map.len(), "derived action mapping");
    Actions::from_map(map)
}
