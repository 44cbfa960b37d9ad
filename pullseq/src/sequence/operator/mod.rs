mod cycle;
mod drop;
mod enumerate;
mod filter;
mod inspect;
mod map;
mod take;
mod unique;

use std::rc::Rc;

pub(crate) use cycle::Cycle;
pub use cycle::Times;
pub(crate) use drop::{DropCount, DropWhile};
pub(crate) use filter::Filter;
pub(crate) use inspect::Inspect;
pub(crate) use take::{TakeCount, TakeWhile};

// user functions are shared between a node and its restarted copies
pub(crate) type Predicate<'a, T> = Rc<dyn Fn(&T) -> bool + 'a>;
pub(crate) type Action<'a, T> = Rc<dyn Fn(&T) + 'a>;

/// The two states of an operator that makes one permanent decision, such as
/// `drop_while` (has it stopped dropping?) or `take_while` (has it stopped
/// taking?).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Open,
    Settled,
}
