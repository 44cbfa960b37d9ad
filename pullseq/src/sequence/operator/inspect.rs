use std::{fmt, rc::Rc};

use crate::sequence::{
    bounds::SizeBounds,
    core::{Node, Sequence},
};

use super::Action;

pub(crate) struct Inspect<'a, T> {
    upstream: Box<Sequence<'a, T>>,
    action: Action<'a, T>,
}

impl<'a, T: 'a> Inspect<'a, T> {
    pub(crate) fn upstream(&self) -> &Sequence<'a, T> {
        &self.upstream
    }

    pub(crate) fn pull(&mut self) -> Option<T> {
        let item = self.upstream.pull()?;
        (self.action)(&item);
        Some(item)
    }

    pub(crate) fn restart(&self) -> Self {
        Inspect {
            upstream: Box::new(self.upstream.restart()),
            action: Rc::clone(&self.action),
        }
    }

    pub(crate) fn size_bounds(&self) -> SizeBounds {
        self.upstream.size_bounds()
    }
}

impl<T> fmt::Debug for Inspect<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Call `action` on each element as it is pulled through, without
    /// altering it.
    ///
    /// The action runs once per produced element, in pull order, before the
    /// element is handed downstream.
    pub fn inspect(self, action: impl Fn(&T) + 'a) -> Self {
        Sequence::from_node(Node::Inspect(Inspect {
            upstream: Box::new(self),
            action: Rc::new(action),
        }))
    }
}
