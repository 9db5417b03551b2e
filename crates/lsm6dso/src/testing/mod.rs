//! Testing infrastructure (mock interfaces).

pub(crate) mod mock;

pub(crate) use mock::MockInterface;
