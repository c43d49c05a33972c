//! One request handler per entity. Each validates, makes at most one store
//! call, and always answers with a response.

pub mod book;
pub mod employee;
pub mod shift;

pub use book::BookHandler;
pub use employee::EmployeeHandler;
pub use shift::ShiftHandler;

/// Which entity's handler an event is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum HandlerKind {
    Employees,
    Books,
    Shifts,
}
