//! Stateful services built on the arithmetic module and domain entities.
//!
//! Both services are single-threaded: [`UserService`] holds
//! `Rc<RefCell<Person>>` handles and is therefore neither `Send` nor `Sync`.

mod calculator;
mod user_service;

pub use calculator::{Calculator, Operation, UnknownOperation};
pub use user_service::UserService;
