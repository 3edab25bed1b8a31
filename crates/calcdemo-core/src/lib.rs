//! # calcdemo-core
//!
//! Sample domain used to exercise language tooling: a handful of small,
//! well-formed types that a language server can hover, navigate and
//! rename across.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`math`] - Stateless integer arithmetic
//! - [`model`] - The [`Person`] entity and its shared handle
//! - [`service`] - [`Calculator`] with history and the [`UserService`] registry
//! - [`config`] - Demo scenario configuration and loading
//! - [`demo`] - Scenario runner and report
//! - [`error`] - Error types for the library
//!
//! None of the domain operations fail. Division by zero, unknown calculator
//! operations, empty averages and missing users all produce a defined
//! fallback value instead of an error.
//!
//! ## Example
//!
//! ```rust
//! use calcdemo_core::{Calculator, Person, UserService};
//!
//! let mut calc = Calculator::new();
//! calc.calculate(10, 5, "add");
//! calc.calculate(20, 4, "subtract");
//! assert_eq!(calc.history(), &[15, 16]);
//!
//! let mut users = UserService::new();
//! users.add_user(Person::shared("Alice", 30));
//! assert!(users.update_user_age("Alice", 31));
//! assert!(!users.update_user_age("Nobody", 1));
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod math;
pub mod model;
pub mod service;

pub use config::DemoConfig;
pub use demo::{DemoReport, run_demo};
pub use error::{Error, Result};
pub use model::{Person, SharedPerson};
pub use service::{Calculator, Operation, UserService};
