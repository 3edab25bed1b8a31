//! The `Person` record.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Shared, mutable handle to a [`Person`].
///
/// The registry and its callers hold the same handle, so an age change made
/// through one is visible through all of them.
pub type SharedPerson = Rc<RefCell<Person>>;

/// A person with a name and an age.
///
/// No invariant is enforced on `age`; negative values are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: i64,
}

impl Person {
    /// Creates a new person.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Creates a new person wrapped in a [`SharedPerson`] handle.
    #[must_use]
    pub fn shared(name: impl Into<String>, age: i64) -> SharedPerson {
        Rc::new(RefCell::new(Self::new(name, age)))
    }

    /// Returns the person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's age.
    #[must_use]
    pub const fn age(&self) -> i64 {
        self.age
    }

    /// Overwrites the person's age. No bounds check is applied.
    pub const fn set_age(&mut self, age: i64) {
        self.age = age;
    }

    /// Returns `true` if the person is 18 or older.
    #[must_use]
    pub const fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person{{Name: {}, Age: {}}}", self.name, self.age)
    }
}
