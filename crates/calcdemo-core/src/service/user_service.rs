//! In-memory user registry.

use std::collections::HashMap;
use std::rc::Rc;

use crate::model::SharedPerson;

/// Registry of people keyed by name.
///
/// Entries are shared handles: the registry never copies a [`Person`], so
/// updates made through the registry are visible to every other holder.
///
/// [`Person`]: crate::model::Person
#[derive(Debug, Default)]
pub struct UserService {
    users: HashMap<String, SharedPerson>,
}

impl UserService {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Registers `person` under their current name.
    ///
    /// An existing entry with the same name is replaced.
    pub fn add_user(&mut self, person: SharedPerson) {
        let name = person.borrow().name().to_string();
        if self.users.insert(name, person).is_some() {
            tracing::debug!("replaced existing user entry");
        }
    }

    /// Get the person registered under `name`.
    #[must_use]
    pub fn get_user(&self, name: &str) -> Option<SharedPerson> {
        self.users.get(name).map(Rc::clone)
    }

    /// Remove the entry for `name`.
    ///
    /// Missing names are a no-op. Returns the removed handle, if any.
    pub fn remove_user(&mut self, name: &str) -> Option<SharedPerson> {
        self.users.remove(name)
    }

    /// Get all registered users.
    #[must_use]
    pub const fn all_users(&self) -> &HashMap<String, SharedPerson> {
        &self.users
    }

    /// Sets the age of the person registered under `name`.
    ///
    /// Returns `false` and changes nothing if `name` is not registered.
    pub fn update_user_age(&self, name: &str, age: i64) -> bool {
        match self.users.get(name) {
            Some(person) => {
                person.borrow_mut().set_age(age);
                true
            }
            None => false,
        }
    }

    /// Get the number of registered users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Returns handles for every registered user, ordered by name.
    #[must_use]
    pub fn sorted_users(&self) -> Vec<SharedPerson> {
        let mut entries: Vec<_> = self.users.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter().map(|(_, p)| Rc::clone(p)).collect()
    }

    /// Returns users aged 18 or over, ordered by name.
    #[must_use]
    pub fn adult_users(&self) -> Vec<SharedPerson> {
        self.sorted_users()
            .into_iter()
            .filter(|p| p.borrow().is_adult())
            .collect()
    }

    /// Finds users whose name contains `query`, ignoring case.
    #[must_use]
    pub fn find_users_by_name(&self, query: &str) -> Vec<SharedPerson> {
        let query = query.to_lowercase();
        self.sorted_users()
            .into_iter()
            .filter(|p| p.borrow().name().to_lowercase().contains(&query))
            .collect()
    }
}
