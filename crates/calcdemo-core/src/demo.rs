//! Scenario runner.
//!
//! Drives the arithmetic module, [`Calculator`] and [`UserService`] through a
//! [`DemoConfig`] and collects what happened into a [`DemoReport`].

use std::fmt;

use serde::Serialize;

use crate::config::DemoConfig;
use crate::error::Result;
use crate::math;
use crate::model::{Person, SharedPerson};
use crate::service::{Calculator, UserService};

/// Outcome of the opening addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    /// Left operand.
    pub a: i64,
    /// Right operand.
    pub b: i64,
    /// `a + b`.
    pub result: i64,
}

/// Result of applying one configured age update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeUpdateOutcome {
    /// Name the update targeted.
    pub name: String,
    /// Requested age.
    pub age: i64,
    /// Whether a user with that name existed.
    pub applied: bool,
}

/// Everything the demo scenario produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    /// The opening addition.
    pub add: AddOutcome,
    /// Display form of the first configured person, as it was at creation.
    pub person: Option<String>,
    /// Calculator history after all steps.
    pub history: Vec<i64>,
    /// Mean of the calculator history.
    pub average: f64,
    /// Outcome of each age update.
    pub age_updates: Vec<AgeUpdateOutcome>,
    /// Final registry contents, ordered by name.
    pub users: Vec<Person>,
}

impl DemoReport {
    /// Serialize the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "calcdemo")?;
        writeln!(
            f,
            "Add({}, {}) = {}",
            self.add.a, self.add.b, self.add.result
        )?;
        if let Some(person) = &self.person {
            writeln!(f, "Person: {person}")?;
        }
        writeln!(f, "Calculator history: {:?}", self.history)?;

        let users: Vec<String> = self.users.iter().map(ToString::to_string).collect();
        writeln!(f, "Users: [{}]", users.join(", "))
    }
}

/// Run the scenario described by `config`.
///
/// The steps mirror a typical caller: an addition, registration of every
/// configured person, the calculator steps, then the age updates.
#[must_use]
pub fn run_demo(config: &DemoConfig) -> DemoReport {
    let span = tracing::info_span!("demo");
    let _guard = span.enter();

    let add = AddOutcome {
        a: config.arithmetic.a,
        b: config.arithmetic.b,
        result: math::add(config.arithmetic.a, config.arithmetic.b),
    };
    tracing::debug!(a = add.a, b = add.b, result = add.result, "addition");

    let people: Vec<SharedPerson> = config
        .people
        .iter()
        .map(|seed| Person::shared(seed.name.as_str(), seed.age))
        .collect();
    let person = people.first().map(|p| p.borrow().to_string());

    let mut calculator = Calculator::new();
    for step in &config.calculations {
        let result = calculator.calculate(step.a, step.b, &step.operation);
        tracing::debug!(
            a = step.a,
            b = step.b,
            operation = %step.operation,
            result,
            "calculation"
        );
    }

    let mut service = UserService::new();
    for handle in people {
        service.add_user(handle);
    }

    let age_updates = config
        .age_updates
        .iter()
        .map(|update| {
            let applied = service.update_user_age(&update.name, update.age);
            if !applied {
                tracing::warn!(name = %update.name, "age update for unknown user");
            }
            AgeUpdateOutcome {
                name: update.name.clone(),
                age: update.age,
                applied,
            }
        })
        .collect();

    let users = service
        .sorted_users()
        .iter()
        .map(|p| p.borrow().clone())
        .collect::<Vec<_>>();

    tracing::info!(
        calculations = calculator.history().len(),
        users = users.len(),
        "demo finished"
    );

    DemoReport {
        add,
        person,
        history: calculator.history().to_vec(),
        average: calculator.average_result(),
        age_updates,
        users,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::{AgeUpdate, ArithmeticConfig, CalculationStep, PersonSeed};

    #[test]
    fn test_default_scenario() {
        let report = run_demo(&DemoConfig::default());

        assert_eq!(report.add, AddOutcome { a: 5, b: 3, result: 8 });
        assert_eq!(
            report.person.as_deref(),
            Some("Person{Name: Alice, Age: 30}")
        );
        assert_eq!(report.history, vec![15, 16]);
        assert_eq!(report.average, 15.5);
        assert_eq!(report.users, vec![Person::new("Alice", 31), Person::new("Bob", 25)]);
        assert!(report.age_updates.iter().all(|u| u.applied));
    }

    #[test]
    fn test_default_scenario_text() {
        let text = run_demo(&DemoConfig::default()).to_string();
        assert_eq!(
            text,
            "calcdemo\n\
             Add(5, 3) = 8\n\
             Person: Person{Name: Alice, Age: 30}\n\
             Calculator history: [15, 16]\n\
             Users: [Person{Name: Alice, Age: 31}, Person{Name: Bob, Age: 25}]\n"
        );
    }

    #[test]
    fn test_empty_scenario() {
        let config = DemoConfig {
            arithmetic: ArithmeticConfig { a: 0, b: 0 },
            people: vec![],
            calculations: vec![],
            age_updates: vec![],
        };
        let report = run_demo(&config);

        assert_eq!(report.add.result, 0);
        assert!(report.person.is_none());
        assert!(report.history.is_empty());
        assert_eq!(report.average, 0.0);
        assert!(report.users.is_empty());

        let text = report.to_string();
        assert!(!text.contains("Person:"));
        assert!(text.contains("Calculator history: []"));
        assert!(text.ends_with("Users: []\n"));
    }

    #[test]
    fn test_degraded_results_flow_through() {
        let config = DemoConfig {
            arithmetic: ArithmeticConfig::default(),
            people: vec![PersonSeed::new("Alice", 30)],
            calculations: vec![
                CalculationStep::new(1, 1, "unknown-op"),
                CalculationStep::new(8, 0, "divide"),
            ],
            age_updates: vec![AgeUpdate::new("Nobody", 1)],
        };
        let report = run_demo(&config);

        assert_eq!(report.history, vec![0, 0]);
        assert_eq!(
            report.age_updates,
            vec![AgeUpdateOutcome {
                name: "Nobody".to_string(),
                age: 1,
                applied: false,
            }]
        );
        assert_eq!(report.users, vec![Person::new("Alice", 30)]);
    }

    #[test]
    fn test_duplicate_people_last_wins() {
        let config = DemoConfig {
            people: vec![PersonSeed::new("Alice", 30), PersonSeed::new("Alice", 60)],
            age_updates: vec![],
            ..DemoConfig::default()
        };
        let report = run_demo(&config);

        assert_eq!(
            report.person.as_deref(),
            Some("Person{Name: Alice, Age: 30}")
        );
        assert_eq!(report.users, vec![Person::new("Alice", 60)]);
    }

    #[test]
    fn test_report_json() {
        let json = run_demo(&DemoConfig::default()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["add"]["result"], 8);
        assert_eq!(value["history"], serde_json::json!([15, 16]));
        assert_eq!(value["users"][0]["name"], "Alice");
        assert_eq!(value["users"][0]["age"], 31);
        assert_eq!(value["age_updates"][0]["applied"], true);
    }
}
