use calcdemo_core::config::{ArithmeticConfig, PersonSeed};
use calcdemo_core::{DemoConfig, Error, Person, run_demo};

use crate::common::test_utils::config_fixture_path;

#[test]
fn test_minimal_fixture() -> anyhow::Result<()> {
    let config = DemoConfig::load_from(&config_fixture_path("minimal.toml"))?;

    assert_eq!(config.arithmetic, ArithmeticConfig::default());
    assert_eq!(config.people, vec![PersonSeed::new("Alice", 30)]);

    let report = run_demo(&config);
    assert_eq!(report.add.result, 8);
    assert!(report.history.is_empty());
    assert_eq!(report.users, vec![Person::new("Alice", 30)]);
    Ok(())
}

#[test]
#[allow(clippy::float_cmp)]
fn test_full_fixture() -> anyhow::Result<()> {
    let config = DemoConfig::load_from(&config_fixture_path("full.toml"))?;
    let report = run_demo(&config);

    assert_eq!(report.add.result, 13);
    assert_eq!(
        report.person.as_deref(),
        Some("Person{Name: John Doe, Age: 30}")
    );
    assert_eq!(report.history, vec![15, 28, 0, 0]);
    assert_eq!(report.average, 10.75);
    assert_eq!(
        report.users,
        vec![
            Person::new("Alice Smith", 25),
            Person::new("Bob Johnson", 18),
            Person::new("John Doe", 30),
        ]
    );

    let applied: Vec<bool> = report.age_updates.iter().map(|u| u.applied).collect();
    assert_eq!(applied, vec![true, false]);
    Ok(())
}

#[test]
fn test_full_fixture_text_report() -> anyhow::Result<()> {
    let config = DemoConfig::load_from(&config_fixture_path("full.toml"))?;
    let text = run_demo(&config).to_string();

    assert!(text.contains("Add(6, 7) = 13"));
    assert!(text.contains("Calculator history: [15, 28, 0, 0]"));
    assert!(text.contains("Person{Name: Bob Johnson, Age: 18}"));
    Ok(())
}

#[test]
fn test_missing_fixture() {
    let result = DemoConfig::load_from(&config_fixture_path("does_not_exist.toml"));
    assert!(matches!(result, Err(Error::ConfigNotFound(_))));
}
