use std::rc::Rc;

use calcdemo_core::math::{add, average, divide, multiply, subtract};
use calcdemo_core::{Calculator, Operation, Person, UserService};

#[test]
fn test_arithmetic_properties() {
    for a in -20..=20 {
        for b in -20..=20 {
            assert_eq!(add(a, b), a + b);
            assert_eq!(subtract(a, b), a - b);
            assert_eq!(multiply(a, b), a * b);
            if b == 0 {
                assert_eq!(divide(a, b), 0);
            } else {
                assert_eq!(divide(a, b), a / b);
            }
        }
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn test_average_edge_cases() {
    assert_eq!(average(&[]), 0.0);
    assert_eq!(average(&[2, 4, 6]), 4.0);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_calculator_and_registry_together() {
    let mut calc = Calculator::new();
    let mut users = UserService::new();

    let age = calc.calculate_with(15, 15, Operation::Add);
    let alice = Person::shared("Alice", age);
    users.add_user(Rc::clone(&alice));

    let older = calc.calculate(age, 1, "add");
    assert!(users.update_user_age("Alice", older));

    assert_eq!(calc.history(), &[30, 31]);
    assert_eq!(alice.borrow().to_string(), "Person{Name: Alice, Age: 31}");

    users.remove_user("Alice");
    assert!(users.get_user("Alice").is_none());
    assert_eq!(alice.borrow().age(), 31, "caller keeps its handle after removal");
}

#[test]
fn test_history_survives_until_cleared() {
    let mut calc = Calculator::new();
    calc.calculate(10, 5, "add");
    calc.calculate(20, 4, "subtract");
    calc.calculate(1, 1, "unknown-op");
    assert_eq!(calc.history(), &[15, 16, 0]);

    calc.clear_history();
    assert!(calc.history().is_empty());
}
