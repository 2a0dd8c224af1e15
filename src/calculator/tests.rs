use super::calculator::{calculate, Calculator, PostfixNotation, ShuntingYard};
use crate::config::{Config, OverflowPolicy, TrailingInput};

const CASES: [(&str, i64); 10] = [
    ("1 - 2 + 3", 2),
    ("10 + 5 - ( 5 + 10 )", 0),
    ("1 - ( 2 + 3 )", -4),
    ("1 + 2", 3),
    ("( 1 )", 1),
    ("( 1 - 2 ) + ( 3 + 3 )", 5),
    ("0", 0),
    ("( ( 1 - 5 ) + 4 ) + ( 4 - 1 )", 3),
    ("( ( 1 - 5 ) + ( 4 + ( 3 ) ) ) + ( 4 - ( ( 1 ) ) )", 6),
    ("( 99 + 1 )", 100),
];

#[test]
fn test_calculate() {
    for (expression, expected) in CASES {
        assert_eq!(calculate(expression).unwrap(), expected, "{}", expression);
    }
}

#[test]
fn test_shunting_yard_calculator() {
    let calculator = Calculator::with_parser(ShuntingYard);

    for (expression, expected) in CASES {
        assert_eq!(
            calculator.calculate(expression).unwrap(),
            expected,
            "{}",
            expression
        );
    }
}

#[test]
fn test_postfix_notation_calculator() {
    let calculator = Calculator::with_parser(PostfixNotation);

    assert_eq!(calculator.calculate("1 2 - 3 +").unwrap(), 2);
    assert!(calculator.calculate("1 + 2").is_err());
}

#[test]
fn test_calculator_is_reusable() {
    let calculator = Calculator::new();

    assert!(calculator.calculate("( 1 + 2").is_err());
    assert_eq!(calculator.calculate("1 + 2").unwrap(), 3);
    assert_eq!(calculator.calculate("1 + 2").unwrap(), 3);
}

#[test]
fn test_calculator_errors_propagate() {
    assert_eq!(
        calculate("1 2 +").unwrap_err().get_error_name(),
        "UnexpectedInput"
    );
    assert_eq!(
        calculate("( 1 + 2").unwrap_err().get_error_name(),
        "UnexpectedInput"
    );
    assert_eq!(
        calculate("9223372036854775807 + 1")
            .unwrap_err()
            .get_error_name(),
        "Overflow"
    );
}

#[test]
fn test_calculator_config() {
    let calculator = Calculator::new().with_config(Config {
        trailing_input: TrailingInput::Ignore,
        overflow: OverflowPolicy::Saturating,
        ..Config::default()
    });

    assert_eq!(calculator.get_config().overflow, OverflowPolicy::Saturating);
    assert_eq!(calculator.calculate("1 2 +").unwrap(), 1);
    assert_eq!(
        calculator.calculate("-9223372036854775808 - 1").unwrap(),
        i64::MIN
    );
}
