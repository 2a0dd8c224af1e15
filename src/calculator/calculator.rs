use tracing::{debug, instrument};

use crate::{
    ast::ast::Node,
    config::Config,
    errors::errors::Error,
    evaluator::evaluator::evaluate_with,
    parser::parser::parse_with,
    postfix::postfix::{parse_infix, parse_postfix},
};

/// A way of turning input text into a tree.
pub trait ExpressionParser {
    fn parse(&self, source: &str, config: &Config) -> Result<Node, Error>;
}

/// The LL(1) recursive descent parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveDescent;

impl ExpressionParser for RecursiveDescent {
    fn parse(&self, source: &str, config: &Config) -> Result<Node, Error> {
        parse_with(source, config)
    }
}

/// Infix input reordered with the shunting-yard algorithm.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShuntingYard;

impl ExpressionParser for ShuntingYard {
    fn parse(&self, source: &str, config: &Config) -> Result<Node, Error> {
        parse_infix(source, config)
    }
}

/// Input already in postfix order (`1 2 +`).
#[derive(Debug, Default, Clone, Copy)]
pub struct PostfixNotation;

impl ExpressionParser for PostfixNotation {
    fn parse(&self, source: &str, config: &Config) -> Result<Node, Error> {
        parse_postfix(source, config)
    }
}

/// Parses and evaluates expressions in one call.
///
/// A calculator holds no state between calls; every `calculate` builds a
/// fresh parser and tree.
#[derive(Debug, Clone, Default)]
pub struct Calculator<P = RecursiveDescent> {
    parser: P,
    config: Config,
}

impl Calculator<RecursiveDescent> {
    pub fn new() -> Self {
        Calculator::default()
    }
}

impl<P: ExpressionParser> Calculator<P> {
    pub fn with_parser(parser: P) -> Self {
        Calculator {
            parser,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn parse(&self, expression: &str) -> Result<Node, Error> {
        self.parser.parse(expression, &self.config)
    }

    /// Parses `expression` and reduces it to a single value. Errors from
    /// either stage are returned as they are.
    #[instrument(skip(self), level = "debug")]
    pub fn calculate(&self, expression: &str) -> Result<i64, Error> {
        let tree = self.parse(expression)?;
        let result = evaluate_with(&tree, self.config.overflow)?;
        debug!(result, "calculated");
        Ok(result)
    }
}

/// Evaluates `expression` with the recursive descent parser and the default
/// configuration.
pub fn calculate(expression: &str) -> Result<i64, Error> {
    Calculator::new().calculate(expression)
}
