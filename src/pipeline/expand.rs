//! Variable expansion for configuration values
//!
//! Config strings (clean targets, binaries, the source directory) may
//! reference variables with the `${var}` syntax. Values come from the
//! config env map first, then the process environment; unknown variables
//! are left in place.

use crate::error::{InterpolationError, InterpolationResult};
use regex::Regex;
use std::collections::HashMap;
use std::env;

/// Upper bound on nested variable references
const MAX_DEPTH: usize = 8;

/// Expand `${var}` references in a single configuration value
pub fn expand(s: &str, vars: &HashMap<String, String>) -> InterpolationResult<String> {
    expand_at_depth(s, vars, 0)
}

fn expand_at_depth(
    s: &str,
    vars: &HashMap<String, String>,
    depth: usize,
) -> InterpolationResult<String> {
    if depth > MAX_DEPTH {
        return Err(InterpolationError::RecursiveInterpolation);
    }

    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    let mut recursed = false;
    let result = re.replace_all(s, |caps: &regex::Captures| {
        let name = &caps[1];

        let value = vars.get(name).cloned().or_else(|| env::var(name).ok());

        match value {
            // A value may itself reference further variables
            Some(value) => match expand_at_depth(&value, vars, depth + 1) {
                Ok(expanded) => expanded,
                Err(_) => {
                    recursed = true;
                    String::new()
                }
            },
            // Unknown variable, leave it as-is
            None => format!("${{{}}}", name),
        }
    });

    if recursed {
        return Err(InterpolationError::RecursiveInterpolation);
    }

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_expansion() {
        let mut vars = HashMap::new();
        vars.insert("out".to_string(), "./public".to_string());

        let result = expand("rm -rf ${out}", &vars).unwrap();
        assert_eq!(result, "rm -rf ./public");
    }

    #[test]
    fn test_multiple_variables() {
        let mut vars = HashMap::new();
        vars.insert("bin".to_string(), "hugo".to_string());
        vars.insert("src".to_string(), "./hugo".to_string());

        let result = expand("${bin} --config ${src}/config.toml", &vars).unwrap();
        assert_eq!(result, "hugo --config ./hugo/config.toml");
    }

    #[test]
    fn test_environment_variable() {
        env::set_var("TEST_VAR_SITEPIPE", "test_value");

        let vars = HashMap::new();
        let result = expand("Value: ${TEST_VAR_SITEPIPE}", &vars).unwrap();
        assert_eq!(result, "Value: test_value");

        env::remove_var("TEST_VAR_SITEPIPE");
    }

    #[test]
    fn test_unknown_variable_left_in_place() {
        let vars = HashMap::new();
        let result = expand("path: ${undefined}", &vars).unwrap();
        assert_eq!(result, "path: ${undefined}");
    }

    #[test]
    fn test_nested_expansion() {
        let mut vars = HashMap::new();
        vars.insert("inner".to_string(), "value".to_string());
        vars.insert("outer".to_string(), "${inner}".to_string());

        let result = expand("Result: ${outer}", &vars).unwrap();
        assert_eq!(result, "Result: value");
    }

    #[test]
    fn test_no_variables() {
        let vars = HashMap::new();
        let result = expand("No variables here", &vars).unwrap();
        assert_eq!(result, "No variables here");
    }

    #[test]
    fn test_vars_take_precedence_over_environment() {
        env::set_var("SITEPIPE_PRECEDENCE", "from_env");

        let mut vars = HashMap::new();
        vars.insert("SITEPIPE_PRECEDENCE".to_string(), "from_vars".to_string());

        let result = expand("${SITEPIPE_PRECEDENCE}", &vars).unwrap();
        assert_eq!(result, "from_vars");

        env::remove_var("SITEPIPE_PRECEDENCE");
    }

    #[test]
    fn test_self_referential_variable_is_an_error() {
        let mut vars = HashMap::new();
        vars.insert("a".to_string(), "${a}".to_string());

        let result = expand("${a}", &vars);
        assert!(matches!(
            result,
            Err(InterpolationError::RecursiveInterpolation)
        ));
    }

    #[test]
    fn test_mutually_recursive_variables_are_an_error() {
        let mut vars = HashMap::new();
        vars.insert("a".to_string(), "${b}".to_string());
        vars.insert("b".to_string(), "${a}".to_string());

        let result = expand("${a}", &vars);
        assert!(matches!(
            result,
            Err(InterpolationError::RecursiveInterpolation)
        ));
    }
}
