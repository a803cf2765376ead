use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error capturado durante la ejecución de un hook (sólo el mensaje).
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct CapturedError {
    pub message: String,
}

impl CapturedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Resultado de invocar un hook. `call` describe el hook invocado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    Success { call: String, stdout: Option<String> },
    Failure { call: String, error: CapturedError, stdout: Option<String> },
}

impl CallOutcome {
    pub fn success(call: impl Into<String>) -> Self {
        CallOutcome::Success { call: call.into(), stdout: None }
    }

    pub fn failure(call: impl Into<String>, error: CapturedError) -> Self {
        CallOutcome::Failure { call: call.into(), error, stdout: None }
    }

    /// Adjunta la salida capturada del hook.
    pub fn with_stdout(self, output: impl Into<String>) -> Self {
        let output = Some(output.into());
        match self {
            CallOutcome::Success { call, .. } => CallOutcome::Success { call, stdout: output },
            CallOutcome::Failure { call, error, .. } => CallOutcome::Failure { call, error, stdout: output },
        }
    }

    pub fn call(&self) -> &str {
        match self {
            CallOutcome::Success { call, .. } | CallOutcome::Failure { call, .. } => call,
        }
    }

    pub fn is_failure(&self) -> bool { matches!(self, CallOutcome::Failure { .. }) }

    pub fn error(&self) -> Option<&CapturedError> {
        match self {
            CallOutcome::Failure { error, .. } => Some(error),
            CallOutcome::Success { .. } => None,
        }
    }

    pub fn stdout(&self) -> Option<&str> {
        match self {
            CallOutcome::Success { stdout, .. } | CallOutcome::Failure { stdout, .. } => stdout.as_deref(),
        }
    }
}

/// Colección ordenada de `CallOutcome`.
///
/// El orden de inserción es significativo: tras `merge` los outcomes BEFORE
/// preceden siempre a los AFTER.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutcomeSet {
    outcomes: Vec<CallOutcome>,
}

impl CallOutcomeSet {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, outcome: CallOutcome) { self.outcomes.push(outcome); }

    pub fn len(&self) -> usize { self.outcomes.len() }

    pub fn is_empty(&self) -> bool { self.outcomes.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, CallOutcome> { self.outcomes.iter() }

    pub fn has_failures(&self) -> bool { self.outcomes.iter().any(CallOutcome::is_failure) }

    pub fn has_stdouts(&self) -> bool { self.outcomes.iter().any(|o| o.stdout().is_some()) }

    pub fn failures(&self) -> impl Iterator<Item = &CallOutcome> { self.outcomes.iter().filter(|o| o.is_failure()) }

    /// Concatena `a` seguido de `b` en un set nuevo; no modifica las entradas.
    pub fn merge(a: &CallOutcomeSet, b: &CallOutcomeSet) -> CallOutcomeSet {
        let mut outcomes = Vec::with_capacity(a.len() + b.len());
        outcomes.extend(a.outcomes.iter().cloned());
        outcomes.extend(b.outcomes.iter().cloned());
        CallOutcomeSet { outcomes }
    }
}

impl FromIterator<CallOutcome> for CallOutcomeSet {
    fn from_iter<I: IntoIterator<Item = CallOutcome>>(iter: I) -> Self {
        CallOutcomeSet { outcomes: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a CallOutcomeSet {
    type Item = &'a CallOutcome;
    type IntoIter = std::slice::Iter<'a, CallOutcome>;

    fn into_iter(self) -> Self::IntoIter { self.outcomes.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(calls: &[(&str, bool)]) -> CallOutcomeSet {
        calls.iter()
             .map(|(c, ok)| if *ok { CallOutcome::success(*c) } else { CallOutcome::failure(*c, CapturedError::new("x")) })
             .collect()
    }

    #[test]
    fn empty_set_has_no_failures() {
        let s = CallOutcomeSet::new();
        assert!(s.is_empty());
        assert!(!s.has_failures());
        assert!(!s.has_stdouts());
    }

    #[test]
    fn has_failures_when_any_outcome_failed() {
        let s = set(&[("a", true), ("b", false), ("c", true)]);
        assert!(s.has_failures());
        assert_eq!(s.failures().map(|o| o.call()).collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn merge_keeps_before_then_after_order() {
        let before = set(&[("b1", true), ("b2", false)]);
        let after = set(&[("a1", true)]);
        let merged = CallOutcomeSet::merge(&before, &after);

        let calls: Vec<&str> = merged.iter().map(|o| o.call()).collect();
        assert_eq!(calls, vec!["b1", "b2", "a1"]);
        // las entradas no se tocan
        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn stdout_is_tracked_per_outcome() {
        let mut s = CallOutcomeSet::new();
        s.push(CallOutcome::success("quiet"));
        assert!(!s.has_stdouts());
        s.push(CallOutcome::failure("loud", CapturedError::new("nope")).with_stdout("printed"));
        assert!(s.has_stdouts());
        let loud = s.iter().last().unwrap();
        assert_eq!(loud.stdout(), Some("printed"));
        assert_eq!(loud.error().map(|e| e.to_string()), Some("nope".to_string()));
    }
}
