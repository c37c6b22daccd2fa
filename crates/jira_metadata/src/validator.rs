//! Aggregates per-field validity checks into a single form-level check.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

type ValidateFn = Box<dyn Fn() -> bool>;

/// Validators registered by the fields of one form.
///
/// Each validator is expected to refresh its own field's error state when
/// called, so [`ValidatorRegistry::validate_all`] always runs all of them.
pub struct ValidatorRegistry<K = String> {
    validators: HashMap<K, ValidateFn>,
}

impl<K> Default for ValidatorRegistry<K> {
    fn default() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }
}

impl<K> fmt::Debug for ValidatorRegistry<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("keys", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> ValidatorRegistry<K>
where
    K: Eq + Hash,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `validate` under `key`, replacing any previous validator.
    pub fn register<F>(&mut self, key: K, validate: F)
    where
        F: Fn() -> bool + 'static,
    {
        self.validators.insert(key, Box::new(validate));
    }

    /// Removes the validator under `key`. Returns whether one was present.
    pub fn unregister(&mut self, key: &K) -> bool {
        self.validators.remove(key).is_some()
    }

    /// Whether a validator is registered under `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.validators.contains_key(key)
    }

    /// Number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Removes every validator.
    pub fn clear(&mut self) {
        self.validators.clear();
    }

    /// Runs every validator and reports whether all of them passed.
    pub fn validate_all(&self) -> bool {
        self.validators
            .values()
            .fold(true, |valid, validate| validate() && valid)
    }
}

#[cfg(test)]
mod tests {
    use super::ValidatorRegistry;
    use std::cell::Cell;
    use std::rc::Rc;

    fn spy(result: bool) -> (Rc<Cell<usize>>, impl Fn() -> bool + 'static) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        (calls, move || {
            counter.set(counter.get() + 1);
            result
        })
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry: ValidatorRegistry = ValidatorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.validate_all());
    }

    #[test]
    fn every_validator_runs_even_after_a_failure() {
        let mut registry = ValidatorRegistry::new();
        let (first, first_fn) = spy(true);
        let (second, second_fn) = spy(false);
        let (third, third_fn) = spy(true);
        registry.register("summary".to_string(), first_fn);
        registry.register("priority".to_string(), second_fn);
        registry.register("labels".to_string(), third_fn);

        assert!(!registry.validate_all());
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
        assert_eq!(third.get(), 1);
    }

    #[test]
    fn all_passing_validators_make_the_form_valid() {
        let mut registry = ValidatorRegistry::new();
        registry.register(1u32, || true);
        registry.register(2u32, || true);
        assert!(registry.validate_all());
    }

    #[test]
    fn registering_a_key_twice_keeps_the_latest() {
        let mut registry = ValidatorRegistry::new();
        let (old, old_fn) = spy(false);
        let (new, new_fn) = spy(true);
        registry.register("a", old_fn);
        registry.register("a", new_fn);

        assert_eq!(registry.len(), 1);
        assert!(registry.validate_all());
        assert_eq!(old.get(), 0);
        assert_eq!(new.get(), 1);
    }

    #[test]
    fn unregister_missing_key_is_a_noop() {
        let mut registry = ValidatorRegistry::new();
        registry.register("a", || false);

        assert!(!registry.unregister(&"missing-key"));
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(&"a"));
        assert!(!registry.contains(&"a"));
        assert!(registry.validate_all());
    }

    #[test]
    fn clear_drops_all_validators() {
        let mut registry = ValidatorRegistry::new();
        registry.register("a", || false);
        registry.register("b", || false);
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.validate_all());
    }
}
