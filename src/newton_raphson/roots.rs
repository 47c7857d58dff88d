// Roots discovered while scanning the grid.
//
// The registry is append only and the index handed back for a point depends on
// everything classified before it, so the scan order fixes the colouring.
//
// Under the reference policy every stored root within range is checked and
// the last one wins, and a freshly stored root is reported as the length of
// the list after the push: one past its real position. A later point landing
// on the same root gets the real position, so the two pixels pick different
// palette entries. The consistent policy takes the first match and always
// reports the storage position.

use super::complex::{ComplexNumber, ComplexMagnitude};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexPolicy {
    Reference,
    Consistent
}

impl IndexPolicy {
    pub fn from_name(name : &str) -> Option<IndexPolicy> {
        match name {
            "reference" => Some(IndexPolicy::Reference),
            "consistent" => Some(IndexPolicy::Consistent),
            _ => None
        }
    }
}

pub struct RootRegistry {
    proximity : f64,
    policy : IndexPolicy,
    roots : Vec<ComplexNumber>,
    max_root_index : usize
}

impl RootRegistry {
    pub fn new(proximity : f64, policy : IndexPolicy) -> RootRegistry {
        RootRegistry { proximity, policy, roots : Vec::new(), max_root_index : 0 }
    }

    fn find(&self, point : &ComplexNumber) -> Option<usize> {
        let mut matches = self.roots.iter().enumerate().filter(
            |(_, root)| (point - *root).absolute_value() <= self.proximity
        ).map(|(i, _)| i);
        match self.policy {
            IndexPolicy::Reference => matches.last(),
            IndexPolicy::Consistent => matches.next()
        }
    }

    pub fn classify(&mut self, point : &ComplexNumber) -> usize {
        let index = match self.find(point) {
            Some(i) => i,
            None => {
                self.roots.push(*point);
                match self.policy {
                    IndexPolicy::Reference => self.roots.len(),
                    IndexPolicy::Consistent => self.roots.len() - 1
                }
            }
        };
        self.max_root_index = self.max_root_index.max(index);
        index
    }

    pub fn roots(&self) -> &[ComplexNumber] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn max_root_index(&self) -> usize {
        self.max_root_index
    }

    pub fn into_roots(self) -> Vec<ComplexNumber> {
        self.roots
    }
}

#[cfg(test)]
mod tests {
    use num::complex::Complex;

    use super::*;

    #[test]
    fn test_new_root_is_one_past_position() {
        let mut registry = RootRegistry::new(0.01, IndexPolicy::Reference);
        assert!(registry.is_empty());
        assert_eq!(registry.classify(&Complex::new(-1.0, 0.0)), 1);
        assert_eq!(registry.classify(&Complex::new(0.5, 0.866)), 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.max_root_index(), 2);
    }

    #[test]
    fn test_matched_root_is_its_position() {
        let mut registry = RootRegistry::new(0.01, IndexPolicy::Reference);
        registry.classify(&Complex::new(-1.0, 0.0));
        assert_eq!(registry.classify(&Complex::new(-1.005, 0.0)), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut registry = RootRegistry::new(0.25, IndexPolicy::Reference);
        registry.classify(&Complex::new(0.0, 0.0));
        assert_eq!(registry.classify(&Complex::new(0.25, 0.0)), 0);
        assert_eq!(registry.classify(&Complex::new(0.0, -0.5)), 2);
    }

    #[test]
    fn test_last_match_wins() {
        let mut registry = RootRegistry::new(0.01, IndexPolicy::Reference);
        registry.classify(&Complex::new(0.0, 0.0));
        registry.classify(&Complex::new(0.015, 0.0));
        // Within range of both
        assert_eq!(registry.classify(&Complex::new(0.0075, 0.0)), 1);
    }

    #[test]
    fn test_consistent_policy() {
        let mut registry = RootRegistry::new(0.01, IndexPolicy::Consistent);
        assert_eq!(registry.classify(&Complex::new(0.0, 0.0)), 0);
        assert_eq!(registry.classify(&Complex::new(0.015, 0.0)), 1);
        assert_eq!(registry.classify(&Complex::new(0.0075, 0.0)), 0);
        assert_eq!(registry.classify(&Complex::new(0.001, 0.0)), 0);
        assert_eq!(registry.max_root_index(), 1);
    }

    #[test]
    fn test_nan_is_always_new() {
        let mut registry = RootRegistry::new(0.01, IndexPolicy::Reference);
        let nan = Complex::new(f64::NAN, f64::NAN);
        assert_eq!(registry.classify(&nan), 1);
        assert_eq!(registry.classify(&nan), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(IndexPolicy::from_name("reference"), Some(IndexPolicy::Reference));
        assert_eq!(IndexPolicy::from_name("consistent"), Some(IndexPolicy::Consistent));
        assert_eq!(IndexPolicy::from_name("first"), None);
    }
}
