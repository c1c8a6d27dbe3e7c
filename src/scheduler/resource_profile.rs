//! Dense, per-resource remaining-capacity profile.
//!
//! One array per resource, indexed by integer time instant up to the
//! project horizon (a safe upper bound on any feasible makespan: the sum
//! of all task durations). Simpler and more cache-friendly than an
//! ordered breakpoint map for the horizon sizes this crate targets; an
//! ordered-map implementation over the same contract is an acceptable
//! substitute that produces identical schedules.

/// Remaining capacity of a single resource at every instant `[0, horizon)`.
#[derive(Debug, Clone)]
pub struct ResourceProfile {
    remaining: Vec<u64>,
}

impl ResourceProfile {
    /// Creates a profile initialized to `capacity` everywhere over
    /// `[0, horizon)`.
    pub fn new(capacity: u64, horizon: u64) -> Self {
        Self {
            remaining: vec![capacity; horizon.max(1) as usize],
        }
    }

    /// Returns the first instant in `[start, start + duration)` at which
    /// remaining capacity drops below `required`, if any.
    pub fn first_violation(&self, start: u64, duration: u64, required: u64) -> Option<u64> {
        let from = start as usize;
        let to = (start + duration) as usize;
        (from..to).find(|&t| self.remaining[t] < required).map(|t| t as u64)
    }

    /// Whether `required` units are available throughout `[start, start + duration)`.
    pub fn is_available(&self, start: u64, duration: u64, required: u64) -> bool {
        self.first_violation(start, duration, required).is_none()
    }

    /// Subtracts `required` from every instant in `[start, start + duration)`.
    ///
    /// Callers must have already confirmed availability via
    /// [`ResourceProfile::is_available`]; this does not re-check.
    pub fn reserve(&mut self, start: u64, duration: u64, required: u64) {
        let from = start as usize;
        let to = (start + duration) as usize;
        for slot in &mut self.remaining[from..to] {
            *slot -= required;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_available_initially() {
        let profile = ResourceProfile::new(2, 10);
        assert!(profile.is_available(0, 5, 2));
        assert!(profile.is_available(3, 7, 1));
    }

    #[test]
    fn test_reserve_then_conflict() {
        let mut profile = ResourceProfile::new(1, 10);
        profile.reserve(0, 5, 1);
        assert!(!profile.is_available(2, 3, 1));
        assert_eq!(profile.first_violation(2, 3, 1), Some(2));
        assert!(profile.is_available(5, 3, 1));
    }

    #[test]
    fn test_partial_overlap_detected() {
        let mut profile = ResourceProfile::new(2, 10);
        profile.reserve(0, 4, 2);
        // [0,4) fully consumed; [4,6) free.
        assert!(!profile.is_available(2, 4, 1));
        assert_eq!(profile.first_violation(2, 4, 1), Some(2));
        assert!(profile.is_available(4, 2, 2));
    }

    #[test]
    fn test_multiple_reservations_accumulate() {
        let mut profile = ResourceProfile::new(3, 10);
        profile.reserve(0, 5, 1);
        profile.reserve(0, 5, 1);
        assert!(profile.is_available(0, 5, 1));
        assert!(!profile.is_available(0, 5, 2));
    }
}
