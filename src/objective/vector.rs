//! Objective vectors and Pareto dominance.

use std::sync::Arc;

/// Optimization direction for a single objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher scores are better.
    Maximize,
    /// Lower scores are better.
    Minimize,
}

/// The shared shape of a run's objective space: one [`Direction`] per
/// objective, fixed at configuration time.
///
/// Layouts are cheap to clone (shared behind an `Arc`) and every
/// [`ObjectiveVector`] produced through [`scores`](ObjectiveLayout::scores)
/// carries a handle to its layout. Two vectors are only comparable when
/// their layouts agree in both length and direction flags; comparing
/// across layouts is a caller bug and panics.
///
/// # Example
///
/// ```
/// use moea::objective::ObjectiveLayout;
///
/// let layout = ObjectiveLayout::maximize(2);
/// let a = layout.scores(vec![1.0, 5.0]);
/// let b = layout.scores(vec![0.5, 4.0]);
/// assert!(a.dominates(&b));
/// ```
#[derive(Debug, Clone)]
pub struct ObjectiveLayout {
    directions: Arc<[Direction]>,
}

impl ObjectiveLayout {
    /// Creates a layout from explicit per-objective directions.
    pub fn new(directions: Vec<Direction>) -> Self {
        Self {
            directions: directions.into(),
        }
    }

    /// Layout with `n` objectives, all minimized.
    pub fn minimize(n: usize) -> Self {
        Self::new(vec![Direction::Minimize; n])
    }

    /// Layout with `n` objectives, all maximized.
    pub fn maximize(n: usize) -> Self {
        Self::new(vec![Direction::Maximize; n])
    }

    /// Number of objectives.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// True when the layout has no objectives (only the case for
    /// placeholder vectors of unevaluated individuals).
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Per-objective directions.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Wraps raw evaluation scores into an [`ObjectiveVector`].
    ///
    /// Non-finite scores (NaN or ±∞) are clamped to the worst finite
    /// bound for that objective's direction, with a warning.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the layout length.
    pub fn scores(&self, mut values: Vec<f64>) -> ObjectiveVector {
        assert_eq!(
            values.len(),
            self.directions.len(),
            "score count {} does not match objective layout length {}",
            values.len(),
            self.directions.len()
        );

        for (i, (v, dir)) in values.iter_mut().zip(self.directions.iter()).enumerate() {
            if !v.is_finite() {
                let worst = match dir {
                    Direction::Maximize => f64::MIN,
                    Direction::Minimize => f64::MAX,
                };
                log::warn!(
                    "non-finite score {v} for objective {i} clamped to worst bound {worst}"
                );
                *v = worst;
            }
        }

        ObjectiveVector {
            values,
            layout: self.clone(),
        }
    }

    fn matches(&self, other: &ObjectiveLayout) -> bool {
        Arc::ptr_eq(&self.directions, &other.directions)
            || self.directions == other.directions
    }
}

/// Three-way Pareto-dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The left vector dominates the right.
    Left,
    /// The right vector dominates the left.
    Right,
    /// Neither dominates (including componentwise-equal vectors).
    Neither,
}

/// An immutable tuple of per-objective scores plus the layout it was
/// evaluated under.
///
/// Vectors are created at evaluation time via
/// [`ObjectiveLayout::scores`] and are read-only afterwards. Individuals
/// that have not been evaluated yet carry the
/// [`unevaluated`](ObjectiveVector::unevaluated) placeholder, which no
/// comparison accepts.
#[derive(Debug, Clone)]
pub struct ObjectiveVector {
    values: Vec<f64>,
    layout: ObjectiveLayout,
}

impl ObjectiveVector {
    /// Placeholder for an individual that has not been evaluated.
    ///
    /// Any comparison against it panics, so selection code cannot
    /// silently operate on missing fitness.
    pub fn unevaluated() -> Self {
        Self {
            values: Vec::new(),
            layout: ObjectiveLayout::new(Vec::new()),
        }
    }

    /// True once real scores are present.
    pub fn is_evaluated(&self) -> bool {
        !self.layout.is_empty()
    }

    /// Per-objective scores.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The layout this vector was evaluated under.
    pub fn layout(&self) -> &ObjectiveLayout {
        &self.layout
    }

    /// Number of objectives.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for the unevaluated placeholder.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Three-way Pareto-dominance comparison.
    ///
    /// `Left` means `self` is at least as good as `other` in every
    /// objective (direction aware) and strictly better in at least one.
    /// Componentwise-equal vectors yield `Neither`.
    ///
    /// # Panics
    ///
    /// Panics when either vector is the unevaluated placeholder or the
    /// two layouts disagree in length or direction flags. Both indicate
    /// a caller bug, not a runtime condition.
    pub fn dominance(&self, other: &ObjectiveVector) -> Dominance {
        self.assert_comparable(other);

        let mut self_better = false;
        let mut other_better = false;

        for ((a, b), dir) in self
            .values
            .iter()
            .zip(other.values.iter())
            .zip(self.layout.directions())
        {
            let (a_wins, b_wins) = match dir {
                Direction::Maximize => (a > b, b > a),
                Direction::Minimize => (a < b, b < a),
            };
            self_better |= a_wins;
            other_better |= b_wins;
        }

        match (self_better, other_better) {
            (true, false) => Dominance::Left,
            (false, true) => Dominance::Right,
            _ => Dominance::Neither,
        }
    }

    /// True when `self` Pareto-dominates `other`.
    pub fn dominates(&self, other: &ObjectiveVector) -> bool {
        self.dominance(other) == Dominance::Left
    }

    fn assert_comparable(&self, other: &ObjectiveVector) {
        assert!(
            self.is_evaluated() && other.is_evaluated(),
            "cannot compare unevaluated objective vectors"
        );
        assert!(
            self.layout.matches(&other.layout),
            "objective layout mismatch: {:?} vs {:?}",
            self.layout.directions(),
            other.layout.directions()
        );
    }
}
