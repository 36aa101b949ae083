//! # Intermodulation Coefficient Search
//!
//! Enumerates every intermodulation product of a given odd order for a set
//! of transmit carriers. A product is a signed multiplier vector
//! `[m_1, ..., m_K]` with `|m_1| + ... + |m_K| = N` together with the
//! frequency `m_1*f_1 + ... + m_K*f_K`.
//!
//! ## Search Strategy
//!
//! Rather than sweeping a K-dimensional grid of multipliers and rejecting
//! the invalid bulk, the search places one unit of magnitude per recursion
//! level and prunes as it goes:
//!
//! - Levels run from 1 to N; a complete product is emitted at level N.
//! - Positive units are placed first, scanning carrier indices in
//!   non-decreasing order so each multiset of carriers is built once.
//! - Negative units may start only after level `ceil(N/2)`. Any valid
//!   product has at least that many units of one sign, so restricting the
//!   majority sign to positive halves the tree without losing products
//!   (the all-negated mirror of a product is not enumerated).
//! - A carrier already holding a positive multiplier never receives a
//!   negative unit, and a carrier at multiplier `N - 1` receives no further
//!   positive unit, which excludes single-carrier harmonics.
//!
//! Partial multiplier vectors live in a preallocated arena of N rows of K
//! entries, one row per level; descending copies the parent row into the
//! child row. The only per-product allocation is the emitted vector itself.
//!
//! ## Ordering
//!
//! Products are reported in discovery order, which is deterministic for a
//! given carrier list and order. Frequencies are not deduplicated: distinct
//! multiplier vectors that land on the same frequency are all reported.
//!
//! # Example
//!
//! ```rust
//! use intermod_core::ImdCalculator;
//!
//! // Two PCS carriers, third order
//! let calc = ImdCalculator::new(vec![1930.0, 1990.0]);
//! let products = calc.enumerate(3).unwrap();
//!
//! // 2*f1 - f2 and 2*f2 - f1 land near the receive band
//! assert!(products.iter().any(|p| (p.frequency - 1870.0).abs() < 1e-9));
//! assert!(products.iter().any(|p| (p.frequency - 2050.0).abs() < 1e-9));
//! ```

use crate::product::ImdProduct;

/// Smallest distortion order that produces intermodulation terms.
const MIN_ORDER: usize = 3;

// ---------------------------------------------------------------------------
// Order validation
// ---------------------------------------------------------------------------

/// Rejected `order` argument for [`ImdCalculator::enumerate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    /// Even orders produce no odd-symmetry intermodulation terms.
    Even(usize),
    /// Orders below 3 have no mixing terms at all.
    TooSmall(usize),
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::Even(n) => {
                write!(f, "distortion order must be odd, got {}", n)
            }
            OrderError::TooSmall(n) => {
                write!(f, "distortion order must be at least {}, got {}", MIN_ORDER, n)
            }
        }
    }
}

impl std::error::Error for OrderError {}

/// Checks an order argument and returns the midpoint level `ceil(order/2)`.
///
/// Evenness is reported before the minimum, so `enumerate(2)` fails with
/// [`OrderError::Even`] rather than [`OrderError::TooSmall`].
pub(crate) fn validate_order(order: usize) -> Result<usize, OrderError> {
    if order % 2 == 0 {
        return Err(OrderError::Even(order));
    }
    if order < MIN_ORDER {
        return Err(OrderError::TooSmall(order));
    }
    Ok(order.div_ceil(2))
}

// ---------------------------------------------------------------------------
// Search core
// ---------------------------------------------------------------------------

/// Sign of the units being placed at the current point of the search.
///
/// The search starts positive and may switch to negative exactly once per
/// path; it never switches back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    Positive,
    Negative,
}

impl SearchMode {
    fn step(self) -> i32 {
        match self {
            SearchMode::Positive => 1,
            SearchMode::Negative => -1,
        }
    }
}

/// One in-progress enumeration over a fixed carrier list and order.
///
/// Holds the level arena and the accumulated products. Workers running
/// disjoint top-level subtrees each own one of these.
pub(crate) struct CoefficientSearch<'a> {
    freqs: &'a [f64],
    order: usize,
    midpoint: usize,
    /// Row `d` holds the multiplier vector after `d` units were placed.
    /// Row 0 stays all zero.
    levels: Vec<Vec<i32>>,
    products: Vec<ImdProduct>,
}

impl<'a> CoefficientSearch<'a> {
    pub(crate) fn new(freqs: &'a [f64], order: usize, midpoint: usize) -> Self {
        CoefficientSearch {
            freqs,
            order,
            midpoint,
            levels: vec![vec![0; freqs.len()]; order],
            products: Vec::new(),
        }
    }

    /// Runs the whole search and returns the products in discovery order.
    pub(crate) fn run(mut self) -> Vec<ImdProduct> {
        self.descend(1, 0.0, 0, SearchMode::Positive);
        self.products
    }

    /// Runs only the subtree whose first unit lands on carrier `index`.
    ///
    /// Concatenating the results for `index = 0..K` in order reproduces
    /// [`CoefficientSearch::run`] exactly.
    #[cfg(feature = "parallel")]
    pub(crate) fn run_subtree(mut self, index: usize) -> Vec<ImdProduct> {
        self.place(1, 0.0, index, SearchMode::Positive);
        self.products
    }

    fn descend(&mut self, level: usize, sum: f64, scan_from: usize, mode: SearchMode) {
        for index in scan_from..self.freqs.len() {
            self.place(level, sum, index, mode);
        }
    }

    /// Places one unit of `mode`'s sign on carrier `index` at `level`.
    fn place(&mut self, level: usize, sum: f64, index: usize, mode: SearchMode) {
        let current = self.levels[level - 1][index];
        let blocked = match mode {
            // A lone carrier at order N is a harmonic, not intermodulation.
            SearchMode::Positive => current == (self.order - 1) as i32,
            // Multipliers on one carrier never mix signs.
            SearchMode::Negative => current > 0,
        };
        if blocked {
            return;
        }

        let next_sum = sum + f64::from(mode.step()) * self.freqs[index];
        if level == self.order {
            let mut coefficients = self.levels[level - 1].clone();
            coefficients[index] += mode.step();
            self.products.push(ImdProduct {
                coefficients,
                frequency: next_sum,
            });
            return;
        }

        let (shallow, deep) = self.levels.split_at_mut(level);
        deep[0].copy_from_slice(&shallow[level - 1]);
        deep[0][index] += mode.step();

        // Same sign: resume the carrier scan where it stands.
        self.descend(level + 1, next_sum, index, mode);

        // The single switch to negative units, allowed once a majority of
        // levels is already positive. The negative scan restarts at carrier
        // 0 because every lower index was skipped while placing positives.
        if mode == SearchMode::Positive && level >= self.midpoint {
            self.descend(level + 1, next_sum, 0, SearchMode::Negative);
        }
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Enumerates intermodulation products for a fixed set of transmit carriers.
///
/// The carrier list is captured once; [`ImdCalculator::enumerate`] can then
/// be called for any number of distortion orders.
#[derive(Debug, Clone)]
pub struct ImdCalculator {
    transmit_freqs: Vec<f64>,
}

impl ImdCalculator {
    /// Creates a calculator over the given carrier frequencies.
    ///
    /// Frequencies may be in any consistent unit; reported product
    /// frequencies use the same unit. Duplicate carriers are legal and are
    /// treated as distinct positions.
    pub fn new(transmit_freqs: Vec<f64>) -> Self {
        ImdCalculator { transmit_freqs }
    }

    /// The carrier frequencies this calculator was built with.
    pub fn transmit_freqs(&self) -> &[f64] {
        &self.transmit_freqs
    }

    /// Enumerates every product of the given odd order.
    ///
    /// Fewer than two carriers cannot intermodulate, so the result is empty.
    /// Products appear in deterministic discovery order; frequencies may
    /// repeat and may be zero or negative.
    pub fn enumerate(&self, order: usize) -> Result<Vec<ImdProduct>, OrderError> {
        let midpoint = validate_order(order)?;
        Ok(CoefficientSearch::new(&self.transmit_freqs, order, midpoint).run())
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// One-shot enumeration without building an [`ImdCalculator`].
pub fn enumerate_imd_products(
    transmit_freqs: &[f64],
    order: usize,
) -> Result<Vec<ImdProduct>, OrderError> {
    let midpoint = validate_order(order)?;
    Ok(CoefficientSearch::new(transmit_freqs, order, midpoint).run())
}

// ===========================================================================
// Tests
// ===========================================================================
