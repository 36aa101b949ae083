//! # Parallel Enumeration
//!
//! Spreads the enumeration across Rayon's thread pool. Enabled with the
//! `parallel` cargo feature:
//!
//! ```toml
//! [dependencies]
//! intermod-core = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! The search tree fans out at the first level, one subtree per carrier
//! index. Each worker owns a private level arena and enumerates one
//! subtree; the partial lists are concatenated in carrier order, so the
//! result is identical to the sequential enumeration, product order
//! included. Worth reaching for only when carrier count or order make the
//! sequential walk noticeably slow.

use rayon::prelude::*;

use crate::calculator::{validate_order, CoefficientSearch, ImdCalculator, OrderError};
use crate::product::ImdProduct;

/// Parallel counterpart of [`crate::enumerate_imd_products`].
///
/// Returns exactly the same products in exactly the same order.
pub fn enumerate_imd_products_parallel(
    transmit_freqs: &[f64],
    order: usize,
) -> Result<Vec<ImdProduct>, OrderError> {
    let midpoint = validate_order(order)?;
    let partials: Vec<Vec<ImdProduct>> = (0..transmit_freqs.len())
        .into_par_iter()
        .map(|index| CoefficientSearch::new(transmit_freqs, order, midpoint).run_subtree(index))
        .collect();
    Ok(partials.into_iter().flatten().collect())
}

impl ImdCalculator {
    /// Parallel counterpart of [`ImdCalculator::enumerate`].
    ///
    /// Returns exactly the same products in exactly the same order.
    pub fn enumerate_parallel(&self, order: usize) -> Result<Vec<ImdProduct>, OrderError> {
        enumerate_imd_products_parallel(self.transmit_freqs(), order)
    }
}
