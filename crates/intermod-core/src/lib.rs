//! # Intermodulation Product Enumeration
//!
//! This crate predicts the intermodulation-distortion (IMD) product
//! frequencies produced when several transmit carriers pass through a
//! nonlinear stage (a saturated amplifier, a corroded connector, a mixing
//! junction), up to a chosen odd distortion order.
//!
//! ## Overview
//!
//! For K carriers at frequencies f_1 .. f_K, a nonlinearity of order N
//! generates products at
//!
//! ```text
//!     f_IM = m_1*f_1 + m_2*f_2 + ... + m_K*f_K
//! ```
//!
//! for signed integer multipliers m_k with |m_1| + ... + |m_K| = N. The
//! enumerator walks every such multiplier combination exactly once with a
//! constrained depth-first search instead of sweeping a K-dimensional
//! coefficient grid, which keeps the work proportional to the number of
//! distinct products actually reported:
//!
//! - carrier indices are scanned in non-decreasing order, so permutations
//!   of equal-role terms are never revisited;
//! - negative terms may enter a combination only past the midpoint depth
//!   `ceil(N/2)`, which prunes the mirror half of the tree;
//! - a carrier never carries both a positive and a negative multiplier,
//!   and pure single-carrier harmonics (m_k = N alone) are excluded.
//!
//! ```text
//!  depth 1 ──► positive ──► positive ──► ... ──► depth N: emit
//!                  │ (once depth ≥ midpoint)
//!                  ▼
//!              negative ──► negative ──► ... ──► depth N: emit
//! ```
//!
//! ## Example
//!
//! ```rust
//! use intermod_core::ImdCalculator;
//!
//! // Two GSM downlink carriers, third-order products
//! let calc = ImdCalculator::new(vec![935.2, 947.6]);
//! let products = calc.enumerate(3).unwrap();
//!
//! assert_eq!(products.len(), 4);
//! for p in &products {
//!     assert_eq!(p.order(), 3);
//! }
//! // The classic IM3 pair 2*f1 - f2 and 2*f2 - f1 is reported
//! assert!(products.iter().any(|p| (p.frequency - 922.8).abs() < 1e-9));
//! assert!(products.iter().any(|p| (p.frequency - 960.0).abs() < 1e-9));
//! ```
//!
//! The `parallel` cargo feature adds `ImdCalculator::enumerate_parallel`,
//! which fans the top-level carrier loop out over a Rayon thread pool and
//! returns the identical product sequence.

pub mod calculator;
pub mod product;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use calculator::{enumerate_imd_products, ImdCalculator, OrderError};
pub use product::ImdProduct;

#[cfg(feature = "parallel")]
pub use parallel::enumerate_imd_products_parallel;
