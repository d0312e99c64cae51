//! `dosetools` is a semi-modular toolkit of fast and reliable libraries for
//! radiotherapy dose calculations
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use dosetools_utils as utils;

#[cfg(feature = "tables")]
#[cfg_attr(docsrs, doc(cfg(feature = "tables")))]
#[doc(inline)]
pub use dosetools_tables as tables;

#[cfg(feature = "calc")]
#[cfg_attr(docsrs, doc(cfg(feature = "calc")))]
#[doc(inline)]
pub use dosetools_calc as calc;
