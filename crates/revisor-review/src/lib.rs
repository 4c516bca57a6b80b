//! Revisor Review
//!
//! Everything the review UI needs to present a correction list: icons,
//! descriptions, and the per-item accept/reject state.
//!
//! # Examples
//!
//! ```
//! use revisor_domain::{Correction, OperationKind, ReviewAction};
//! use revisor_review::{get_selected, to_selectable, toggle};
//!
//! let corrections = vec![
//!     Correction::new(ReviewAction::Missed { item: Some("Honorários".to_string()) }),
//!     Correction::new(ReviewAction::FalsePositive { item: Some("Nulidade".to_string()) }),
//! ];
//!
//! let mut list = to_selectable(OperationKind::SentenceReview, &corrections, true);
//! assert_eq!(list[0].description(), "Missed issue: \"Honorários\"");
//!
//! toggle(&mut list, "sentenceReview-1-false_positive");
//! assert_eq!(get_selected(&list), vec![corrections[0].clone()]);
//! ```

#![warn(missing_docs)]

pub mod describe;
pub mod icons;
pub mod selection;

pub use describe::describe;
pub use icons::{icon, DEFAULT_ICON};
pub use selection::{
    get_selected, selected_count, set_all, to_selectable, toggle, SelectableCorrection,
};
