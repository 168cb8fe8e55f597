//! Text similarity heuristics for change classification.
//!
//! The section differs use these functions to decide whether an in-place
//! edit is cosmetic (typo fix, clarification), a meaning change, or an
//! unclassifiable rewrite. The heuristics are best-effort signals, tuned to
//! err toward flagging content for review rather than treating a meaning
//! change as cosmetic.

mod text;

pub use text::{classify, classify_text, EditClass};
