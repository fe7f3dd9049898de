// Report generation: the sorted per-feature table and the per-label-group
// statistical summary. Pure transforms live in `groups`; terminal
// rendering (colors, headers) lives in `terminal`.

pub mod groups;
pub mod terminal;

pub use groups::{group_by_category, LabelGroupSummary};
