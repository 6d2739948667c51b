//! Reading tests - resolve styles from synthetic packages.

mod errors;
mod files;
mod missing_styles;
mod resolved_styles;
