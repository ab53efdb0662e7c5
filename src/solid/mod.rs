//! SOLID principles. Each demo runs the broken design first, then the fix.

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;
