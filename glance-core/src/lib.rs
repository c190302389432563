pub mod layout;
pub mod naming;
pub mod svg;
