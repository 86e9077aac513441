//! Per-category answer pickers. Pure functions of already-fetched inputs; the collaborator calls live in [crate::dispatch].

pub mod arithmetic;
pub mod attribution;
pub mod synonym;
pub mod translation;
