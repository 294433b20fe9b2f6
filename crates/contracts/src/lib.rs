//! Wire contracts shared between the leaf diagnosis UI and the prediction service.

pub mod domain;
