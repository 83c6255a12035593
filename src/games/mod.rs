//! Game implementations built on the core board and rules.

pub mod kalaha;
