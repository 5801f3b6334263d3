//! Collection types used across the crate, identical for std and no_std builds

pub use alloc::{
    collections::BTreeMap,
    vec,
    vec::Vec,
};
