pub mod capacity;
pub mod inventory;
pub mod model;
pub mod report;
pub mod summary;

#[cfg(test)]
mod capacity_test;
