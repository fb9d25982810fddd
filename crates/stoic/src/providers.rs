pub mod base;
pub mod configs;
pub mod github_models;

#[cfg(test)]
pub mod mock;
