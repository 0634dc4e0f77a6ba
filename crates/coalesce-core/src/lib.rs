#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod aggregate;
pub mod disjoint_set;
pub mod error;

pub use aggregate::AggregateDisjointSet;
pub use disjoint_set::DisjointSet;
pub use error::ElementError;

/// Returns the current version of the coalesce-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
