//! Stooge sort, plus the plumbing needed to time it over generated integer data files.
//!
//! The sort lives in [`unstable::rust_stooge`] and follows the usual shape of a sort
//! implementation in this testbed: a `sort` / `sort_by` pair and a `SortImpl` registered with
//! [`sort_impl!`] so the shared test suite in `sort_test_tools` can drive it. [`data`],
//! [`measure`] and [`driver`] form the timing harness around it.

pub use sort_test_tools::Sort;

/// Defines `SortImpl` for the enclosing module, forwarding to its `sort` and `sort_by`.
///
/// The module must have `std::cmp::Ordering` in scope.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod config;
pub mod data;
pub mod driver;
pub mod error;
pub mod measure;
pub mod progress;
pub mod unstable;

pub use config::{Dataset, RunConfig};
pub use driver::run;
pub use error::{Error, Result};
pub use measure::Measurement;
pub use progress::{NoProgress, Progress, Spinner};
