pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod tests;

#[doc(hidden)]
pub use paste;

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        $crate::paste::paste! {
            #[test]
            fn [<sort_ $test_fn_name>]() {
                $crate::tests::$test_fn_name::<$sort_impl>();
            }
        }
    };
}

/// Expands to one `#[test]` per function in [`tests`], each run against `$sort_impl`.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_seed);
        $crate::instantiate_sort_test_inner!($sort_impl, random);
        $crate::instantiate_sort_test_inner!($sort_impl, random_i64);
        $crate::instantiate_sort_test_inner!($sort_impl, random_narrow);
        $crate::instantiate_sort_test_inner!($sort_impl, random_binary);
        $crate::instantiate_sort_test_inner!($sort_impl, random_zipf);
        $crate::instantiate_sort_test_inner!($sort_impl, random_negative);
        $crate::instantiate_sort_test_inner!($sort_impl, all_equal);
        $crate::instantiate_sort_test_inner!($sort_impl, ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, descending);
        $crate::instantiate_sort_test_inner!($sort_impl, pipe_organ);
        $crate::instantiate_sort_test_inner!($sort_impl, saw_ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, saw_descending);
        $crate::instantiate_sort_test_inner!($sort_impl, extreme_values);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_reverse);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_key_field);
        $crate::instantiate_sort_test_inner!($sort_impl, string);
        $crate::instantiate_sort_test_inner!($sort_impl, name_is_set);
    };
}
