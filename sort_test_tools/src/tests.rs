//! Generic sort tests, instantiated per implementation with `instantiate_sort_tests!`.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
const TEST_SIZES: [usize; 18] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 33, 50];

#[cfg(feature = "large_test_sizes")]
const TEST_SIZES: [usize; 23] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 33, 50, 64, 100, 128, 200, 500,
];

fn sort_comp<T, S>(v: &mut [T])
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();

    let original = v.to_vec();
    let mut expected = v.to_vec();
    expected.sort();

    S::sort(v);

    assert_eq!(
        &*v,
        &expected[..],
        "{} failed on {original:?} (seed: {seed})",
        S::name()
    );
}

fn test_impl<T, S>(pattern_fn: impl Fn(usize) -> Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        assert_eq!(test_data.len(), test_size);
        sort_comp::<T, S>(&mut test_data);
    }
}

pub fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut [(); 7]);
    sort_comp::<i32, S>(&mut [77]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [3, 2]);
    sort_comp::<i32, S>(&mut [5, 1, 3]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
    assert_eq!(patterns::random(20), patterns::random(20));
}

pub fn random<S: Sort>() {
    test_impl::<i32, S>(patterns::random);
}

pub fn random_i64<S: Sort>() {
    test_impl::<i64, S>(patterns::random_i64);
}

pub fn random_narrow<S: Sort>() {
    // Lots of duplicates, the harness draws from 1..=1000 in the same manner.
    test_impl::<i32, S>(|len| patterns::random_uniform(len, 1..11));
}

pub fn random_binary<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_uniform(len, 0..2));
}

pub fn random_zipf<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_zipf(len, 1.0));
}

pub fn random_negative<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::random_uniform(len, -1000..1000));
}

pub fn all_equal<S: Sort>() {
    test_impl::<i32, S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<i32, S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<i32, S>(patterns::descending);
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<i32, S>(patterns::pipe_organ);
}

pub fn saw_ascending<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::saw_ascending(len, 3));
}

pub fn saw_descending<S: Sort>() {
    test_impl::<i32, S>(|len| patterns::saw_descending(len, 4));
}

pub fn extreme_values<S: Sort>() {
    test_impl::<i64, S>(|len| {
        patterns::random_uniform(len, 0..3)
            .into_iter()
            .map(|x| match x {
                0 => i64::MIN,
                1 => 0,
                _ => i64::MAX,
            })
            .collect()
    });
}

pub fn sort_by_reverse<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut test_data = patterns::random(test_size);
        let mut expected = test_data.clone();
        expected.sort_by(|a, b| b.cmp(a));

        S::sort_by(&mut test_data, |a, b| b.cmp(a));

        assert_eq!(test_data, expected);
    }
}

pub fn sort_by_key_field<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut test_data: Vec<(i32, usize)> = patterns::random_uniform(test_size, 0..16)
            .into_iter()
            .zip(0..)
            .collect();

        S::sort_by(&mut test_data, |a, b| a.0.cmp(&b.0));

        assert!(test_data
            .windows(2)
            .all(|w| w[0].0.cmp(&w[1].0) != Ordering::Greater));

        let mut indices = test_data.iter().map(|(_, i)| *i).collect::<Vec<_>>();
        indices.sort();
        assert_eq!(indices, (0..test_size).collect::<Vec<_>>());
    }
}

pub fn string<S: Sort>() {
    test_impl::<String, S>(|len| {
        patterns::random(len)
            .into_iter()
            .map(|x| format!("{:010}", x.saturating_abs()))
            .collect()
    });
}

pub fn name_is_set<S: Sort>() {
    assert!(!S::name().is_empty());
}
