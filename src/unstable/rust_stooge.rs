//! Recursive stooge sort over an inclusive index range.

use std::cmp::Ordering;

use crate::progress::{NoProgress, Progress};

sort_impl!("rust_stooge_unstable");

/// Sorts the slice without reporting progress.
///
/// This sort is unstable and takes *O*(*n*^2.71) comparisons. It exists to be measured, not
/// to be used.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, T::cmp);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(h) = v.len().checked_sub(1) {
        stoogesort_by(
            v,
            0,
            h,
            &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
            &mut NoProgress,
        );
    }
}

/// Sorts `v[l..=h]` in place, ascending, calling `progress` once per recursive step.
///
/// Ranges with `l >= h` are left untouched. Panics if `l < h` and `h` is out of bounds.
#[inline]
pub fn stoogesort<T, P>(v: &mut [T], l: usize, h: usize, progress: &mut P)
where
    T: Ord,
    P: Progress + ?Sized,
{
    stoogesort_by(v, l, h, &mut |a: &T, b: &T| a.lt(b), progress);
}

/// Like [`stoogesort`], ordering elements by `is_less`.
pub fn stoogesort_by<T, F, P>(v: &mut [T], l: usize, h: usize, is_less: &mut F, progress: &mut P)
where
    F: FnMut(&T, &T) -> bool,
    P: Progress + ?Sized,
{
    if l >= h {
        return;
    }

    assert!(
        h < v.len(),
        "range end {h} out of bounds for slice of length {}",
        v.len()
    );

    stooge(v, l, h, is_less, progress);
}

fn stooge<T, F, P>(v: &mut [T], l: usize, h: usize, is_less: &mut F, progress: &mut P)
where
    F: FnMut(&T, &T) -> bool,
    P: Progress + ?Sized,
{
    if l >= h {
        return;
    }

    if is_less(&v[h], &v[l]) {
        v.swap(l, h);
    }

    let len = h - l + 1;
    if len > 2 {
        // `t < len / 2`, so both two-thirds ranges stay inside `[l, h]` and shrink.
        let t = len / 3;

        progress.advance();

        stooge(v, l, h - t, is_less, progress);
        stooge(v, l + t, h, is_less, progress);
        stooge(v, l, h - t, is_less, progress);
    }
}
