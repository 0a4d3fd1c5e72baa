// Stooge sort. Swaps out-of-order endpoints, then sorts the first two thirds, the last two
// thirds and the first two thirds again.
pub mod rust_stooge;
