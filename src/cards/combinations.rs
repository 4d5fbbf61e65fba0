/// Number of ways to choose `k` items out of `n`
///
/// Returns 0 when `k > n`. Multiplies and divides alternately so the
/// intermediate value never exceeds `n * C(n, k)`, which keeps every
/// 52 card binomial well inside a u64.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = std::cmp::min(k, n - k) as u64;
    let n = n as u64;
    let mut result = 1u64;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result as usize
}

/// Returns every unordered combination of `k` items
///
/// Combinations come out in lexicographic order with respect to the order
/// of `items`: the first item is fixed as a prefix and the rest are chosen
/// from the items after it. `k > items.len()` returns no combinations.
///
/// # Example
///
/// ```
/// use parrot_poker::cards::{combinations, Deck};
/// let deck = Deck::new();
/// let holes = combinations(deck.cards(), 2);
/// assert_eq!(holes.len(), 1326);
/// ```
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k > items.len() {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(binomial(items.len(), k));
    let mut prefix = Vec::with_capacity(k);
    generate(&mut prefix, items, k, &mut result);
    result
}

fn generate<T: Copy>(prefix: &mut Vec<T>, remaining: &[T], k: usize, result: &mut Vec<Vec<T>>) {
    if k == 0 {
        result.push(prefix.clone());
        return;
    }
    for i in 0..(remaining.len() + 1 - k) {
        prefix.push(remaining[i]);
        generate(prefix, &remaining[i + 1..], k - 1, result);
        prefix.pop();
    }
}
