use std::cmp;
use std::ops::Range;

use super::EquityError;

/// Slice of `0..len` owned by worker `id` out of `n_workers`
///
/// Consecutive workers get adjacent ranges that together cover
/// `0..len` exactly once.
pub(crate) fn partition(id: usize, n_workers: usize, len: usize) -> Range<usize> {
    (id * len / n_workers)..((id + 1) * len / n_workers)
}

/// Runs `work` on every partition of `0..len`, one scoped thread each
///
/// Results come back in worker order once every thread has joined.
pub(crate) fn map_partitions<T, F>(
    len: usize,
    n_threads: usize,
    work: F,
) -> Result<Vec<T>, EquityError>
where
    T: Send,
    F: Fn(usize, Range<usize>) -> T + Sync,
{
    let n_workers = cmp::max(n_threads, 1);
    let work = &work;
    crossbeam::scope(|scope| {
        let handles: Vec<_> = (0..n_workers)
            .map(|id| scope.spawn(move |_| work(id, partition(id, n_workers, len))))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Result<Vec<T>, _>>()
    })
    .map_err(|_| EquityError::WorkerPanicked)?
    .map_err(|_| EquityError::WorkerPanicked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers() {
        for &len in &[0, 1, 7, 1081, 2_598_960] {
            for n in 1..=9 {
                let mut next = 0;
                for id in 0..n {
                    let range = partition(id, n, len);
                    assert_eq!(range.start, next);
                    next = range.end;
                }
                assert_eq!(next, len);
            }
        }
    }

    #[test]
    fn test_map_partitions() {
        let items: Vec<u64> = (1..=100).collect();
        let sums = map_partitions(items.len(), 4, |_, range| items[range].iter().sum::<u64>())
            .unwrap();
        assert_eq!(sums.len(), 4);
        assert_eq!(sums.iter().sum::<u64>(), 5050);
    }

    #[test]
    fn test_more_workers_than_items() {
        let ids = map_partitions(2, 5, |id, range| (id, range.len())).unwrap();
        assert_eq!(ids.iter().map(|&(_, n)| n).sum::<usize>(), 2);
        assert_eq!(ids.iter().map(|&(id, _)| id).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_threads_runs_one_worker() {
        let ids = map_partitions(3, 0, |id, range| (id, range)).unwrap();
        assert_eq!(ids, vec![(0, 0..3)]);
    }

    #[test]
    fn test_worker_panic() {
        let result = map_partitions(4, 2, |id, _| {
            if id == 1 {
                panic!("worker failed");
            }
            id
        });
        assert_eq!(result, Err(EquityError::WorkerPanicked));
    }
}
