//! First-fit packing by worker index.
//!
//! # Algorithm
//!
//! 1. For each worker `w` in `0..P`:
//! 2. Scan tasks in problem order; take task `i` if it is included, not
//!    yet placed, and `w` is idle or `start_i > busy_until(w)`.
//! 3. On taking a task, `busy_until(w) = end_i`.
//! 4. The candidate is feasible iff every included task was placed.
//!
//! # Complexity
//! O(P * T) per candidate.

use super::{InclusionVector, PackOutcome, PackingPolicy, PackingScratch};
use crate::models::Problem;

/// Worker-by-worker, order-respecting first-fit packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstFitPacking;

impl PackingPolicy for FirstFitPacking {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn pack(
        &self,
        problem: &Problem,
        inclusion: InclusionVector,
        scratch: &mut PackingScratch,
    ) -> PackOutcome {
        scratch.reset();
        let (workers, assigned) = scratch.parts_mut();

        let mut value = 0;
        let mut placed = 0;
        for (w, worker) in workers.iter_mut().enumerate() {
            for (i, task) in problem.tasks.iter().enumerate() {
                if !inclusion.includes(i) || assigned[i].is_some() {
                    continue;
                }
                if worker.can_take(task) {
                    worker.take(task);
                    assigned[i] = Some(w);
                    value += problem.value_of(i);
                    placed += 1;
                }
            }
        }

        if placed == inclusion.included_count() {
            PackOutcome::Feasible { value }
        } else {
            PackOutcome::Infeasible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn problem(workers: usize) -> Problem {
        Problem::new(
            vec![Task::new(0, 2, 10), Task::new(1, 3, 5), Task::new(3, 5, 8)],
            workers,
            false,
        )
        .unwrap()
    }

    fn pack(problem: &Problem, flags: &[bool]) -> (PackOutcome, Vec<Option<usize>>) {
        let mut scratch = PackingScratch::for_problem(problem);
        let inclusion = InclusionVector::from_flags(flags);
        let outcome = FirstFitPacking.pack(problem, inclusion, &mut scratch);
        (outcome, scratch.assigned().to_vec())
    }

    #[test]
    fn test_empty_vector_is_feasible() {
        let (outcome, assigned) = pack(&problem(1), &[false, false, false]);
        assert_eq!(outcome, PackOutcome::Feasible { value: 0 });
        assert!(assigned.iter().all(Option::is_none));
    }

    #[test]
    fn test_single_worker_disjoint_tasks() {
        let (outcome, assigned) = pack(&problem(1), &[true, false, true]);
        assert_eq!(outcome, PackOutcome::Feasible { value: 18 });
        assert_eq!(assigned, vec![Some(0), None, Some(0)]);
    }

    #[test]
    fn test_single_worker_overlap_is_infeasible() {
        let (outcome, _) = pack(&problem(1), &[true, true, false]);
        assert_eq!(outcome, PackOutcome::Infeasible);
    }

    #[test]
    fn test_touching_dates_conflict() {
        // Task 1 ends at 3 and task 2 starts at 3.
        let (outcome, _) = pack(&problem(1), &[false, true, true]);
        assert_eq!(outcome, PackOutcome::Infeasible);
    }

    #[test]
    fn test_second_worker_picks_up_leftovers() {
        let (outcome, assigned) = pack(&problem(2), &[true, true, true]);
        assert_eq!(outcome, PackOutcome::Feasible { value: 23 });
        assert_eq!(assigned, vec![Some(0), Some(1), Some(0)]);
    }

    #[test]
    fn test_repacking_is_idempotent() {
        let p = problem(2);
        let mut scratch = PackingScratch::for_problem(&p);
        let v = InclusionVector::from_flags(&[true, true, false]);
        let first = FirstFitPacking.pack(&p, v, &mut scratch);
        let first_assigned = scratch.assigned().to_vec();
        let _ = FirstFitPacking.pack(&p, InclusionVector::full(3), &mut scratch);
        let second = FirstFitPacking.pack(&p, v, &mut scratch);
        assert_eq!(first, second);
        assert_eq!(first_assigned, scratch.assigned());
    }

    #[test]
    fn test_ignore_profit_counts_tasks() {
        let p = Problem::new(
            vec![Task::new(0, 2, 10), Task::new(1, 3, 5), Task::new(3, 5, 8)],
            2,
            true,
        )
        .unwrap();
        let (outcome, _) = pack(&p, &[true, true, true]);
        assert_eq!(outcome, PackOutcome::Feasible { value: 3 });
    }

    #[test]
    fn test_three_way_overlap_needs_three_workers() {
        let p = Problem::new(
            vec![
                Task::new(0, 1, 1),
                Task::new(2, 10, 1),
                Task::new(3, 4, 1),
                Task::new(5, 6, 1),
                Task::new(3, 7, 1),
            ],
            2,
            false,
        )
        .unwrap();
        // At date 3 tasks 1, 2 and 4 all run.
        let (outcome, assigned) = pack(&p, &[true, true, true, true, true]);
        assert_eq!(outcome, PackOutcome::Infeasible);
        assert_eq!(assigned[4], None);

        let p3 = Problem::new(p.tasks.clone(), 3, false).unwrap();
        let (outcome, assigned) = pack(&p3, &[true, true, true, true, true]);
        assert_eq!(outcome, PackOutcome::Feasible { value: 5 });
        assert_eq!(assigned, vec![Some(0), Some(0), Some(1), Some(1), Some(2)]);
    }
}
