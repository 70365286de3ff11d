use std::cmp::Ordering;

use crate::partition::Partition;

use log::trace;

/// Compare two signatures lexicographically by the class indices of
/// their entries
///
/// Each signature is read against its own node-to-class map, so this
/// also compares nodes of two different graphs. If one signature is a
/// prefix of the other, the shorter one comes first.
pub fn compare_signatures(
    sig_a: &[usize],
    class_of_a: &[usize],
    sig_b: &[usize],
    class_of_b: &[usize],
) -> Ordering {
    sig_a
        .iter()
        .map(|&v| class_of_a[v])
        .cmp(sig_b.iter().map(|&v| class_of_b[v]))
}

impl Partition {
    /// Refine to the coarsest stable partition below the current one
    ///
    /// Returns the number of rounds that split at least one class.
    pub fn stabilize(&mut self) -> usize {
        let mut rounds = 0;
        while self.refine_round() {
            rounds += 1;
            trace!(
                "Refinement round {rounds}: {} classes",
                self.class_count()
            );
        }
        debug_assert!(self.is_consistent());
        rounds
    }

    /// One round of colour refinement
    ///
    /// Splits every class present at the start of the round into runs
    /// of nodes with identical signatures. New class indices are only
    /// published once all classes have been processed.
    pub fn refine_round(&mut self) -> bool {
        let class_of = &self.class_of;
        for sig in &mut self.signatures {
            sig.sort_by_key(|&v| class_of[v]);
        }

        let mut next_class_of = self.class_of.clone();
        let prev_count = self.class_count();
        let mut changed = false;
        for class in 0..prev_count {
            changed |= self.split_class(class, &mut next_class_of);
        }
        self.class_of = next_class_of;
        changed
    }

    fn split_class(&mut self, class: usize, next_class_of: &mut [usize]) -> bool {
        let mut members = std::mem::take(&mut self.classes[class]);
        let (signatures, class_of) = (&self.signatures, &self.class_of);
        let cmp = |u: usize, v: usize| {
            compare_signatures(&signatures[u], class_of, &signatures[v], class_of)
        };
        members.sort_by(|&u, &v| cmp(u, v));

        let mut new_classes = Vec::new();
        for pos in (1..members.len()).rev() {
            if cmp(members[pos - 1], members[pos]) != Ordering::Equal {
                new_classes.push(members.split_off(pos));
            }
        }

        let changed = !new_classes.is_empty();
        for run in new_classes {
            let idx = self.classes.len();
            for &u in &run {
                next_class_of[u] = idx;
            }
            self.classes.push(run);
        }
        self.classes[class] = members;
        changed
    }
}

/// Check whether two stable partitions cannot stem from isomorphic graphs
///
/// The partitions are incompatible if they differ in the number of
/// classes, or if for some class index the sizes or the signatures of
/// the representatives differ. A negative result does not imply
/// isomorphism.
pub fn incompatible(p1: &Partition, p2: &Partition) -> bool {
    if p1.class_count() != p2.class_count() {
        return true;
    }
    p1.classes.iter().zip(&p2.classes).any(|(c1, c2)| {
        c1.len() != c2.len()
            || compare_signatures(
                p1.signature(c1[0]),
                &p1.class_of,
                p2.signature(c2[0]),
                &p2.class_of,
            ) != Ordering::Equal
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjGraph;

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn path(n: usize) -> AdjGraph {
        AdjGraph::from_edges(n, (1..n).map(|i| (i - 1, i))).unwrap()
    }

    fn star(n: usize) -> AdjGraph {
        AdjGraph::from_edges(n, (1..n).map(|i| (0, i))).unwrap()
    }

    fn cycle(n: usize) -> AdjGraph {
        AdjGraph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n))).unwrap()
    }

    fn k33() -> AdjGraph {
        let edges = (0..3).flat_map(|i| (3..6).map(move |j| (i, j)));
        AdjGraph::from_edges(6, edges).unwrap()
    }

    fn prism() -> AdjGraph {
        AdjGraph::from_edges(
            6,
            [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (0, 3), (1, 4), (2, 5)],
        )
        .unwrap()
    }

    fn stable(g: &AdjGraph) -> Partition {
        let mut p = Partition::new(g);
        p.stabilize();
        p
    }

    #[test]
    fn signature_order() {
        let class_of = [0, 1, 1, 2];
        assert_eq!(
            compare_signatures(&[0, 1], &class_of, &[0, 2], &class_of),
            Ordering::Equal
        );
        assert_eq!(
            compare_signatures(&[0, 1], &class_of, &[0, 3], &class_of),
            Ordering::Less
        );
        assert_eq!(
            compare_signatures(&[3], &class_of, &[0, 1], &class_of),
            Ordering::Greater
        );
        assert_eq!(
            compare_signatures(&[1], &class_of, &[1, 0], &class_of),
            Ordering::Less
        );
        assert_eq!(compare_signatures(&[], &class_of, &[], &[]), Ordering::Equal);
    }

    #[test]
    fn signatures_across_partitions() {
        let class_of_a = [0, 1];
        let class_of_b = [1, 0];
        assert_eq!(
            compare_signatures(&[0], &class_of_a, &[1], &class_of_b),
            Ordering::Equal
        );
    }

    #[test]
    fn path_classes() {
        log_init();

        let p = stable(&path(4));
        assert!(p.is_consistent());
        assert_eq!(p.class_count(), 2);
        // endpoints have the smaller signature and keep class 0
        assert_eq!(p.class_of(0), 0);
        assert_eq!(p.class_of(3), 0);
        assert_eq!(p.class_of(1), 1);
        assert_eq!(p.class_of(2), 1);

        let p = stable(&path(5));
        assert_eq!(p.class_count(), 3);
        assert_eq!(p.class_of(1), p.class_of(3));
        assert_ne!(p.class_of(1), p.class_of(2));
    }

    #[test]
    fn regular_graphs_do_not_split() {
        log_init();

        for g in [cycle(6), k33(), prism()] {
            let mut p = Partition::new(&g);
            assert_eq!(p.stabilize(), 0);
            assert_eq!(p.class_count(), 1);
        }
    }

    #[test]
    fn idempotent() {
        log_init();

        for g in [path(7), star(5), cycle(5), prism()] {
            let mut p = stable(&g);
            let before = p.clone();
            assert_eq!(p.stabilize(), 0);
            assert_eq!(p.classes(), before.classes());
        }
    }

    #[test]
    fn monotone() {
        log_init();

        let g = path(9);
        let mut p = Partition::new(&g);
        let mut count = p.class_count();
        while p.refine_round() {
            assert!(p.class_count() > count);
            count = p.class_count();
            assert!(p.is_consistent());
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn monotone_across_isolation() {
        log_init();

        let g = cycle(8);
        let mut p = stable(&g);
        let mut count = p.class_count();
        while let Some(class) = (0..p.class_count()).find(|&c| p.class_size(c) > 1) {
            p.isolate(class, 0);
            assert!(p.class_count() > count);
            count = p.class_count();
            p.stabilize();
            assert!(p.is_consistent());
            assert!(p.class_count() >= count);
            count = p.class_count();
        }
        assert_eq!(count, g.node_count());
    }

    #[test]
    fn isolation_then_refinement() {
        log_init();

        let g = cycle(6);
        let mut p = stable(&g);
        p.isolate(0, 0);
        p.stabilize();
        assert!(p.is_consistent());
        // distance classes from node 0: {0}, {1, 5}, {2, 4}, {3}
        assert_eq!(p.class_count(), 4);
        assert_eq!(p.class_of(1), p.class_of(5));
        assert_eq!(p.class_of(2), p.class_of(4));
        assert_ne!(p.class_of(1), p.class_of(2));
        assert_ne!(p.class_of(0), p.class_of(3));
    }

    #[test]
    fn degree_mismatch_is_incompatible() {
        log_init();

        let mut p1 = Partition::new(&path(4));
        let mut p2 = Partition::new(&star(4));
        p1.refine_round();
        p2.refine_round();
        assert!(incompatible(&p1, &p2));
    }

    #[test]
    fn relabelled_graphs_are_compatible() {
        log_init();

        let s1 = AdjGraph::from_edges(5, [(0, 1), (0, 2), (0, 3), (3, 4)]).unwrap();
        let s2 = AdjGraph::from_edges(5, [(2, 0), (2, 1), (2, 4), (4, 3)]).unwrap();
        assert!(!incompatible(&stable(&s1), &stable(&s2)));
    }

    #[test]
    fn class_sizes_are_compared() {
        let g = AdjGraph::from_edges(4, []).unwrap();
        let mut p1 = Partition::new(&g);
        p1.isolate(0, 0);
        let p2 = Partition {
            classes: vec![vec![0, 1], vec![2, 3]],
            class_of: vec![0, 0, 1, 1],
            signatures: vec![vec![]; 4],
        };
        assert!(p2.is_consistent());
        assert!(incompatible(&p1, &p2));
    }

    #[test]
    fn regular_graphs_are_compatible() {
        log_init();

        assert!(!incompatible(&stable(&k33()), &stable(&prism())));
    }

    #[test]
    fn random_graphs() {
        use rand::prelude::*;
        use rand_xoshiro::Xoshiro256Plus;
        use testing::{randomize_labels, GraphIter};

        log_init();

        let mut rng = Xoshiro256Plus::seed_from_u64(1);
        for g in GraphIter::default().take(500) {
            let h = randomize_labels(g.clone(), &mut rng);
            let (g, h) = (AdjGraph::from(&g), AdjGraph::from(&h));
            let mut p = stable(&g);
            assert!(p.is_consistent());
            assert!(p.class_count() <= g.node_count());
            let before = p.clone();
            p.stabilize();
            assert_eq!(p, before);
            assert!(!incompatible(&p, &stable(&h)));
        }
    }
}
