use crate::graph::AdjGraph;

/// Ordered partition of the nodes of a graph into classes
///
/// Every node additionally carries its *signature*: the list of its
/// neighbours, which colour refinement keeps sorted by the class
/// index of each neighbour. A signature is only meaningful relative to
/// the class assignment it was last sorted against.
///
/// Cloning performs a deep copy, so that search branches can isolate
/// and refine their own partition without affecting their siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    pub(crate) classes: Vec<Vec<usize>>,
    pub(crate) class_of: Vec<usize>,
    pub(crate) signatures: Vec<Vec<usize>>,
}

impl Partition {
    /// The coarsest partition of `g`, with all nodes in a single class
    ///
    /// A graph without nodes has a partition without classes.
    pub fn new(g: &AdjGraph) -> Self {
        let n = g.node_count();
        let classes = if n == 0 {
            Vec::new()
        } else {
            vec![Vec::from_iter(0..n)]
        };
        let signatures =
            Vec::from_iter((0..n).map(|u| g.neighbors(u).to_vec()));
        Self {
            classes,
            class_of: vec![0; n],
            signatures,
        }
    }

    pub fn node_count(&self) -> usize {
        self.class_of.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn class_size(&self, class: usize) -> usize {
        self.classes[class].len()
    }

    pub fn classes(&self) -> &[Vec<usize>] {
        &self.classes
    }

    pub fn class(&self, class: usize) -> &[usize] {
        &self.classes[class]
    }

    pub fn class_of(&self, u: usize) -> usize {
        self.class_of[u]
    }

    /// The first node of a class
    pub fn representative(&self, class: usize) -> usize {
        self.classes[class][0]
    }

    pub fn signature(&self, u: usize) -> &[usize] {
        &self.signatures[u]
    }

    /// Move the node at position `pos` of `class` into a new class of its own
    ///
    /// Returns the index of the class now holding only that node. If
    /// `class` is already a singleton nothing changes.
    pub fn isolate(&mut self, class: usize, pos: usize) -> usize {
        if self.classes[class].len() == 1 {
            return class;
        }
        let u = self.classes[class].remove(pos);
        let new_class = self.classes.len();
        self.classes.push(vec![u]);
        self.class_of[u] = new_class;
        new_class
    }

    /// Find the class to branch on
    ///
    /// This is the smallest class whose representative has not been
    /// matched yet, preferring lower class indices among equally
    /// small classes.
    pub fn smallest_unmatched_class(&self, matched: &[bool]) -> Option<usize> {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, members)| !matched[members[0]])
            .min_by_key(|(_, members)| members.len())
            .map(|(idx, _)| idx)
    }

    /// Check that the classes partition the node set exactly and
    /// agree with the node-to-class map
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.node_count()];
        for (idx, members) in self.classes.iter().enumerate() {
            if members.is_empty() {
                return false;
            }
            for &u in members {
                if u >= seen.len() || seen[u] || self.class_of[u] != idx {
                    return false;
                }
                seen[u] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }
}
