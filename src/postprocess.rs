//! Overlap resolution for candidate rectangles.
//!
//! Contour analysis routinely produces several boxes over the same plate
//! (inner and outer edge of the frame, individual character groups). Any two
//! candidates whose axis extents intersect on both axes describe the same
//! physical region and are replaced by their minimum enclosing rectangle.

use crate::geometry::AxisRect;

/// Merge every cluster of transitively-overlapping rectangles into its
/// minimum enclosing rectangle, repeated to a fixed point: an enclosing
/// rectangle can overlap a candidate that neither of its sources touched.
///
/// The result is independent of the input order; surviving rectangles keep
/// the relative order of their first cluster member.
pub fn merge_overlapping(rects: &[AxisRect]) -> Vec<AxisRect> {
    let mut current: Vec<AxisRect> = rects.to_vec();
    loop {
        let merged = merge_once(&current);
        if merged.len() == current.len() {
            return merged;
        }
        current = merged;
    }
}

/// One clustering pass: union-find over the pairwise overlap relation, then
/// one enclosing rectangle per connected component.
fn merge_once(rects: &[AxisRect]) -> Vec<AxisRect> {
    let n = rects.len();
    let mut sets = DisjointSets::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rects[i].overlaps(&rects[j]) {
                sets.union(i, j);
            }
        }
    }

    let mut order: Vec<usize> = Vec::new();
    let mut clusters: Vec<Option<AxisRect>> = vec![None; n];
    for (i, rect) in rects.iter().enumerate() {
        let root = sets.find(i);
        match &mut clusters[root] {
            Some(acc) => *acc = acc.enclosing(rect),
            None => {
                clusters[root] = Some(*rect);
                order.push(root);
            }
        }
    }

    order.into_iter().filter_map(|root| clusters[root]).collect()
}

struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // Path halving keeps the trees shallow without a rank table.
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> AxisRect {
        AxisRect::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    fn as_sorted(mut rects: Vec<AxisRect>) -> Vec<AxisRect> {
        rects.sort_by_key(|r| (r.top_left.x, r.top_left.y, r.bottom_right.x, r.bottom_right.y));
        rects
    }

    #[test]
    fn disjoint_pair_is_left_unchanged() {
        let input = vec![rect(0, 0, 10, 10), rect(20, 20, 40, 30)];
        assert_eq!(merge_overlapping(&input), input);
    }

    #[test]
    fn overlapping_pair_merges_to_componentwise_extrema() {
        let input = vec![rect(0, 5, 10, 15), rect(5, 0, 20, 10)];
        assert_eq!(merge_overlapping(&input), vec![rect(0, 0, 20, 15)]);
    }

    #[test]
    fn merge_is_idempotent() {
        let input = vec![
            rect(0, 0, 12, 10),
            rect(10, 8, 30, 18),
            rect(50, 50, 80, 60),
        ];
        let once = merge_overlapping(&input);
        let twice = merge_overlapping(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_is_invariant_under_input_permutation() {
        let a = rect(0, 0, 12, 10);
        let b = rect(10, 8, 30, 18);
        let c = rect(28, 16, 44, 26);
        let d = rect(100, 0, 160, 12);

        let orders = [
            vec![a, b, c, d],
            vec![d, c, b, a],
            vec![b, d, a, c],
            vec![c, a, d, b],
        ];
        let expected = as_sorted(merge_overlapping(&orders[0]));
        for order in &orders[1..] {
            assert_eq!(as_sorted(merge_overlapping(order)), expected);
        }
    }

    #[test]
    fn transitive_chain_collapses_to_one_rect() {
        // a-b and b-c overlap, a-c do not; the whole chain is one cluster.
        let input = vec![
            rect(0, 0, 12, 10),
            rect(10, 8, 30, 18),
            rect(28, 16, 44, 26),
        ];
        assert_eq!(merge_overlapping(&input), vec![rect(0, 0, 44, 26)]);
    }

    #[test]
    fn enclosing_rect_can_absorb_a_third_candidate() {
        // c overlaps neither a nor b, but does overlap their enclosing
        // rectangle; the fixed-point pass must pick that up.
        let a = rect(0, 0, 12, 10);
        let b = rect(10, 8, 30, 18);
        let c = rect(20, 0, 28, 6);
        assert!(!a.overlaps(&c));
        assert!(!b.overlaps(&c));
        assert_eq!(merge_overlapping(&[a, b, c]), vec![rect(0, 0, 30, 18)]);
    }

    #[test]
    fn empty_and_singleton_inputs_pass_through() {
        assert!(merge_overlapping(&[]).is_empty());
        let one = vec![rect(3, 4, 9, 6)];
        assert_eq!(merge_overlapping(&one), one);
    }
}
