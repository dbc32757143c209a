use crate::treap::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Merges `r_tree` into `l_tree`. Every value in `l_tree` must be less than every value in
/// `r_tree`; this is not checked. The root with the higher priority becomes the root of the
/// merged tree, and `r_tree`'s root wins exact ties.
pub fn merge<T>(l_tree: &mut Tree<T>, r_tree: Tree<T>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                *l_tree = Some(l_node);
            } else {
                let mut lower = Some(l_node);
                merge(&mut lower, r_node.left.take());
                r_node.left = lower;
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

/// Splits `tree` around `pivot`. Values less than `pivot` stay in `tree` and values greater
/// than `pivot` are returned. Values equal to `pivot` stay in `tree` if `left_inclusive` is
/// set and are returned otherwise.
pub fn split<T, F>(tree: &mut Tree<T>, pivot: &T, left_inclusive: bool, cmp: &F) -> Tree<T>
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    match tree.take() {
        Some(mut node) => {
            let stays_left = match cmp(&node.value, pivot) {
                Ordering::Less => true,
                Ordering::Equal => left_inclusive,
                Ordering::Greater => false,
            };
            if stays_left {
                let ret = split(&mut node.right, pivot, left_inclusive, cmp);
                *tree = Some(node);
                ret
            } else {
                let res = split(&mut node.left, pivot, left_inclusive, cmp);
                *tree = node.left.take();
                node.left = res;
                Some(node)
            }
        },
        None => None,
    }
}

/// Splits `tree` into values less than or equal to `pivot` and values greater than `pivot`.
pub fn left_split<T, F>(mut tree: Tree<T>, pivot: &T, cmp: &F) -> (Tree<T>, Tree<T>)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let right = split(&mut tree, pivot, true, cmp);
    (tree, right)
}

/// Splits `tree` into values less than `pivot` and values greater than or equal to `pivot`.
pub fn right_split<T, F>(mut tree: Tree<T>, pivot: &T, cmp: &F) -> (Tree<T>, Tree<T>)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let right = split(&mut tree, pivot, false, cmp);
    (tree, right)
}

/// Inserts `new_node` into `tree`. The value of `new_node` must not already be in `tree`.
pub fn insert<T, F>(tree: &mut Tree<T>, new_node: Node<T>, cmp: &F)
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let (left, right) = left_split(tree.take(), &new_node.value, cmp);
    *tree = left;
    merge(tree, Some(Box::new(new_node)));
    merge(tree, right);
}

/// Removes the value equal to `value` from `tree` and returns it.
pub fn remove<T, F>(tree: &mut Tree<T>, value: &T, cmp: &F) -> Option<T>
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let (left, right) = right_split(tree.take(), value, cmp);
    let (middle, right) = left_split(right, value, cmp);
    *tree = left;
    merge(tree, right);
    middle.map(|node| {
        debug_assert!(node.left.is_none() && node.right.is_none());
        node.value
    })
}

pub fn get<'a, T, F>(tree: &'a Tree<T>, value: &T, cmp: &F) -> Option<&'a T>
where
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match cmp(value, &node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.value),
        }
    }
    None
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Counts the nodes in `tree` by walking it.
pub fn len<T>(tree: &Tree<T>) -> usize {
    let mut ret = 0;
    let mut stack = Vec::new();
    if let Some(ref node) = tree {
        stack.push(node);
    }
    while let Some(node) = stack.pop() {
        ret += 1;
        if let Some(ref left_node) = node.left {
            stack.push(left_node);
        }
        if let Some(ref right_node) = node.right {
            stack.push(right_node);
        }
    }
    ret
}

#[cfg(test)]
pub mod tests {
    use super::{get, insert, left_split, len, max, merge, min, remove, right_split, Tree};
    use crate::treap::node::Node;
    use rand::{Rng, SeedableRng, XorShiftRng};
    use std::cmp::Ordering;

    fn natural(a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }

    /// Asserts the search tree and heap invariants and returns the values in order.
    pub fn check_invariants<'a, T, F>(tree: &'a Tree<T>, cmp: &F) -> Vec<&'a T>
    where
        F: Fn(&T, &T) -> Ordering + ?Sized,
    {
        fn walk<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
            if let Some(ref node) = tree {
                for child in [&node.left, &node.right].iter() {
                    if let Some(ref child_node) = child {
                        assert!(node.priority >= child_node.priority);
                    }
                }
                walk(&node.left, values);
                values.push(&node.value);
                walk(&node.right, values);
            }
        }

        let mut values = Vec::new();
        walk(tree, &mut values);
        for pair in values.windows(2) {
            assert_eq!(cmp(pair[0], pair[1]), Ordering::Less);
        }
        values
    }

    fn build(rng: &mut XorShiftRng, values: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for value in values {
            if get(&tree, value, &natural).is_none() {
                insert(&mut tree, Node::new(*value, rng.gen::<f64>()), &natural);
            }
        }
        tree
    }

    fn seeded_rng() -> XorShiftRng {
        SeedableRng::from_seed([1, 1, 1, 1])
    }

    fn in_order(tree: &Tree<u32>) -> Vec<u32> {
        check_invariants(tree, &natural).into_iter().cloned().collect()
    }

    #[test]
    fn test_insert() {
        let mut rng = seeded_rng();
        let tree = build(&mut rng, &[5, 3, 8]);
        assert_eq!(in_order(&tree), vec![3, 5, 8]);
        assert_eq!(len(&tree), 3);
    }

    #[test]
    fn test_insert_many_keeps_invariants() {
        let mut rng = seeded_rng();
        let values = (0..1000).map(|_| rng.gen_range(0, 500)).collect::<Vec<u32>>();
        let tree = build(&mut rng, &values);

        let mut expected = values.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(in_order(&tree), expected);
    }

    #[test]
    fn test_insert_sorted_is_balanced() {
        let mut rng = seeded_rng();
        let values = (0..1000).collect::<Vec<u32>>();
        let tree = build(&mut rng, &values);

        fn height(tree: &Tree<u32>) -> usize {
            match tree {
                Some(node) => 1 + height(&node.left).max(height(&node.right)),
                None => 0,
            }
        }

        assert!(height(&tree) < 100);
    }

    #[test]
    fn test_left_split() {
        let mut rng = seeded_rng();
        for pivot in 0..12 {
            let tree = build(&mut rng, &[1, 3, 5, 7, 9, 10]);
            let (left, right) = left_split(tree, &pivot, &natural);
            let left_values = in_order(&left);
            let right_values = in_order(&right);

            assert!(left_values.iter().all(|value| *value <= pivot));
            assert!(right_values.iter().all(|value| *value > pivot));
            assert_eq!(len(&left) + len(&right), 6);
        }
    }

    #[test]
    fn test_right_split() {
        let mut rng = seeded_rng();
        for pivot in 0..12 {
            let tree = build(&mut rng, &[1, 3, 5, 7, 9, 10]);
            let (left, right) = right_split(tree, &pivot, &natural);
            let left_values = in_order(&left);
            let right_values = in_order(&right);

            assert!(left_values.iter().all(|value| *value < pivot));
            assert!(right_values.iter().all(|value| *value >= pivot));
            assert_eq!(len(&left) + len(&right), 6);
        }
    }

    #[test]
    fn test_split_places_equal_value() {
        let mut rng = seeded_rng();
        let tree = build(&mut rng, &[1, 2, 3]);
        let (left, right) = left_split(tree, &2, &natural);
        assert_eq!(in_order(&left), vec![1, 2]);
        assert_eq!(in_order(&right), vec![3]);

        let tree = build(&mut rng, &[1, 2, 3]);
        let (left, right) = right_split(tree, &2, &natural);
        assert_eq!(in_order(&left), vec![1]);
        assert_eq!(in_order(&right), vec![2, 3]);
    }

    #[test]
    fn test_split_empty() {
        let (left, right) = left_split(None, &1, &natural);
        assert!(left.is_none());
        assert!(right.is_none());
    }

    #[test]
    fn test_merge() {
        let mut rng = seeded_rng();
        let mut left = build(&mut rng, &[4, 0, 2, 6, 8]);
        let right = build(&mut rng, &[15, 11, 13, 19, 17]);
        let mut expected = in_order(&left);
        expected.extend(in_order(&right));

        merge(&mut left, right);
        assert_eq!(in_order(&left), expected);
        assert_eq!(len(&left), 10);
    }

    #[test]
    fn test_merge_tie_keeps_right_root() {
        let mut tree = Some(Box::new(Node::new(1, 0.5)));
        merge(&mut tree, Some(Box::new(Node::new(2, 0.5))));
        let root = tree.as_ref().map(|node| (node.value, node.left.as_ref().map(|n| n.value)));
        assert_eq!(root, Some((2, Some(1))));

        merge(&mut tree, Some(Box::new(Node::new(3, 0.25))));
        assert_eq!(tree.as_ref().map(|node| node.value), Some(2));
        assert_eq!(in_order(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_with_empty() {
        let mut rng = seeded_rng();
        let mut tree = build(&mut rng, &[1, 2]);
        merge(&mut tree, None);
        assert_eq!(in_order(&tree), vec![1, 2]);

        let mut empty = None;
        merge(&mut empty, tree);
        assert_eq!(in_order(&empty), vec![1, 2]);
    }

    #[test]
    fn test_merge_undoes_split() {
        let mut rng = seeded_rng();
        let values = (0..200).map(|_| rng.gen_range(0, 1000)).collect::<Vec<u32>>();
        let tree = build(&mut rng, &values);
        let expected = in_order(&tree);

        let (mut left, right) = left_split(tree, &500, &natural);
        merge(&mut left, right);
        assert_eq!(in_order(&left), expected);
    }

    #[test]
    fn test_remove() {
        let mut rng = seeded_rng();
        let mut tree = build(&mut rng, &[3, 5, 8]);
        assert_eq!(remove(&mut tree, &5, &natural), Some(5));
        assert_eq!(in_order(&tree), vec![3, 8]);
        assert_eq!(remove(&mut tree, &5, &natural), None);
        assert_eq!(in_order(&tree), vec![3, 8]);
    }

    #[test]
    fn test_get() {
        let mut rng = seeded_rng();
        let tree = build(&mut rng, &[3, 5, 8]);
        assert_eq!(get(&tree, &5, &natural), Some(&5));
        assert_eq!(get(&tree, &4, &natural), None);
        assert_eq!(get(&None, &4, &natural), None);
    }

    #[test]
    fn test_min_max() {
        let mut rng = seeded_rng();
        let tree = build(&mut rng, &[3, 5, 8, 1]);
        assert_eq!(min(&tree), Some(&1));
        assert_eq!(max(&tree), Some(&8));
        assert_eq!(min::<u32>(&None), None);
        assert_eq!(max::<u32>(&None), None);
    }

    #[test]
    fn test_custom_comparator() {
        let reverse = |a: &u32, b: &u32| b.cmp(a);
        let mut rng = seeded_rng();
        let mut tree = None;
        for value in &[5, 3, 8] {
            insert(&mut tree, Node::new(*value, rng.gen::<f64>()), &reverse);
        }
        let values = check_invariants(&tree, &reverse);
        assert_eq!(values, vec![&8, &5, &3]);
    }
}
