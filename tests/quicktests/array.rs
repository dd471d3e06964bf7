use structures::array::{ArrayList, ListError};

use crate::Op;

const CAPACITY: usize = 8;

/// Applies a set of operations to a list and a plain vector. This way we
/// can ensure that after a random smattering of inserts and removals the
/// two hold the same elements in the same order, and that the list rejects
/// exactly the inserts the capacity cannot take.
fn do_ops(ops: &[Op<i8>], list: &mut ArrayList<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                if model.len() < CAPACITY {
                    assert_eq!(list.push_back(x), Ok(()));
                    model.push(x);
                } else {
                    assert_eq!(list.push_back(x), Err(ListError::Full));
                }
            }
            Op::Remove(x) => {
                let position = model.iter().position(|m| *m == x);
                if let Some(position) = position {
                    model.remove(position);
                }
                assert_eq!(list.remove(&x), position.is_some());
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut list = ArrayList::new(CAPACITY);
        let mut model = Vec::new();

        do_ops(&ops, &mut list, &mut model);
        list.len() == model.len() && list.as_slice() == model.as_slice()
    }
}

quickcheck::quickcheck! {
    fn insert_sorted_yields_ascending_order(xs: Vec<i8>) -> bool {
        let mut list = ArrayList::new(xs.len());
        for &x in &xs {
            list.insert_sorted(x).unwrap();
        }

        list.as_slice().windows(2).all(|pair| pair[0] <= pair[1])
    }
}

quickcheck::quickcheck! {
    fn find_reports_first_match_or_sentinel(xs: Vec<i8>, probe: i8) -> bool {
        let mut list = ArrayList::new(xs.len());
        for &x in &xs {
            list.push_back(x).unwrap();
        }

        match xs.iter().position(|x| *x == probe) {
            Some(index) => list.find(&probe) == index && list.contains(&probe),
            None => list.find(&probe) == list.len() && !list.contains(&probe),
        }
    }
}

quickcheck::quickcheck! {
    fn pushes_then_pops_come_back_in_order(xs: Vec<i8>) -> bool {
        let mut list = ArrayList::new(xs.len());
        for &x in &xs {
            list.push_back(x).unwrap();
        }

        let mut drained = Vec::new();
        while let Ok(x) = list.pop_front() {
            drained.push(x);
        }
        list.is_empty() && drained == xs
    }
}
