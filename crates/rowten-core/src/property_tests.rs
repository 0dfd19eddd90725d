//! Property-based tests for tensor operations
//!
//! This module uses proptest to verify the container's laws across a wide
//! range of randomly generated shapes and contents.

#[cfg(test)]
mod tests {
    use crate::Tensor;
    use proptest::prelude::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    // Strategy for generating valid tensor shapes (1-4D, small extents)
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    // A shape together with an in-bounds multi-index into it
    fn shape_and_index() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        shape_strategy()
            .prop_flat_map(|shape| {
                let len = shape.len();
                (Just(shape), prop::collection::vec(any::<usize>(), len))
            })
            .prop_map(|(shape, raw)| {
                let index: Vec<usize> = raw
                    .iter()
                    .zip(shape.iter())
                    .map(|(&r, &extent)| r % extent)
                    .collect();
                (shape, index)
            })
    }

    // Two same-shaped integer tensors' contents
    fn shape_and_contents() -> impl Strategy<Value = (Vec<usize>, Vec<i64>, Vec<i64>)> {
        shape_strategy().prop_flat_map(|shape| {
            let total: usize = shape.iter().product();
            (
                Just(shape),
                prop::collection::vec(-1_000i64..1_000, total),
                prop::collection::vec(1i64..1_000, total),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_len_matches_shape_product(shape in shape_strategy(), new_shape in shape_strategy()) {
            let mut tensor = Tensor::<f64>::zeros(&shape);
            prop_assert_eq!(tensor.len(), shape.iter().product::<usize>());

            tensor.resize(&new_shape);
            prop_assert_eq!(tensor.len(), new_shape.iter().product::<usize>());
        }

        #[test]
        fn prop_chained_matches_direct((shape, index) in shape_and_index()) {
            let mut tensor = Tensor::<i64>::zeros(&shape);
            let mut counter = 0;
            tensor.fill_with(|_| {
                counter += 1;
                counter
            });

            let mut cursor = tensor.at(index[0]);
            for &i in &index[1..] {
                cursor = cursor.at(i);
            }
            prop_assert_eq!(*cursor.value(), tensor[&index[..]]);
        }

        #[test]
        fn prop_resize_discards_contents(shape in shape_strategy(), new_shape in shape_strategy()) {
            let mut tensor = Tensor::<i64>::from_elem(&shape, 7);
            tensor.resize(&new_shape);
            prop_assert!(tensor.iter().all(|&x| x == 0));
        }

        #[test]
        fn prop_add_then_sub_is_identity((shape, a, b) in shape_and_contents()) {
            let ta = Tensor::from_vec(a.clone(), &shape).unwrap();
            let tb = Tensor::from_vec(b, &shape).unwrap();

            let sum = &ta + &tb;
            let roundtrip = &sum - &tb;
            prop_assert_eq!(roundtrip.to_vec(), a);
        }

        #[test]
        fn prop_mul_then_div_is_identity((shape, a, b) in shape_and_contents()) {
            // b's entries are drawn from 1..1000, so division is exact
            let ta = Tensor::from_vec(a.clone(), &shape).unwrap();
            let tb = Tensor::from_vec(b, &shape).unwrap();

            let prod = &ta * &tb;
            let roundtrip = &prod / &tb;
            prop_assert_eq!(roundtrip.to_vec(), a);
        }

        #[test]
        fn prop_clone_is_deep((shape, index) in shape_and_index()) {
            let original = Tensor::<i64>::from_elem(&shape, 3);
            let mut copy = original.clone();
            copy[&index[..]] = 99;

            prop_assert_eq!(original[&index[..]], 3);
            prop_assert_eq!(copy[&index[..]], 99);
        }

        #[test]
        fn prop_shape_mismatch_is_detected(shape_a in shape_strategy(), shape_b in shape_strategy()) {
            prop_assume!(shape_a != shape_b);
            let ta = Tensor::<f64>::zeros(&shape_a);
            let tb = Tensor::<f64>::zeros(&shape_b);

            let compound = catch_unwind(AssertUnwindSafe(|| {
                let mut out = ta.clone();
                out += &tb;
            }));
            prop_assert!(compound.is_err());

            let binary = catch_unwind(AssertUnwindSafe(|| {
                let _ = &ta * &tb;
            }));
            prop_assert!(binary.is_err());
        }
    }
}
