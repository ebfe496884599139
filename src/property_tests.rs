//! Property-based tests for shape and tensor invariants
//!
//! This module uses proptest to verify the addressing and equality contracts
//! across a wide range of randomly generated shapes and indices.

#[cfg(test)]
mod tests {
    use crate::{Index, Shape, Tensor};
    use proptest::prelude::*;

    // Strategy for generating valid shapes (1-4D, reasonable sizes)
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(2usize..10, 1..=4)
    }

    // A shape together with a valid index into it
    fn shape_and_index_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (shape_strategy(), prop::collection::vec(any::<usize>(), 4)).prop_map(|(dims, seed)| {
            let coords = dims.iter().zip(&seed).map(|(&e, &s)| s % e).collect();
            (dims, coords)
        })
    }

    #[test]
    fn test_proptest_smoke() {
        let shape = Shape::new(&[2, 3]).unwrap();
        assert_eq!(shape.numel(), 6);
    }

    proptest! {
        #[test]
        fn prop_shape_roundtrip(dims in shape_strategy()) {
            let shape = Shape::new(&dims).unwrap();
            prop_assert_eq!(shape.rank(), dims.len());
            for (axis, &extent) in dims.iter().enumerate() {
                prop_assert_eq!(shape.extent(axis), Ok(extent));
            }
            prop_assert_eq!(shape.numel(), dims.iter().product::<usize>());
        }

        #[test]
        fn prop_extent_past_rank_errors(dims in shape_strategy(), past in 0usize..4) {
            let shape = Shape::new(&dims).unwrap();
            prop_assert!(shape.extent(dims.len() + past).is_err());

            let index = Index::from(dims.clone());
            prop_assert!(index.coord(dims.len() + past).is_err());
        }

        // Decomposing every flat position through the strides and linearizing
        // it again must be the identity: offsets enumerate 0..numel in order.
        #[test]
        fn prop_offsets_enumerate_buffer(dims in shape_strategy()) {
            let shape = Shape::new(&dims).unwrap();
            let strides = shape.strides();
            for flat in 0..shape.numel() {
                let mut rem = flat;
                let index: Index = strides
                    .iter()
                    .map(|&stride| {
                        let coord = rem / stride;
                        rem %= stride;
                        coord
                    })
                    .collect();
                prop_assert_eq!(shape.offset_of(&index), Ok(flat));
            }
        }

        // Reading any in-bounds index never fails and sees row-major data.
        // The expected flat position is computed by Horner's rule, independent
        // of the stride machinery under test.
        #[test]
        fn prop_valid_index_reads((dims, coords) in shape_and_index_strategy()) {
            let shape = Shape::new(&dims).unwrap();
            let data: Vec<i64> = (0..shape.numel() as i64).collect();
            let tensor = Tensor::from_parts(data, shape.clone()).unwrap();

            let mut expected = 0usize;
            for (axis, &coord) in coords.iter().enumerate() {
                expected = expected * dims[axis] + coord;
            }

            let index = Index::from(coords);
            prop_assert!(expected < shape.numel());
            prop_assert_eq!(tensor.get(&index), Ok(expected as i64));
        }

        #[test]
        fn prop_equality_laws(dims in shape_strategy()) {
            let a = Shape::new(&dims).unwrap();
            let b = Shape::new(&dims).unwrap();
            prop_assert_eq!(&a, &a);
            prop_assert_eq!(&a, &b);

            // Appending a dimension always changes the shape.
            let mut longer = dims.clone();
            longer.push(2);
            let c = Shape::new(&longer).unwrap();
            prop_assert_ne!(&a, &c);

            let ia = Index::from(dims.clone());
            let ib = Index::from(dims);
            prop_assert_eq!(&ia, &ib);
        }

        // Integer tensors render exactly like the debug form of their data.
        #[test]
        fn prop_display_matches_flat_data(data in prop::collection::vec(any::<i32>(), 1..20)) {
            let tensor = Tensor::from_vec(data.clone()).unwrap();
            prop_assert_eq!(tensor.to_string(), format!("{:?}", data));
        }

        #[test]
        fn prop_from_ints_accepts_in_range(data in prop::collection::vec(-128i64..=127, 1..16)) {
            let tensor = crate::TensorI8::from_ints(&data).unwrap();
            for (i, &v) in data.iter().enumerate() {
                prop_assert_eq!(tensor.get(&Index::from([i])), Ok(v as i8));
            }
        }
    }
}
