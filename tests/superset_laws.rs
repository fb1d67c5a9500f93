//! Property-based tests for SuperSet laws.
//!
//! These tests verify that every set-algebra operation agrees with the
//! textbook definition computed on `std::collections::HashSet`, and that the
//! operations relate to each other as set theory requires.

use std::collections::HashSet;

use proptest::prelude::*;
use superset::set_algebra::SuperSet;

/// Small element domain so that generated operands overlap often.
fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..20_i32, 0..30)
}

fn model(elements: &[i32]) -> HashSet<i32> {
    elements.iter().copied().collect()
}

fn members(set: &SuperSet<i32>) -> HashSet<i32> {
    set.iter().copied().collect()
}

// =============================================================================
// Union Laws
// Description: membership is set-union, size is bounded, union is idempotent
// =============================================================================

proptest! {
    #[test]
    fn prop_union_membership_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let union = set_a.union(&elements_b);

        let expected: HashSet<i32> = model(&elements_a).union(&model(&elements_b)).copied().collect();
        prop_assert_eq!(members(&union), expected);
        prop_assert!(union.len() <= elements_a.len() + elements_b.len());
    }

    #[test]
    fn prop_union_idempotent_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a);
        prop_assert_eq!(set_a.union(&set_a), set_a);
    }

    #[test]
    fn prop_union_commutativity_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let set_b = SuperSet::from(elements_b.clone());
        prop_assert_eq!(set_a.union(&elements_b), set_b.union(&elements_a));
    }
}

// =============================================================================
// Complement Laws
// Description: A \ B keeps exactly the elements of A absent from B
// =============================================================================

proptest! {
    #[test]
    fn prop_complement_membership_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let complement = set_a.complement(&elements_b);

        let expected: HashSet<i32> = model(&elements_a).difference(&model(&elements_b)).copied().collect();
        prop_assert_eq!(members(&complement), expected);
    }

    #[test]
    fn prop_complement_self_is_empty_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a);
        prop_assert!(set_a.complement(&set_a).is_empty());
    }

    #[test]
    fn prop_complement_empty_is_identity_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a);
        prop_assert_eq!(set_a.complement(Vec::<i32>::new()), set_a);
    }
}

// =============================================================================
// Symmetric Difference Laws
// Description: A △ B = (A \ B) ∪ (B \ A), symmetric, A △ A = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_is_union_of_complements_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let set_b = SuperSet::from(elements_b.clone());

        let expected = set_a.complement(&set_b).union(set_b.complement(&set_a));
        prop_assert_eq!(set_a.difference(&elements_b), expected);
    }

    #[test]
    fn prop_difference_membership_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let difference = set_a.difference(&elements_b);

        let expected: HashSet<i32> = model(&elements_a)
            .symmetric_difference(&model(&elements_b))
            .copied()
            .collect();
        prop_assert_eq!(members(&difference), expected);
    }

    #[test]
    fn prop_difference_symmetry_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let set_b = SuperSet::from(elements_b.clone());
        prop_assert_eq!(set_a.difference(&elements_b), set_b.difference(&elements_a));
    }

    #[test]
    fn prop_difference_self_is_empty_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a);
        prop_assert!(set_a.difference(&set_a).is_empty());
    }
}

// =============================================================================
// Intersection Laws
// Description: membership is set-intersection regardless of operand sizes
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_membership_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let intersection = set_a.intersection(&elements_b);

        let expected: HashSet<i32> = model(&elements_a).intersection(&model(&elements_b)).copied().collect();
        prop_assert_eq!(members(&intersection), expected);
    }

    #[test]
    fn prop_intersection_commutativity_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let set_b = SuperSet::from(elements_b.clone());
        prop_assert_eq!(set_a.intersection(&elements_b), set_b.intersection(&elements_a));
    }

    #[test]
    fn prop_intersection_self_is_identity_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a);
        prop_assert_eq!(set_a.intersection(&set_a), set_a);
    }

    #[test]
    fn prop_intersection_empty_is_empty_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a);
        prop_assert!(set_a.intersection(Vec::<i32>::new()).is_empty());
    }
}

// =============================================================================
// Cartesian Product Laws
// Description: |A × B| = |A| * |B|, components come from their operand
// =============================================================================

proptest! {
    #[test]
    fn prop_cartesian_cardinality_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a);
        let product = set_a.cartesian(&elements_b);
        prop_assert_eq!(product.len(), set_a.len() * model(&elements_b).len());
    }

    #[test]
    fn prop_cartesian_components_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a);
        let set_b = SuperSet::from(elements_b.clone());
        let product = set_a.cartesian(&elements_b);

        for (left, right) in &product {
            prop_assert!(set_a.contains(left));
            prop_assert!(set_b.contains(right));
        }
    }
}

// =============================================================================
// Subset / Superset Laws
// Description: A ⊆ B iff every element of A is in B; A ⊇ B iff B ⊆ A
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_membership_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let expected = model(&elements_a).is_subset(&model(&elements_b));
        prop_assert_eq!(set_a.subset_of(&elements_b), expected);
    }

    #[test]
    fn prop_subset_reflexive_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a);
        prop_assert!(set_a.subset_of(&set_a));
    }

    #[test]
    fn prop_empty_subset_law(elements_b in elements()) {
        let empty: SuperSet<i32> = SuperSet::new();
        prop_assert!(empty.subset_of(&elements_b));
    }

    #[test]
    fn prop_superset_mirrors_subset_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let set_b = SuperSet::from(elements_b.clone());
        prop_assert_eq!(set_a.superset_of(&elements_b), set_b.subset_of(&set_a));
    }

    #[test]
    fn prop_intersection_is_subset_of_both_law(elements_a in elements(), elements_b in elements()) {
        let set_a = SuperSet::from(elements_a);
        let intersection = set_a.intersection(&elements_b);
        prop_assert!(intersection.subset_of(&set_a));
        prop_assert!(intersection.subset_of(&elements_b));
    }
}

// =============================================================================
// Sequence Conversion Law
// Description: to_vec holds every element once and matches len
// =============================================================================

proptest! {
    #[test]
    fn prop_to_vec_unique_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a.clone());
        let sequence = set_a.to_vec();

        prop_assert_eq!(sequence.len(), set_a.len());
        prop_assert_eq!(model(&sequence), model(&elements_a));
        prop_assert_eq!(model(&sequence).len(), sequence.len());
    }

    #[test]
    fn prop_to_vec_keeps_first_occurrence_order_law(elements_a in elements()) {
        let set_a = SuperSet::from(elements_a.clone());

        let mut seen = HashSet::new();
        let expected: Vec<i32> = elements_a.into_iter().filter(|element| seen.insert(*element)).collect();
        prop_assert_eq!(set_a.to_vec(), expected);
    }
}
