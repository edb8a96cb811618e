//! Property tests for bounded values and index-guarded array access.

use inrange_core::{
    ArrayIndex, BoundedI32, BoundedU8, BoundedU64, BoundedValue, ErrorKind, FixedArray,
};
use proptest::prelude::*;

type Signed = BoundedI32<-1000, 1000>;
type Unsigned = BoundedU8<3, 200>;
type Wide = BoundedU64<{ 1 << 40 }, { u64::MAX }>;

fn check_construction<B>(raw: B::Raw) -> Result<(), TestCaseError>
where
    B: BoundedValue,
{
    let in_range = B::LOW <= raw && raw < B::HIGH;
    match B::new(raw) {
        Ok(b) => {
            prop_assert!(in_range);
            prop_assert_eq!(b.get(), raw);
        }
        Err(err) => {
            prop_assert!(!in_range);
            prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn construction_accepts_exactly_the_range(raw in any::<i32>()) {
        check_construction::<Signed>(raw)?;
    }

    #[test]
    fn construction_accepts_exactly_the_range_u8(raw in any::<u8>()) {
        check_construction::<Unsigned>(raw)?;
    }

    #[test]
    fn construction_accepts_exactly_the_range_u64(raw in any::<u64>()) {
        check_construction::<Wide>(raw)?;
    }

    #[test]
    fn in_range_values_round_trip(raw in -1000..1000_i32) {
        let b = Signed::new(raw).unwrap();
        prop_assert_eq!(b.get(), raw);

        let again = Signed::new(b.get()).unwrap();
        prop_assert_eq!(again.get(), raw);
        prop_assert_eq!(again, b);
    }

    #[test]
    fn failed_reassignment_keeps_value(
        start in 3..200_u8,
        next in prop_oneof![0..3_u8, 200..=u8::MAX],
    ) {
        let mut b = Unsigned::new(start).unwrap();
        let err = b.set(next).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
        prop_assert_eq!(err.value(), i128::from(next));
        prop_assert_eq!(b.get(), start);
    }

    #[test]
    fn successful_reassignment_stores_value(start in 3..200_u8, next in 3..200_u8) {
        let mut b = Unsigned::new(start).unwrap();
        b.set(next).unwrap();
        prop_assert_eq!(b.get(), next);
    }

    #[test]
    fn array_index_guards_access(raw in 0..64_usize, value in any::<i64>()) {
        let mut a = FixedArray::<i64, 32>::new();
        match ArrayIndex::<32>::new(raw) {
            Ok(i) => {
                prop_assert!(raw < 32);
                a[i] = value;
                prop_assert_eq!(a[i], value);
                prop_assert_eq!(a.into_array()[raw], value);
            }
            Err(err) => {
                prop_assert!(raw >= 32);
                prop_assert_eq!(err.kind(), ErrorKind::OutOfRange);
                prop_assert_eq!(a.into_array(), [0; 32]);
            }
        }
    }
}

#[test]
fn five_indices_address_five_distinct_elements() {
    let mut a = FixedArray::<Option<usize>, 5>::new();
    for raw in 0..5 {
        let i = ArrayIndex::<5>::new(raw).unwrap();
        assert_eq!(a[i], None);
        a[i] = Some(raw);
    }
    assert_eq!(
        a.into_array(),
        [Some(0), Some(1), Some(2), Some(3), Some(4)]
    );
    assert_eq!(
        ArrayIndex::<5>::new(5).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
}

#[test]
fn bounds_are_inclusive_low_exclusive_high() {
    assert!(Signed::new(-1000).is_ok());
    assert!(Signed::new(999).is_ok());
    assert!(Signed::new(-1001).is_err());
    assert!(Signed::new(1000).is_err());
}
