use medcalc_core::band::{Band, BandTable};

static GRADES: BandTable<&str> = BandTable::new(
    &[
        Band { upper: 4.0, value: "low" },
        Band { upper: 9.0, value: "mid" },
    ],
    "high",
);

#[test]
fn upper_bounds_are_inclusive() {
    assert_eq!(*GRADES.classify(4.0), "low");
    assert_eq!(*GRADES.classify(4.5), "mid");
    assert_eq!(*GRADES.classify(9.0), "mid");
}

#[test]
fn scores_past_every_bound_fall_through() {
    assert_eq!(*GRADES.classify(9.01), "high");
    assert_eq!(*GRADES.classify(1e9), "high");
    assert_eq!(*GRADES.classify(f64::NAN), "high");
}

#[test]
fn negative_scores_take_the_first_band() {
    assert_eq!(*GRADES.classify(-3.0), "low");
}

#[test]
fn rank_follows_band_order() {
    assert_eq!(GRADES.rank(0.0), 0);
    assert_eq!(GRADES.rank(5.0), 1);
    assert_eq!(GRADES.rank(10.0), 2);
}

#[test]
fn values_list_otherwise_last() {
    let values: Vec<_> = GRADES.values().copied().collect();
    assert_eq!(values, vec!["low", "mid", "high"]);
    assert!(GRADES.is_ascending());
}

#[test]
fn out_of_order_bounds_are_detected() {
    static BROKEN: BandTable<u8> = BandTable::new(
        &[Band { upper: 5.0, value: 0 }, Band { upper: 5.0, value: 1 }],
        2,
    );
    assert!(!BROKEN.is_ascending());
}
