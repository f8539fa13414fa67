#![cfg(not(feature = "hydrate"))]

use super::*;
use rand::Rng;

#[test]
fn now_ms_is_after_2024() {
    assert!(now_ms() > 1_704_067_200_000);
}

#[test]
fn sampling_rng_draws_values() {
    let mut rng = sampling_rng();
    let v: u32 = rng.random_range(50..250);
    assert!((50..250).contains(&v));
}
