//! Test doubles shared by the unit tests.

use rand::RngCore;

/// RNG that panics on any use.
///
/// Passing it to a generator proves the call never reaches the entropy
/// source, which is what the degenerate-bound fast paths and the
/// validate-before-sampling rule promise.
pub struct PanickingRng;

impl RngCore for PanickingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("entropy source must not be consulted")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("entropy source must not be consulted")
    }

    fn fill_bytes(&mut self, _dst: &mut [u8]) {
        panic!("entropy source must not be consulted")
    }
}
