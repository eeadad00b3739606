#[cfg(not(feature = "wasm"))]
use std::time::Instant;

#[cfg(not(feature = "wasm"))]
pub type Timestamp = Instant;
#[cfg(feature = "wasm")]
pub type Timestamp = f64;

#[cfg(not(feature = "wasm"))]
pub fn now() -> Timestamp {
    Instant::now()
}

#[cfg(not(feature = "wasm"))]
pub fn until_now(t: Timestamp) -> f64 {
    t.elapsed().as_secs_f64()
}

// Falls back to zero outside of a browser window.
#[cfg(feature = "wasm")]
pub fn now() -> Timestamp {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0.0, |performance| performance.now())
}

#[cfg(feature = "wasm")]
pub fn until_now(t: Timestamp) -> f64 {
    (now() - t) / 1000.0
}
