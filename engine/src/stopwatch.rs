/// Wall-clock stopwatch in milliseconds.
/// JS imports panic off-wasm, so native builds time with `Instant`.
pub struct Stopwatch {
    #[cfg(target_arch = "wasm32")]
    start: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl Stopwatch {
    #[cfg(target_arch = "wasm32")]
    pub fn start() -> Self {
        Stopwatch {
            start: js_sys::Date::now(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn start() -> Self {
        Stopwatch {
            start: std::time::Instant::now(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.start
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}
