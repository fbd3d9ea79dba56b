/// Current Unix time in seconds.
///
/// Uses `js_sys::Date::now()` on WASM and `std::time::SystemTime` on native,
/// so expiry checks behave the same in the browser and in host tests.
pub fn now_unix_secs() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
