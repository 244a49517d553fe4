//! Time helpers that work in the browser and on the server.
//!
//! TRADE-OFFS
//! ==========
//! In the browser, sleeps are real `setTimeout` timers and the year comes
//! from `Date`. Outside `hydrate` (SSR and native tests) sleeps resolve
//! immediately, so timer-driven flows can be exercised synchronously.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}

/// Current calendar year (UTC on the server, local time in the browser).
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_wrap)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
