
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    match option_env!("WAITLIST_BACKEND_URL") {
        Some(url) => url,
        None => "http://localhost:3001", // Development URL when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("WAITLIST_BACKEND_URL") {
        Some(url) => url,
        None => "https://expressjs-prisma-production-bd0a.up.railway.app",
    }
}

pub fn waitlist_url() -> String {
    format!("{}/waitlist", get_backend_url().trim_end_matches('/'))
}

/// How long a result dialog stays up unless closed.
pub const NOTICE_TIMEOUT_MS: u32 = 10_000;
pub const CLOCK_TICK_MS: u32 = 1_000;
/// Matches the `sparkle-fade-scale` animation length.
pub const SPARKLE_LIFETIME_MS: u32 = 700;
/// Narrower windows get the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
