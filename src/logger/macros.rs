//! Call-site macros.
//!
//! Each macro passes the calling module's path as the origin and defers
//! building the payload until both the debug gate and the filter accept the
//! entry.
//!
//! ```ignore
//! loglight::debug!(logger, expensive_snapshot());
//! loglight::info!(logger, "listening");
//! loglight::error!(logger, serde_json::json!({"code": 500}));
//! ```

#[macro_export]
macro_rules! debug {
    ($logger:expr, $payload:expr $(,)?) => {
        $logger.log_from(
            ::core::module_path!(),
            $crate::LogLevel::Debug,
            || $payload,
        )
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $payload:expr $(,)?) => {
        $logger.log_from(
            ::core::module_path!(),
            $crate::LogLevel::Info,
            || $payload,
        )
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $payload:expr $(,)?) => {
        $logger.log_from(
            ::core::module_path!(),
            $crate::LogLevel::Error,
            || $payload,
        )
    };
}
