pub mod api;
pub mod core;

use std::sync::Once;

pub use crate::core::logger::{DEBUG_BUILD, DEFAULT_TAG};

static LOGGER_INIT: Once = Once::new();

pub fn init_logging() {
    LOGGER_INIT.call_once(|| {
        #[cfg(target_os = "android")]
        {
            android_logger::init_once(
                android_logger::Config::default()
                    .with_max_level(log::LevelFilter::Info)
                    .with_tag(DEFAULT_TAG),
            );
        }

        #[cfg(not(target_os = "android"))]
        {
            // host builds: whichever `log` backend the embedding binary installs
        }
    });
}

pub fn is_logging_initialized() -> bool {
    LOGGER_INIT.is_completed()
}
