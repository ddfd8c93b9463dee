// Вспомогательные модули

pub mod b64;
#[cfg(feature = "cli")]
pub mod logging;
