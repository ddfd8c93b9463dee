// Состояние для UI-слоя

pub mod status;

pub use status::{PqeStatus, StatusLevel};
