// Протокол обмена с сервером: сообщения, JSON wire format, HTTP транспорт

pub mod messages;
pub mod transport;
pub mod wire;
