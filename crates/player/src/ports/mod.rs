//! Ports - contracts between the client and the outside world

pub mod outbound;
