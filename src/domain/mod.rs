// Domain layer: wire models shared by every resource family, and the ports (traits) the adapters implement.

pub mod model;
pub mod ports;
