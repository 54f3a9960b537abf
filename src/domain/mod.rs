// Domain layer: ports (interfaces) only. Concrete working directories live in adapters.

pub mod ports;
