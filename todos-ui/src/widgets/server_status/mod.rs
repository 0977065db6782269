mod component;

pub use component::ServerStatus;
