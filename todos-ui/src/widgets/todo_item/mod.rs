mod component;

pub use component::TodoItem;
