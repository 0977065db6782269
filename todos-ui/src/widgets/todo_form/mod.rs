mod component;

pub use component::TodoForm;
