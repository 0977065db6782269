mod component;

pub use component::ErrorBanner;
