pub mod requests;

pub use requests::TodoPayload;
