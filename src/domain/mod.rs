pub mod amount;
pub mod asset;
pub mod priority;
pub mod ranker;
pub mod validator;
