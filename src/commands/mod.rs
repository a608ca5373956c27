pub mod delete;
pub mod extract;
pub mod info;
pub mod resolve;
pub mod split;
