pub mod scope;
pub mod tree;
pub mod value;
