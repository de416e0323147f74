mod ops;
mod tree;
