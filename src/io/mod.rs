mod ops;

pub use ops::write_file;
