pub mod recovery;
pub mod store_io;
