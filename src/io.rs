//!
//! Model files and sequence output
//!
pub mod fasta;
pub mod model_file;
