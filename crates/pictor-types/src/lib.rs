//! Helpers a host UI needs around generation records: PNG export for
//! downloads, download file names and short captions.
pub mod caption;
pub mod export;
pub mod naming;
