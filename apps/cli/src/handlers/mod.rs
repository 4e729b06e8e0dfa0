pub(crate) mod config;
pub(crate) mod files;
pub(crate) mod manifest;
