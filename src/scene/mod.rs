pub(crate) mod compiler;
pub(crate) mod config;
pub(crate) mod content;
pub(crate) mod intent;
pub(crate) mod model;
