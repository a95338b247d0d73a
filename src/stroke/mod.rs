pub(crate) mod compiler;
