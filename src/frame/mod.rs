pub(crate) mod animation;
pub(crate) mod compositor;
pub(crate) mod config;
