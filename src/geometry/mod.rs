pub(crate) mod loader;
pub(crate) mod outline;
pub(crate) mod provider;
pub(crate) mod trim;
