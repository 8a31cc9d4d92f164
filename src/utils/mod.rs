pub(crate) mod constants;
pub(crate) mod deserializer;
pub(crate) mod keyboard;
