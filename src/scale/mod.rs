pub(crate) mod linear;
pub(crate) mod projection;
