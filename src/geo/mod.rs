pub(crate) mod fetch;
pub(crate) mod geojson;
pub(crate) mod source;
