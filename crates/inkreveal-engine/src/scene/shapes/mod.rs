pub(crate) mod polyline;
pub(crate) mod rect;
