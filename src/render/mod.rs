pub(crate) mod composite;
pub(crate) mod compositor;
pub(crate) mod group;
pub(crate) mod surface;
