pub mod canvas;
pub mod composite;
pub mod pipeline;
pub mod raster;
