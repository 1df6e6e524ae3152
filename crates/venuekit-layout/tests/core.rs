#[path = "core/area_fit.rs"]
mod area_fit;
#[path = "core/geometry.rs"]
mod geometry;
#[path = "core/history.rs"]
mod history;
#[path = "core/viewport.rs"]
mod viewport;
