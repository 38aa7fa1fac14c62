// Context building: employee input + static configuration folded into the
// flat structure the document templates render against.

pub mod builder;
pub mod kpi;

pub use builder::RenderContext;
