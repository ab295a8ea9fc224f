pub mod frame;

pub use frame::{RenderRow, Renderer, bar_length, frame, layout};
