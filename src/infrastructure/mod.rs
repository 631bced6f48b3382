pub mod assets;
pub mod image_codec;
pub mod pdf_renderer;

pub use pdf_renderer::PdfRenderer;
