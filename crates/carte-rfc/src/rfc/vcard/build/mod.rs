//! vCard serialization (vCard 2.1, RFC 2426 and RFC 6350).
//!
//! ## Features
//!
//! - Line folding at a configurable width (75 octets by default), never
//!   inside a UTF-8 character, escape pair, `=XX` triplet or base64 quantum
//! - Text escaping per version, quoted-printable for 2.1 line breaks
//! - RFC 6868 caret encoding for parameters
//! - Fixed property order for stable output

mod escape;
mod fold;
mod quoted_printable;
mod serializer;

pub use escape::{escape, escape_param_value, escape_text, escape_uri};
pub use fold::{fold, fold_base64, fold_line, fold_quoted_printable};
pub use quoted_printable::qp_encode;
pub use serializer::{
    RenderOptions, compose, render, render_embedded, render_linked, render_with_options,
};
