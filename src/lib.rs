//! Injection-safe Python syntax highlighting.
//!
//! [`highlight`] turns Python source into an HTML fragment in which every
//! token of interest is wrapped in `<span class="…">` and every other byte is
//! HTML-escaped.  The function is pure and total: it accepts any text,
//! including unterminated strings and non-ASCII input, and keeps all
//! whitespace and line breaks intact.
//!
//! ```
//! assert_eq!(
//!     pyhl::highlight("x = len('<')"),
//!     "x = <span class=\"nb\">len</span>(<span class=\"s\">&#039;&lt;&#039;</span>)"
//! );
//! ```

pub mod batch;
pub mod discovery;
pub mod escape;
pub mod location;
pub mod render;
pub mod scanner;
pub mod types;

pub use render::highlight;
pub use scanner::scan;
pub use types::{TokenKind, TokenSpan};
