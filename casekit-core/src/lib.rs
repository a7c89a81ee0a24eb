//! Word splitting, case conversion and rune-safe slicing for identifiers and
//! short display strings.
//!
//! Everything here is a pure function over borrowed input; there is no
//! shared state and nothing to configure.
//!
//! ```
//! use casekit_core::{camel_case, kebab_case, pascal_case, words};
//!
//! assert_eq!(words("parseHTTPResponse2"), ["parse", "HTTP", "Response", "2"]);
//! assert_eq!(pascal_case("hello world"), "HelloWorld");
//! assert_eq!(camel_case("Hello World"), "helloWorld");
//! assert_eq!(kebab_case("Hello World"), "hello-world");
//! ```

pub mod boundary;
pub mod case;
pub mod classify;
pub mod error;
pub mod pad;
pub mod substring;
pub mod truncate;
pub mod words;

pub use boundary::mark_boundaries;
pub use case::{camel_case, capitalize, capitalize_word, kebab_case, pascal_case, CaseStyle};
pub use classify::{is_alpha, is_alphanumeric, is_numeric};
pub use error::CaseKitError;
pub use pad::{pad_end, pad_start};
pub use substring::{rune_length, rune_window, substring};
pub use truncate::{ellipsis, ELLIPSIS};
pub use words::words;
