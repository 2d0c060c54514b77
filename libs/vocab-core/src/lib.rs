//! Answer checking for vocabulary quizzes.
//!
//! Provides:
//! - The answer checker (exact or case-insensitive comparison)
//! - The `Vocabulary` word list type
//! - A loader for plain-text and JSON word lists
//!
//! ```
//! use vocab_core::{check, Vocabulary};
//!
//! let colours = Vocabulary::from_iter([("geel", "yellow"), ("rood", "red")]);
//! assert!(check(&colours, "geel", "yellow", true));
//!
//! let countries = Vocabulary::from_iter([("Nederland", "Netherlands"), ("Duitsland", "Germany")]);
//! assert!(!check(&countries, "Nederland", "netherlands", true));
//! assert!(check(&countries, "Nederland", "netherlands", false));
//! ```
//!
//! Checking against an empty vocabulary, or for a word that is not in it,
//! is a caller bug and panics:
//!
//! ```should_panic
//! use vocab_core::{check, Vocabulary};
//!
//! check(&Vocabulary::new(), "a", "b", true);
//! ```

pub mod checker;
pub mod error;
pub mod loader;
pub mod vocabulary;

pub use checker::{check, fold_case, try_check};
pub use error::{CheckError, ParseError, Result};
pub use loader::parse_word_list;
pub use vocabulary::{CheckOptions, Vocabulary};
