//! PIN entropy validation library
//!
//! This library rejects 4-digit PINs that follow easily guessed patterns
//! and rates their strength, with optional denylist support.
//!
//! Validation and strength rating are independent: a PIN rejected by
//! [`validate_pin`] can still rate [`PinStrength::Strong`].
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PIN_DENYLIST_PATH`: Custom path to a file of common PINs
//!   (default: `./assets/common-pins.txt`)
//!
//! # Example
//!
//! ```rust
//! use pin_entropy::{calculate_strength, validate_pin};
//! use secrecy::SecretString;
//!
//! let pins = ["1234", "0000", "1111", "9999", "2580", "1379", "2024", "1221", "9876", "2468"];
//!
//! for pin in pins {
//!     let secret = SecretString::new(pin.to_string().into());
//!     let verdict = validate_pin(&secret);
//!     let strength = calculate_strength(&secret);
//!     println!("PIN {}: {} - Strength: {}", pin, verdict, strength);
//! }
//!
//! let verdict = validate_pin(&SecretString::new("2580".to_string().into()));
//! assert!(verdict.is_valid);
//! ```

// Internal modules
mod denylist;
mod evaluator;
mod pin;
mod rules;
mod strength;
mod types;

// Public API
pub use denylist::{
    get_denylist, get_denylist_path, init_denylist, init_denylist_from_path, is_denylisted,
    DenylistError,
};
pub use evaluator::{evaluate_pin, validate_pin};
pub use pin::{PinFormatError, PIN_LENGTH};
pub use strength::{calculate_strength, strength_score};
pub use types::{PinEvaluation, PinStrength, Verdict, ACCEPTED_REASON};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_pin_tx, DEBOUNCE};
