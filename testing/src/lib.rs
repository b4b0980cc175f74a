//! # Platewise Testing
//!
//! Testing utilities and helpers for the Platewise client architecture.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for reducer unit tests
//! - Assertion helpers for effect vectors
//!
//! ## Example
//!
//! ```ignore
//! use platewise_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(RecipeReducer::new())
//!     .with_env(test_environment())
//!     .given_state(RecipeListState::default())
//!     .when_action(RecipeAction::FetchPage { page: 2 })
//!     .then_state(|state| {
//!         assert_eq!(state.current_page, 2);
//!     })
//!     .then_effects(assertions::assert_has_future_effect)
//!     .run();
//! ```

pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};
