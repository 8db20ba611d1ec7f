//! Tests for the path expression engine

use super::*;

mod alternation;
mod each;
mod resolve;
