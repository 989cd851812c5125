//! Edge case and property tests for kplc-lex
