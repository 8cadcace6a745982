// Test module for parser
//
// This module contains unit tests for the type model, the cursor parser,
// and the error types.
