//! Integration tests for the ecoverde client.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the backend, then:
//! ECOVERDE_API_URL=http://localhost:8080 \
//! ECOVERDE_TEST_EMAIL=test@example.it \
//! ECOVERDE_TEST_PASSWORD=password \
//! cargo test -p ecoverde-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `ECOVERDE_API_URL` - backend base URL (default `http://localhost:8080`)
//! - `ECOVERDE_TEST_EMAIL` / `ECOVERDE_TEST_PASSWORD` - credentials of an
//!   existing active account the tests may log into
//!
//! All tests are `#[ignore]`d so a plain `cargo test` stays offline; the
//! client's offline behavior is covered by unit tests in `ecoverde-client`.
