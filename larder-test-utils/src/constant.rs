//! Shared test constants.

/// Password the user fixtures register with.
pub static TEST_PASSWORD: &str = "correct-horse-battery-staple";

/// A 1x1 transparent PNG as a base64 data URI, for image upload payloads.
pub static TEST_IMAGE_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
