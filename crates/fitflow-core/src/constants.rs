//! Constants shared by the pipeline stages.

/// Image whose per-fit artifacts serve as references for every other image.
pub const REFERENCE_IMAGE: u32 = 1;

/// Default number of images in a run.
pub const DEFAULT_IMAGE_COUNT: u32 = 5;

/// Default number of fits per image.
pub const DEFAULT_FIT_COUNT: u32 = 3;

/// Default directory for result artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Default directory for reference artifacts.
pub const DEFAULT_PREDICTION_DIR: &str = "predictions";

/// Mock result value recorded by the unit processor.
pub const MOCK_RESULT: &str = "some_calculated_result";

/// Exit codes for the `fitflow` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An artifact could not be read or written.
    pub const ERROR_STORAGE: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_image_is_first() {
        assert_eq!(REFERENCE_IMAGE, 1);
    }

    #[test]
    fn exit_codes_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_STORAGE,
            exit_codes::ERROR_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
